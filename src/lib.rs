pub mod batch;
pub mod config;
pub mod search;
pub mod server;
pub mod sink;
pub mod types;

#[cfg(test)]
pub(crate) mod testutil;

use crate::config::Config;
use crate::search::SearchClient;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub search: SearchClient,
}

impl AppState {
    pub fn new(config: Config, http_client: reqwest::Client) -> Self {
        let search = SearchClient::new(
            http_client,
            config.endpoint.clone(),
            config.api_key.clone(),
        );
        Self { config, search }
    }
}
