use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use url::Url;

/// Production search endpoint. `SEARCH_API_URL` overrides it, which is
/// also how tests point the client at a local stub.
const DEFAULT_API_URL: &str = "https://rapidapi.p.rapidapi.com/api/v1/search";

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Process configuration, read from the environment exactly once at
/// startup. Request handlers only ever see this struct.
#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: String,
    pub endpoint: Url,
    pub listen_addr: SocketAddr,
    /// Directory batch output files are created in.
    pub output_dir: PathBuf,
    /// Directory the static form UI is served from.
    pub web_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = env::var("RAPIDAPI_KEY").context("RAPIDAPI_KEY must be provided")?;

        let endpoint = env::var("SEARCH_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let endpoint = Url::parse(&endpoint).context("SEARCH_API_URL is not a valid URL")?;

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_addr
            .parse()
            .context("LISTEN_ADDR is not a valid socket address")?;

        let output_dir = env::var("OUTPUT_DIR").map(PathBuf::from).unwrap_or_else(|_| ".".into());
        let web_dir = env::var("WEB_DIR").map(PathBuf::from).unwrap_or_else(|_| "web".into());

        Ok(Self {
            api_key,
            endpoint,
            listen_addr,
            output_dir,
            web_dir,
        })
    }
}
