//! In-process stand-ins for the external search API.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use url::Url;

use crate::search::SearchClient;

/// Query parameters of every call the stub has received, in arrival order.
pub type SeenCalls = Arc<Mutex<Vec<HashMap<String, String>>>>;

/// Stub search API with scripted per-keyword behavior, keyed on `q`:
/// "limited" answers 429, "broken" 500, "garbled" a 200 that is not JSON,
/// "slow" stalls for a second, "multi" returns three links, and anything
/// else one link of the form `https://example.com/<keyword>`.
pub fn recording_stub() -> (Router, SeenCalls) {
    let seen: SeenCalls = Arc::new(Mutex::new(Vec::new()));
    let recorded = seen.clone();

    let app = Router::new().route(
        "/",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let recorded = recorded.clone();
            async move {
                let q = params.get("q").cloned().unwrap_or_default();
                recorded.lock().unwrap().push(params);
                match q.as_str() {
                    "limited" => (StatusCode::TOO_MANY_REQUESTS, "slow down").into_response(),
                    "broken" => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response()
                    }
                    "garbled" => "this is not json".into_response(),
                    "slow" => {
                        tokio::time::sleep(Duration::from_secs(1)).await;
                        Json(json!({ "results": [] })).into_response()
                    }
                    "multi" => Json(json!({
                        "results": [
                            { "link": "https://example.com/multi/1" },
                            { "link": "https://example.com/multi/2" },
                            { "link": "https://example.com/multi/3" },
                        ]
                    }))
                    .into_response(),
                    _ => Json(json!({
                        "results": [{ "link": format!("https://example.com/{q}") }]
                    }))
                    .into_response(),
                }
            }
        }),
    );

    (app, seen)
}

/// Binds `app` to an ephemeral local port and serves it in the background.
pub async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

pub fn base_url(addr: SocketAddr) -> Url {
    Url::parse(&format!("http://{addr}/")).unwrap()
}

/// Search client pointed at a stub, with the production deadline.
pub fn client_for(addr: SocketAddr) -> SearchClient {
    SearchClient::new(reqwest::Client::new(), base_url(addr), "test-key".into())
}
