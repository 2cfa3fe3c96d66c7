use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Form, Router};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::search::QueryParams;
use crate::sink::ResultSink;
use crate::types::SearchForm;
use crate::{batch, AppState};

/// Builds the application router: the batch endpoint plus the static form
/// UI served from the configured web directory.
pub fn app(state: Arc<AppState>) -> Router {
    let index = state.config.web_dir.join("index.html");
    let assets = ServeDir::new(&state.config.web_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/search", post(run_search))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Accepts one keyword batch, runs it to a terminal state and names the
/// output file in the response. Non-POST methods on `/search` are answered
/// 405 by the method router before this runs, so they have no side effects.
async fn run_search(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SearchForm>,
) -> Result<String, StatusCode> {
    let mut sink = ResultSink::create(&state.config.output_dir)
        .await
        .map_err(|err| {
            error!(error = %err, "failed to create output file");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let params = QueryParams {
        lr: form.lr,
        cr: form.cr,
        num: form.num,
    };

    let outcome = batch::run(&state.search, &params, &form.keywords, &mut sink)
        .await
        .map_err(|err| {
            error!(error = %err, file = sink.file_name(), "failed to write output file");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let name = sink.file_name().to_string();
    sink.finish().await.map_err(|err| {
        error!(error = %err, file = %name, "failed to flush output file");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    info!(file = %name, ?outcome, "batch finished");
    Ok(format!("Done. See {name:?}."))
}
