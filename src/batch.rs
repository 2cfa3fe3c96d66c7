use std::io;

use tracing::{info, warn};

use crate::search::{QueryError, QueryParams, SearchClient};
use crate::sink::ResultSink;

/// Terminal state of one batch run. Callers get the same response either
/// way; the distinction only shows up in the logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchOutcome {
    /// The keyword list was exhausted.
    Completed,
    /// A rate-limit signal stopped the batch early.
    Aborted,
}

/// Runs one keyword batch to a terminal state.
///
/// Each non-blank line of `keywords` is queried in input order and every
/// returned link appended to the sink. A keyword that fails is logged and
/// skipped; a rate-limited one ends the whole batch. Only sink I/O errors
/// out of the loop.
pub async fn run(
    client: &SearchClient,
    params: &QueryParams,
    keywords: &str,
    sink: &mut ResultSink,
) -> io::Result<BatchOutcome> {
    for line in keywords.lines() {
        let keyword = line.trim();
        if keyword.is_empty() {
            continue;
        }

        match client.query(keyword, params).await {
            Ok(links) => {
                info!(%keyword, count = links.len(), "appending links");
                for link in &links {
                    sink.append(link).await?;
                }
            }
            Err(QueryError::RateLimited) => {
                warn!(%keyword, "rate limited, aborting remainder of batch");
                return Ok(BatchOutcome::Aborted);
            }
            Err(err) => {
                warn!(%keyword, error = %err, "keyword failed, continuing");
            }
        }
    }

    Ok(BatchOutcome::Completed)
}
