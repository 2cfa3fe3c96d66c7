use std::io;
use std::path::Path;

use chrono::Utc;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;

/// Append-only output file for one batch, named by the request's creation
/// time at nanosecond resolution. Opened with `create_new` so two requests
/// landing on the same tick error out instead of sharing a file.
pub struct ResultSink {
    name: String,
    file: File,
}

impl ResultSink {
    pub async fn create(dir: &Path) -> io::Result<Self> {
        let stamp = Utc::now()
            .timestamp_nanos_opt()
            .expect("system clock outside timestamp range");
        let name = format!("{stamp}.txt");
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(dir.join(&name))
            .await?;
        Ok(Self { name, file })
    }

    /// File name reported back to the caller as the retrieval token.
    pub fn file_name(&self) -> &str {
        &self.name
    }

    /// Appends one link as its own line.
    pub async fn append(&mut self, link: &str) -> io::Result<()> {
        self.file.write_all(format!("{link}\n").as_bytes()).await
    }

    /// Flushes pending writes. The file itself closes on drop on every exit
    /// path; this makes sure the lines got there before the caller is told
    /// where to look.
    pub async fn finish(mut self) -> io::Result<()> {
        self.file.flush().await
    }
}
