//! File source: reads a saved bin (or a bare payload) from disk.

use std::path::PathBuf;

use crate::{FetchError, RecordSource};

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for FileSource {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    async fn fetch(&self, _bin_id: &str) -> Result<String, FetchError> {
        tracing::debug!(path = %self.path.display(), "reading record file");
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| FetchError::Io {
                path: self.path.clone(),
                source,
            })
    }
}
