//! gradbin-feeds: record sources for gradbin.
//!
//! Each source returns the raw text of one bin: normally the JSONBin response
//! envelope (`{"record": {...}, "metadata": {...}}`), or a bare gradient
//! payload when the caller asked for raw mode. Parsing that text is the
//! core's job; sources only move bytes.

pub mod file;
pub mod jsonbin;
pub mod stdin;

use std::path::PathBuf;
use std::time::Duration;

pub use file::FileSource;
pub use jsonbin::HttpSource;
pub use stdin::StdinSource;

/// Trait implemented by each record source.
#[allow(async_fn_in_trait)]
pub trait RecordSource {
    /// Short description for logs and status lines.
    fn describe(&self) -> String;

    /// Fetch the text for `bin_id`. Sources that do not address bins by id
    /// ignore it.
    async fn fetch(&self, bin_id: &str) -> Result<String, FetchError>;
}

/// A record could not be retrieved.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Please enter a bin id.")]
    EmptyBinId,
    #[error("invalid bin URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: http::uri::InvalidUri,
    },
    #[error("invalid access key: {0}")]
    InvalidAccessKey(#[from] http::header::InvalidHeaderValue),
    #[error("bin not found or server unavailable (status {status})")]
    Status { status: u16 },
    #[error("network error: {0}")]
    Request(#[from] hyper_util::client::legacy::Error),
    #[error("failed to read response body: {0}")]
    Body(#[from] hyper::Error),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("record is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Enum dispatch over the concrete sources, so callers can pick one at
/// runtime without boxing an async trait.
#[derive(Debug)]
pub enum Source {
    Http(HttpSource),
    File(FileSource),
    Stdin(StdinSource),
}

impl RecordSource for Source {
    fn describe(&self) -> String {
        match self {
            Source::Http(s) => s.describe(),
            Source::File(s) => s.describe(),
            Source::Stdin(s) => s.describe(),
        }
    }

    async fn fetch(&self, bin_id: &str) -> Result<String, FetchError> {
        match self {
            Source::Http(s) => s.fetch(bin_id).await,
            Source::File(s) => s.fetch(bin_id).await,
            Source::Stdin(s) => s.fetch(bin_id).await,
        }
    }
}
