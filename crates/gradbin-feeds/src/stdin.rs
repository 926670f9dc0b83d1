//! Stdin source: reads the whole of standard input once.

use tokio::io::AsyncReadExt;

use crate::{FetchError, RecordSource};

#[derive(Debug, Clone, Default)]
pub struct StdinSource;

impl RecordSource for StdinSource {
    fn describe(&self) -> String {
        "stdin".to_string()
    }

    async fn fetch(&self, _bin_id: &str) -> Result<String, FetchError> {
        let mut buf = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut buf)
            .await
            .map_err(|source| FetchError::Io {
                path: "<stdin>".into(),
                source,
            })?;
        Ok(String::from_utf8(buf)?)
    }
}
