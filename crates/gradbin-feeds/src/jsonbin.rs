//! JSONBin HTTP source.
//!
//! Issues `GET <base_url><bin id>` and returns the response body. The bin id
//! is trimmed and percent-encoded the way `encodeURIComponent` does it. Both
//! `https://` (webpki roots) and plain `http://` endpoints are reachable.

use std::time::Duration;

use http::{header::HeaderValue, Request, Uri};
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};

use crate::{FetchError, RecordSource};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const MASTER_KEY_HEADER: &str = "x-master-key";

type HttpsClient = Client<HttpsConnector<HttpConnector>, Empty<Bytes>>;

/// Reads bins from a JSONBin-compatible HTTP API.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    access_key: Option<String>,
    timeout: Duration,
    client: HttpsClient,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let connector = HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .build();
        Self {
            base_url: base_url.into(),
            access_key: None,
            timeout: DEFAULT_TIMEOUT,
            client: Client::builder(TokioExecutor::new()).build(connector),
        }
    }

    pub fn with_access_key(mut self, access_key: Option<String>) -> Self {
        self.access_key = access_key;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL for `bin_id`.
    pub fn bin_url(&self, bin_id: &str) -> Result<Uri, FetchError> {
        let bin_id = bin_id.trim();
        if bin_id.is_empty() {
            return Err(FetchError::EmptyBinId);
        }
        let url = format!("{}{}", self.base_url, encode_component(bin_id));
        url.parse()
            .map_err(|source| FetchError::InvalidUrl { url: url.clone(), source })
    }

    async fn get(&self, uri: Uri) -> Result<String, FetchError> {
        let mut request = Request::new(Empty::<Bytes>::new());
        *request.uri_mut() = uri;
        if let Some(key) = &self.access_key {
            request
                .headers_mut()
                .insert(MASTER_KEY_HEADER, HeaderValue::from_str(key)?);
        }

        let response = self.client.request(request).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16() });
        }

        let body = response.into_body().collect().await?.to_bytes();
        Ok(String::from_utf8(body.to_vec())?)
    }
}

impl RecordSource for HttpSource {
    fn describe(&self) -> String {
        format!("jsonbin {}", self.base_url)
    }

    async fn fetch(&self, bin_id: &str) -> Result<String, FetchError> {
        let uri = self.bin_url(bin_id)?;
        tracing::debug!(%uri, "fetching bin");
        let body = tokio::time::timeout(self.timeout, self.get(uri))
            .await
            .map_err(|_| FetchError::Timeout(self.timeout))??;
        tracing::debug!(bytes = body.len(), "bin fetched");
        Ok(body)
    }
}

/// Percent-encode everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(b as char),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
