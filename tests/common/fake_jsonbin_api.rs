//! Fake JSONBin API server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1 and serves `GET /v3/b/{id}` from an in-memory map. Unknown
//! bins answer 404. The `X-Master-Key` of the last request is recorded.
//!
//! ```rust,no_run
//! let api = FakeJsonBinApi::start().await.unwrap();
//! api.put_bin("abc", envelope(XML_FULL)).await;
//! let source = HttpSource::new(api.base_url());
//! ```

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[derive(Default)]
struct ApiState {
    bins: HashMap<String, String>,
    last_key: Option<String>,
}

/// Handle to the running fake API server.
pub struct FakeJsonBinApi {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

impl FakeJsonBinApi {
    /// Start the server on a random port. Returns once it is listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState::default()));

        let app = Router::new()
            .route("/v3/b/{id}", get(read_bin))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// Base URL to configure an `HttpSource` with; bin ids are appended.
    pub fn base_url(&self) -> String {
        format!("http://{}/v3/b/", self.addr)
    }

    /// Store `body` as the full response for `id`.
    pub async fn put_bin(&self, id: &str, body: impl Into<String>) {
        self.state.lock().await.bins.insert(id.to_string(), body.into());
    }

    pub async fn last_master_key(&self) -> Option<String> {
        self.state.lock().await.last_key.clone()
    }
}

async fn read_bin(
    State(state): State<Arc<Mutex<ApiState>>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let mut state = state.lock().await;
    state.last_key = headers
        .get("x-master-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    match state.bins.get(&id) {
        Some(body) => (StatusCode::OK, body.clone()),
        None => (
            StatusCode::NOT_FOUND,
            r#"{"message":"Bin not found or it doesn't belong to your account"}"#.to_string(),
        ),
    }
}
