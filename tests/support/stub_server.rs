// ABOUTME: Local axum server for exercising the API clients end to end.
// ABOUTME: Serves scripted responses per route and records every request it receives.

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, mpsc};
use std::thread;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path including any query string.
    pub target: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or_default()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body should be JSON")
    }
}

#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
}

impl StubResponse {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

type Routes = HashMap<(String, String), VecDeque<StubResponse>>;

#[derive(Clone, Default)]
struct Shared {
    routes: Arc<Mutex<Routes>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Runs on its own thread and tokio runtime, so it serves both async tests
/// and binaries spawned by `assert_cmd`.
pub struct StubServer {
    base_url: String,
    shared: Shared,
}

impl StubServer {
    pub fn start() -> Self {
        let shared = Shared::default();
        let app = Router::new().fallback(handle).with_state(shared.clone());

        let (addr_tx, addr_rx) = mpsc::channel::<SocketAddr>();
        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("build stub server runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind stub server");
                addr_tx
                    .send(listener.local_addr().expect("stub server address"))
                    .expect("report stub server address");
                axum::serve(listener, app).await.expect("serve stub");
            });
        });
        let addr = addr_rx.recv().expect("stub server should start");

        Self {
            base_url: format!("http://{addr}"),
            shared,
        }
    }

    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Queue a response for `method path`. The last queued response repeats.
    pub fn respond(&self, method: &str, path: &str, response: StubResponse) -> &Self {
        self.shared
            .routes
            .lock()
            .entry((method.to_string(), path.to_string()))
            .or_default()
            .push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.shared.requests.lock().clone()
    }
}

async fn handle(
    State(shared): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request = RecordedRequest {
        method: method.to_string(),
        target: uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| uri.path().to_string()),
        headers: headers
            .iter()
            .filter_map(|(name, value)| {
                Some((name.as_str().to_string(), value.to_str().ok()?.to_string()))
            })
            .collect(),
        body: String::from_utf8_lossy(&body).into_owned(),
    };

    let key = (request.method.clone(), request.path().to_string());
    let scripted = {
        let mut routes = shared.routes.lock();
        match routes.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        }
    };
    shared.requests.lock().push(request);

    match scripted {
        Some(response) => (
            StatusCode::from_u16(response.status).expect("scripted status code"),
            [(header::CONTENT_TYPE, "application/json")],
            response.body,
        )
            .into_response(),
        None => StatusCode::NOT_IMPLEMENTED.into_response(),
    }
}
