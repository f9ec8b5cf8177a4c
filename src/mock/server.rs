// src/mock/server.rs
use super::routes::{resolve, Verdict};
use anyhow::Result;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Request, Response, Server, StatusCode};
use rand::Rng;
use serde_json::json;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, error, info};

/// Latency and failure injection for the stub service.
#[derive(Debug, Clone, Default)]
pub struct StubSettings {
    pub base_delay_ms: u64,
    pub jitter_ms: u64,
    /// Percentage of requests answered with 500, 0-100.
    pub fail_pct: f64,
}

impl StubSettings {
    /// Reads `BASE_DELAY_MS`, `JITTER_MS` and `FAIL_PCT`; unset or unparsable
    /// values default to zero.
    pub fn from_env() -> Self {
        Self {
            base_delay_ms: env_or("BASE_DELAY_MS", 0),
            jitter_ms: env_or("JITTER_MS", 0),
            fail_pct: env_or("FAIL_PCT", 0.0),
        }
    }

    fn sample_delay_ms(&self) -> u64 {
        if self.jitter_ms == 0 {
            return self.base_delay_ms;
        }
        self.base_delay_ms
            .saturating_add(rand::thread_rng().gen_range(0..=self.jitter_ms))
    }

    fn inject_failure(&self) -> bool {
        let p = (self.fail_pct / 100.0).clamp(0.0, 1.0);
        p > 0.0 && rand::thread_rng().gen_bool(p)
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[derive(Clone)]
struct StubState {
    settings: StubSettings,
    req_counter: Arc<AtomicU64>,
    request_log: Arc<Mutex<Vec<String>>>,
}

/// A running stub service. The server task is aborted on drop.
pub struct StubHandle {
    addr: SocketAddr,
    state: StubState,
    task: JoinHandle<()>,
}

impl StubHandle {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn request_count(&self) -> u64 {
        self.state.req_counter.load(Ordering::SeqCst)
    }

    /// Path and query of every request received, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.state
            .request_log
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }

    /// Resolves once the server stops.
    pub async fn wait(mut self) {
        let _ = (&mut self.task).await;
    }
}

impl Drop for StubHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Binds the stub service on `addr` (port 0 picks a free port) and serves it
/// on a background task.
pub async fn spawn(addr: SocketAddr, settings: StubSettings) -> Result<StubHandle> {
    let state = StubState {
        settings,
        req_counter: Arc::new(AtomicU64::new(0)),
        request_log: Arc::new(Mutex::new(Vec::new())),
    };

    let service_state = state.clone();
    let make_svc = make_service_fn(move |_conn| {
        let st = service_state.clone();
        async move { Ok::<_, Infallible>(service_fn(move |req| handle(req, st.clone()))) }
    });

    let server = Server::try_bind(&addr)?.serve(make_svc);
    let addr = server.local_addr();

    info!(
        "Stub service on http://{} [delay={}ms±{} fail={}%]",
        addr, state.settings.base_delay_ms, state.settings.jitter_ms, state.settings.fail_pct
    );

    let task = tokio::spawn(async move {
        if let Err(e) = server.await {
            error!("Stub service error: {}", e);
        }
    });

    Ok(StubHandle { addr, state, task })
}

async fn handle(req: Request<Body>, state: StubState) -> Result<Response<Body>, Infallible> {
    let n = state.req_counter.fetch_add(1, Ordering::SeqCst) + 1;
    let path = req.uri().path().to_owned();
    let query: Vec<(String, String)> = req
        .uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default();

    let target = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_owned())
        .unwrap_or_else(|| path.clone());
    if let Ok(mut log) = state.request_log.lock() {
        log.push(target.clone());
    }
    debug!("Stub request #{} {}", n, target);

    let delay = state.settings.sample_delay_ms();
    if delay > 0 {
        sleep(Duration::from_millis(delay)).await;
    }

    if state.settings.inject_failure() {
        return Ok(json_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "detail": "Injected failure" }),
        ));
    }

    let response = match resolve(&path, &query) {
        Verdict::Found => {
            let params: BTreeMap<_, _> = query.into_iter().collect();
            json_response(
                StatusCode::OK,
                json!({ "path": path, "query": params, "req": n, "delay_ms": delay }),
            )
        }
        Verdict::MissingParam(keys) => json_response(
            StatusCode::BAD_REQUEST,
            json!({ "detail": format!("Expected one of: {}", keys.join(", ")) }),
        ),
        Verdict::NotFound => {
            json_response(StatusCode::NOT_FOUND, json!({ "detail": "Not Found" }))
        }
    };

    Ok(response)
}

fn json_response(status: StatusCode, body: serde_json::Value) -> Response<Body> {
    let mut response = Response::new(Body::from(body.to_string()));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}
