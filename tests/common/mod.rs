//! Scriptable mock of the verification backend.

#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use url::Url;

use pokket::auth::{AuthError, Navigator};

/// Canned responses, served in order.
#[derive(Clone)]
pub struct BackendScript {
    pub config: (u16, Value),
    /// Successive `/verification/status` responses; the last one repeats.
    pub statuses: Vec<Value>,
    pub simulate: (u16, Value),
    pub auth: (u16, Value),
}

impl Default for BackendScript {
    fn default() -> Self {
        Self {
            config: (
                200,
                json!({
                    "contractAddress": "0x5FbDB2315678afecb367f032d93F642f64180aa3",
                    "network": "sepolia",
                    "enabled": true
                }),
            ),
            statuses: vec![json!({ "isVerified": false })],
            simulate: (200, json!({ "success": true, "txHash": "0x1", "blockNumber": 42 })),
            auth: (200, json!({ "url": "https://accounts.google.com/o/oauth2/v2/auth?client_id=pokket" })),
        }
    }
}

/// What the mock observed.
#[derive(Default)]
pub struct Hits {
    pub config: AtomicU32,
    pub status: AtomicU32,
    pub simulate: AtomicU32,
    pub auth: AtomicU32,
    pub status_addresses: Mutex<Vec<String>>,
    pub simulate_bodies: Mutex<Vec<Value>>,
    pub request_ids: Mutex<Vec<String>>,
}

impl Hits {
    pub fn count(counter: &AtomicU32) -> u32 {
        counter.load(Ordering::SeqCst)
    }
}

struct Shared {
    script: BackendScript,
    statuses: Mutex<VecDeque<Value>>,
    hits: Arc<Hits>,
}

fn status_code(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn record_request_id(shared: &Shared, headers: &HeaderMap) {
    if let Some(id) = headers.get("x-request-id").and_then(|v| v.to_str().ok()) {
        shared.hits.request_ids.lock().unwrap().push(id.to_string());
    }
}

async fn config(State(shared): State<Arc<Shared>>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    shared.hits.config.fetch_add(1, Ordering::SeqCst);
    record_request_id(&shared, &headers);
    let (code, body) = shared.script.config.clone();
    (status_code(code), Json(body))
}

async fn status(
    State(shared): State<Arc<Shared>>,
    Path(address): Path<String>,
    headers: HeaderMap,
) -> Json<Value> {
    shared.hits.status.fetch_add(1, Ordering::SeqCst);
    record_request_id(&shared, &headers);
    shared.hits.status_addresses.lock().unwrap().push(address);

    let mut queue = shared.statuses.lock().unwrap();
    let body = if queue.len() > 1 {
        queue.pop_front().unwrap()
    } else {
        queue.front().cloned().unwrap_or_else(|| json!({ "isVerified": false }))
    };
    Json(body)
}

async fn simulate(
    State(shared): State<Arc<Shared>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    shared.hits.simulate.fetch_add(1, Ordering::SeqCst);
    record_request_id(&shared, &headers);
    shared.hits.simulate_bodies.lock().unwrap().push(body);
    let (code, body) = shared.script.simulate.clone();
    (status_code(code), Json(body))
}

async fn auth(State(shared): State<Arc<Shared>>) -> (StatusCode, Json<Value>) {
    shared.hits.auth.fetch_add(1, Ordering::SeqCst);
    let (code, body) = shared.script.auth.clone();
    (status_code(code), Json(body))
}

/// Start the mock on an ephemeral port.
pub async fn start_mock_backend(script: BackendScript) -> (SocketAddr, Arc<Hits>) {
    let hits = Arc::new(Hits::default());
    let shared = Arc::new(Shared {
        statuses: Mutex::new(script.statuses.iter().cloned().collect()),
        script,
        hits: hits.clone(),
    });

    let app = Router::new()
        .route("/verification/config", get(config))
        .route("/verification/status/{address}", get(status))
        .route("/verification/simulate-callback", post(simulate))
        .route("/auth/google/url", get(auth))
        .with_state(shared);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (addr, hits)
}

/// An address nothing listens on.
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Keeps every URL it was asked to open.
#[derive(Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<Url>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<Url> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &Url) -> Result<(), AuthError> {
        self.visited.lock().unwrap().push(url.clone());
        Ok(())
    }
}
