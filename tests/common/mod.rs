//! Shared mock servers for integration tests.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

#[derive(Clone)]
struct LivenessState {
    token: &'static str,
    healthy: Arc<AtomicBool>,
}

async fn health(State(state): State<LivenessState>, headers: HeaderMap) -> StatusCode {
    let expected = format!("Bearer {}", state.token);
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == expected)
        .unwrap_or(false);

    if !authorized {
        StatusCode::UNAUTHORIZED
    } else if state.healthy.load(Ordering::SeqCst) {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// Start a mock automation-server liveness endpoint at `/health`.
///
/// Requires the given bearer token and answers 200 while `healthy` is set,
/// 503 otherwise.
pub async fn start_liveness_endpoint(
    token: &'static str,
    healthy: Arc<AtomicBool>,
) -> SocketAddr {
    let app = Router::new()
        .route("/health", get(health))
        .with_state(LivenessState { token, healthy });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// A mock relay device speaking the channel-mode protocol.
pub struct MockRelay {
    pub addr: SocketAddr,
    /// Live mode as the device reports it.
    #[allow(dead_code)]
    pub mode: Arc<Mutex<String>>,
    /// Every payload accepted through POST, in order.
    pub set_payloads: Arc<Mutex<Vec<Value>>>,
    /// When set, every call is refused with 503.
    pub reject: Arc<AtomicBool>,
}

impl MockRelay {
    pub fn set_modes(&self) -> Vec<String> {
        self.set_payloads
            .lock()
            .unwrap()
            .iter()
            .map(|p| p["mode"].as_str().unwrap_or("").to_string())
            .collect()
    }
}

#[derive(Clone)]
struct RelayState {
    mode: Arc<Mutex<String>>,
    set_payloads: Arc<Mutex<Vec<Value>>>,
    reject: Arc<AtomicBool>,
}

async fn get_mode(State(state): State<RelayState>, Path(_channel): Path<u32>) -> Response {
    if state.reject.load(Ordering::SeqCst) {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    let mode = state.mode.lock().unwrap().clone();
    Json(json!({ "mode": mode })).into_response()
}

async fn set_mode(
    State(state): State<RelayState>,
    Path(_channel): Path<u32>,
    Json(payload): Json<Value>,
) -> StatusCode {
    if state.reject.load(Ordering::SeqCst) {
        return StatusCode::SERVICE_UNAVAILABLE;
    }
    *state.mode.lock().unwrap() = payload["mode"].as_str().unwrap_or("").to_string();
    state.set_payloads.lock().unwrap().push(payload);
    StatusCode::OK
}

/// Start a mock relay device, initially in detached mode.
pub async fn start_relay_device() -> MockRelay {
    let state = RelayState {
        mode: Arc::new(Mutex::new("detached".to_string())),
        set_payloads: Arc::new(Mutex::new(Vec::new())),
        reject: Arc::new(AtomicBool::new(false)),
    };

    let app = Router::new()
        .route("/channel/{channel}/mode", get(get_mode).post(set_mode))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockRelay {
        addr,
        mode: state.mode,
        set_payloads: state.set_payloads,
        reject: state.reject,
    }
}
