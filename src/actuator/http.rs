//! Generic JSON-over-HTTP relay adapter.
//!
//! Speaks a minimal channel-mode protocol:
//! `GET {base}/channel/{id}/mode` returns `{"mode": "detached" | "follow"}`,
//! `POST` to the same path reconfigures the channel. Anything
//! device-specific lives on the other side of this adapter.

use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use serde::{Deserialize, Serialize};
use tokio::time;

use crate::actuator::{Actuator, ActuatorError};
use crate::config::ActuatorConfig;
use crate::failover::Mode;

// Responses larger than this are not mode reports.
const MAX_RESPONSE_BYTES: usize = 64 * 1024;

/// Mode payload sent to the device. The `output` field carries the fixed
/// hold-on policy for Detached; Follow leaves the output to the input.
#[derive(Debug, Serialize)]
struct ModeCommand {
    mode: Mode,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<&'static str>,
}

impl ModeCommand {
    fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Detached => Self {
                mode,
                output: Some("on"),
            },
            Mode::Follow => Self { mode, output: None },
        }
    }
}

#[derive(Debug, Deserialize)]
struct ModeReport {
    mode: Mode,
}

pub struct HttpActuator {
    client: Client<HttpConnector, Body>,
    base_url: String,
    credential: Option<String>,
    timeout: Duration,
}

impl HttpActuator {
    pub fn new(config: &ActuatorConfig) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        Self {
            client,
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            credential: config.credential.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    fn mode_uri(&self, channel_id: u32) -> String {
        format!("{}/channel/{}/mode", self.base_url, channel_id)
    }

    fn request_builder(&self, method: &str, uri: String) -> axum::http::request::Builder {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("user-agent", "relayguard");
        if let Some(token) = &self.credential {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        builder
    }

    async fn send(&self, request: Request<Body>) -> Result<axum::response::Response, ActuatorError> {
        let response_future = self.client.request(request);
        let response = time::timeout(self.timeout, response_future)
            .await
            .map_err(|_| ActuatorError::Timeout(self.timeout))?
            .map_err(|e| ActuatorError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ActuatorError::Rejected(response.status().as_u16()));
        }
        Ok(response.map(Body::new))
    }
}

impl Actuator for HttpActuator {
    async fn get_mode(&self, channel_id: u32) -> Result<Mode, ActuatorError> {
        let request = self
            .request_builder("GET", self.mode_uri(channel_id))
            .body(Body::empty())
            .map_err(|e| ActuatorError::Transport(e.to_string()))?;

        let response = self.send(request).await?;
        let bytes = axum::body::to_bytes(response.into_body(), MAX_RESPONSE_BYTES)
            .await
            .map_err(|e| ActuatorError::Malformed(e.to_string()))?;
        let report: ModeReport = serde_json::from_slice(&bytes)
            .map_err(|e| ActuatorError::Malformed(e.to_string()))?;

        tracing::debug!(channel = channel_id, mode = %report.mode, "Device reported mode");
        Ok(report.mode)
    }

    async fn set_mode(&self, channel_id: u32, mode: Mode) -> Result<(), ActuatorError> {
        let payload = serde_json::to_vec(&ModeCommand::for_mode(mode))
            .map_err(|e| ActuatorError::Malformed(e.to_string()))?;
        let request = self
            .request_builder("POST", self.mode_uri(channel_id))
            .header("content-type", "application/json")
            .body(Body::from(payload))
            .map_err(|e| ActuatorError::Transport(e.to_string()))?;

        self.send(request).await?;
        tracing::debug!(channel = channel_id, mode = %mode, "Device accepted mode change");
        Ok(())
    }
}
