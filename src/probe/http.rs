//! HTTP liveness prober.
//!
//! # Responsibilities
//! - Issue one authenticated GET per scheduler tick
//! - Enforce the probe timeout
//! - Fold every failure class into a failing ProbeResult

use std::time::{Duration, Instant};

use axum::body::Body;
use axum::http::Request;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use tokio::time;

use crate::config::ProbeConfig;
use crate::probe::{Probe, ProbeResult};

pub struct HttpProber {
    client: Client<HttpConnector, Body>,
    endpoint: String,
    credential: Option<String>,
    timeout: Duration,
}

impl HttpProber {
    pub fn new(config: &ProbeConfig) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        Self {
            client,
            endpoint: config.endpoint.clone(),
            credential: config.credential.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

impl Probe for HttpProber {
    async fn probe(&self) -> ProbeResult {
        let started = Instant::now();

        let mut builder = Request::builder()
            .method("GET")
            .uri(self.endpoint.clone())
            .header("user-agent", "relayguard-probe");
        if let Some(token) = &self.credential {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }

        let request = match builder.body(Body::empty()) {
            Ok(req) => req,
            Err(e) => {
                tracing::error!(error = %e, "Failed to build probe request");
                return ProbeResult::failed(started.elapsed(), format!("bad request: {}", e));
            }
        };

        let response_future = self.client.request(request);

        let result = match time::timeout(self.timeout, response_future).await {
            Ok(Ok(response)) => {
                if response.status().is_success() {
                    ProbeResult::ok(started.elapsed())
                } else {
                    ProbeResult::failed(
                        started.elapsed(),
                        format!("non-success status {}", response.status()),
                    )
                }
            }
            Ok(Err(e)) => {
                ProbeResult::failed(started.elapsed(), format!("connection error: {}", e))
            }
            Err(_) => ProbeResult::failed(
                started.elapsed(),
                format!("timeout after {}s", self.timeout.as_secs()),
            ),
        };

        match &result.error_detail {
            None => {
                tracing::debug!(
                    endpoint = %self.endpoint,
                    latency_ms = result.latency.as_millis() as u64,
                    "Probe succeeded"
                );
            }
            Some(detail) => {
                tracing::warn!(
                    endpoint = %self.endpoint,
                    latency_ms = result.latency.as_millis() as u64,
                    error = %detail,
                    "Probe failed"
                );
            }
        }

        result
    }
}
