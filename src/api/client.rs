//! Choreboard REST API Client
//!
//! HTTP gateway for the Choreboard server. Every call answers with the full
//! board state; failures are logged here and handed back as a
//! [`GatewayError`] so callers can leave their state untouched.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::dto::{ApiCall, Method};
use super::error::{GatewayError, GatewayResult};
use crate::model::BoardState;

/// Anything that can carry an [`ApiCall`] to the server
#[async_trait]
pub trait ChoreApi: Send + Sync {
    /// Perform the call and return the authoritative state
    async fn send(&self, call: &ApiCall) -> GatewayResult<BoardState>;
}

/// Configuration for the HTTP gateway
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the server (e.g., "http://localhost:5001")
    pub base_url: String,
    /// Request timeout; `None` keeps the HTTP client's default
    pub request_timeout: Option<Duration>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5001".to_string(),
            request_timeout: None,
        }
    }
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

/// reqwest-backed gateway
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    /// Create a gateway with the given configuration
    pub fn new(config: GatewayConfig) -> GatewayResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Client(e.to_string()))?;

        Ok(Self {
            client,
            // Normalize: remove trailing slash
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute(&self, call: &ApiCall) -> GatewayResult<BoardState> {
        let path = call.path();
        let body = call.body().map_err(|e| GatewayError::Encode {
            path: path.to_string(),
            message: e.to_string(),
        })?;

        let request = match call.method() {
            Method::Get => self.client.get(self.url(path)),
            Method::Post => self.client.post(self.url(path)),
        };
        let request = match &body {
            Some(json) => request.json(json),
            None => request,
        };

        tracing::debug!(path, body = ?body, "Sending request");

        let response = request.send().await.map_err(|e| GatewayError::Network {
            path: path.to_string(),
            message: if e.is_timeout() {
                "request timed out".to_string()
            } else {
                e.to_string()
            },
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| GatewayError::Network {
            path: path.to_string(),
            message: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(GatewayError::Status {
                path: path.to_string(),
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| GatewayError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl ChoreApi for HttpGateway {
    async fn send(&self, call: &ApiCall) -> GatewayResult<BoardState> {
        match self.execute(call).await {
            Ok(state) => {
                tracing::debug!(
                    path = call.path(),
                    users = state.users.len(),
                    chores = state.master_chores.len(),
                    log_entries = state.current_week.completed_log.len(),
                    "Received board state"
                );
                Ok(state)
            }
            Err(e) => {
                tracing::error!(path = call.path(), error = %e, "Choreboard request failed");
                Err(e)
            }
        }
    }
}
