//! # coe-live-client — Typed client for the live audit backend
//!
//! Provides ergonomic, typed access to the three backend operations the
//! Command Center consumes:
//!
//! - `GET /audit-runs` — list live audit runs
//! - `GET /tasks` — list live tasks, with optional query filters
//! - `POST /task-responses` — submit one task response
//!
//! ## Error contract
//!
//! The two read operations propagate [`LiveApiError`] and the caller is
//! expected to convert failures into a visible error state. The write
//! operation **never fails with an error value**: every failure mode —
//! transport, non-2xx status, malformed body — is folded into
//! [`SubmitOutcome::Rejected`], so UI code updates its state
//! unconditionally from the return value.

pub mod config;
pub mod error;
pub mod types;

pub use config::LiveApiConfig;
pub use error::LiveApiError;
pub use types::{RemoteAuditRun, RemoteTask, SubmitOutcome, TaskResponseRequest};

use std::time::Duration;

use types::ItemsEnvelope;

/// HTTP client for the live audit backend.
#[derive(Debug, Clone)]
pub struct LiveClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl LiveClient {
    /// Create a client from configuration.
    pub fn new(config: LiveApiConfig) -> Result<Self, LiveApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LiveApiError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;
        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Create a client from environment configuration.
    pub fn from_env() -> Result<Self, LiveApiError> {
        Ok(Self::new(LiveApiConfig::from_env()?)?)
    }

    /// Fetch all live audit runs.
    ///
    /// Calls `GET {base_url}/audit-runs` and unwraps the `{items: [...]}`
    /// envelope; an absent `items` field yields an empty list.
    pub async fn fetch_audit_runs(&self) -> Result<Vec<RemoteAuditRun>, LiveApiError> {
        let endpoint = "GET /audit-runs";
        let url = format!("{}audit-runs", self.base_url);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| LiveApiError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(LiveApiError::Backend {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }

        let envelope: ItemsEnvelope<RemoteAuditRun> =
            resp.json().await.map_err(|e| LiveApiError::Deserialization {
                endpoint: endpoint.into(),
                source: e,
            })?;
        Ok(envelope.items)
    }

    /// Fetch live tasks, with `filters` serialized as query parameters.
    ///
    /// Calls `GET {base_url}/tasks?<filters>`; same envelope and failure
    /// contract as [`fetch_audit_runs`](Self::fetch_audit_runs).
    pub async fn fetch_tasks(
        &self,
        filters: &[(String, String)],
    ) -> Result<Vec<RemoteTask>, LiveApiError> {
        let endpoint = "GET /tasks";
        let url = format!("{}tasks", self.base_url);

        let resp = self
            .http
            .get(&url)
            .query(filters)
            .send()
            .await
            .map_err(|e| LiveApiError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(LiveApiError::Backend {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }

        let envelope: ItemsEnvelope<RemoteTask> =
            resp.json().await.map_err(|e| LiveApiError::Deserialization {
                endpoint: endpoint.into(),
                source: e,
            })?;
        Ok(envelope.items)
    }

    /// Submit one task response.
    ///
    /// Calls `POST {base_url}/task-responses`. Never fails with an error
    /// value: every failure mode is captured into
    /// [`SubmitOutcome::Rejected`] with a display-ready message that
    /// includes the backend status code when one was received.
    pub async fn submit_task_response(&self, req: &TaskResponseRequest) -> SubmitOutcome {
        let url = format!("{}task-responses", self.base_url);

        let resp = match self.http.post(&url).json(req).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(error = %e, "task-response submission transport failure");
                return SubmitOutcome::Rejected {
                    error: format!("task-responses request failed: {e}"),
                };
            }
        };

        let status = resp.status();
        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(error = %e, "task-response body read failure");
                return SubmitOutcome::Rejected {
                    error: format!("task-responses response unreadable: {e}"),
                };
            }
        };

        if !status.is_success() {
            return SubmitOutcome::Rejected {
                error: format!("task-responses failed ({}): {}", status.as_u16(), body),
            };
        }

        if body.trim().is_empty() {
            return SubmitOutcome::Accepted {
                data: serde_json::Value::Null,
            };
        }

        match serde_json::from_str(&body) {
            Ok(data) => {
                tracing::debug!(task_id = %req.task_id, "task response accepted");
                SubmitOutcome::Accepted { data }
            }
            Err(e) => SubmitOutcome::Rejected {
                error: format!("task-responses returned a malformed body: {e}"),
            },
        }
    }
}
