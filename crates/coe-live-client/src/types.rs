//! # Wire Types
//!
//! Payload types for the live backend. Remote records are deliberately
//! opaque: the frontend counts and displays them but never restructures
//! live data, so both wrap raw JSON values and expose read-only
//! accessors. The write-path request is fully typed, and its outcome is
//! a tagged result that callers can render without a failure handler.

use serde::{Deserialize, Serialize};

/// An audit run as returned by `GET /audit-runs`.
///
/// Opaque, read-only, non-normalized — whatever shape the backend
/// returns is preserved verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteAuditRun(pub serde_json::Value);

impl RemoteAuditRun {
    /// Read a top-level string field, if present.
    pub fn field_str(&self, key: &str) -> Option<&str> {
        self.0.get(key)?.as_str()
    }

    /// A short human label for list display: the first of `name`,
    /// `title`, or `id` that is present.
    pub fn label(&self) -> String {
        for key in ["name", "title", "id"] {
            if let Some(s) = self.field_str(key) {
                return s.to_string();
            }
        }
        match self.0.get("id") {
            Some(id) => id.to_string(),
            None => "(unnamed)".to_string(),
        }
    }
}

/// A task as returned by `GET /tasks`.
///
/// Same opacity contract as [`RemoteAuditRun`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteTask(pub serde_json::Value);

impl RemoteTask {
    /// Read a top-level string field, if present.
    pub fn field_str(&self, key: &str) -> Option<&str> {
        self.0.get(key)?.as_str()
    }

    /// A short human label for list display: the first of `name`,
    /// `title`, or `id` that is present.
    pub fn label(&self) -> String {
        for key in ["name", "title", "id"] {
            if let Some(s) = self.field_str(key) {
                return s.to_string();
            }
        }
        match self.0.get("id") {
            Some(id) => id.to_string(),
            None => "(unnamed)".to_string(),
        }
    }
}

/// The `{items: [...]}` envelope both list endpoints return.
///
/// An absent `items` field decodes to an empty list rather than an
/// error — the backend omits the field on empty result sets.
#[derive(Debug, Deserialize)]
pub(crate) struct ItemsEnvelope<T> {
    #[serde(default)]
    pub items: Vec<T>,
}

/// Request body for `POST /task-responses`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskResponseRequest {
    /// The task being responded to.
    pub task_id: String,
    /// Free-text response body.
    pub response_text: String,
    /// Response modality tag (e.g. `text`).
    pub response_type: String,
    /// Optional responding user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl TaskResponseRequest {
    /// A plain text response to a task.
    pub fn text(task_id: impl Into<String>, response_text: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            response_text: response_text.into(),
            response_type: "text".to_string(),
            user_id: None,
        }
    }
}

/// The tagged outcome of a task-response submission.
///
/// The write path never raises: transport failures, backend rejections,
/// and malformed response bodies all land in [`SubmitOutcome::Rejected`]
/// so every caller handles failure uniformly via the return value.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The backend accepted the response. `data` is the decoded response
    /// body (JSON null when the backend returned an empty body).
    Accepted { data: serde_json::Value },
    /// The submission did not go through; `error` is display-ready.
    Rejected { error: String },
}

impl SubmitOutcome {
    /// Whether the submission was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// The rejection message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Rejected { error } => Some(error),
            Self::Accepted { .. } => None,
        }
    }

    /// The accepted response body, if any.
    pub fn data(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Accepted { data } => Some(data),
            Self::Rejected { .. } => None,
        }
    }
}
