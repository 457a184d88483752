//! # Remote Data Cache
//!
//! Holds the latest live audit-runs/tasks snapshot from the backend.
//! `refresh` drives the phase machine `Idle → Loading → Ready | Error`:
//! both fetches run concurrently and are joined before the phase
//! settles, so the cache is never left stuck in `Loading`.
//!
//! A failed refresh keeps the data of the last successful one — state
//! is only overwritten on joint success — while the error message stays
//! visible until the next successful refresh.

use coe_live_client::{LiveClient, RemoteAuditRun, RemoteTask};

/// Where the cache is in its read lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    /// No refresh has been attempted yet.
    Idle,
    /// A refresh is in flight.
    Loading,
    /// The last refresh succeeded; the snapshot is current.
    Ready,
    /// The last refresh failed; see `last_error`.
    Error,
}

/// The latest fetched snapshot of live backend data.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteCache {
    phase: FetchPhase,
    audit_runs: Vec<RemoteAuditRun>,
    tasks: Vec<RemoteTask>,
    last_error: Option<String>,
}

impl RemoteCache {
    /// An empty, idle cache.
    pub fn new() -> Self {
        Self {
            phase: FetchPhase::Idle,
            audit_runs: Vec::new(),
            tasks: Vec::new(),
            last_error: None,
        }
    }

    /// The current phase.
    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    /// Whether a refresh is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == FetchPhase::Loading
    }

    /// The cached audit runs (possibly from an earlier refresh).
    pub fn audit_runs(&self) -> &[RemoteAuditRun] {
        &self.audit_runs
    }

    /// The cached tasks (possibly from an earlier refresh).
    pub fn tasks(&self) -> &[RemoteTask] {
        &self.tasks
    }

    /// The error of the last failed refresh, until a refresh succeeds.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Refresh the snapshot from the live backend.
    ///
    /// Issues both reads concurrently and joins them. Joint success
    /// replaces both sequences wholesale and clears the error; either
    /// failure moves the cache to `Error` with the captured message and
    /// leaves previously loaded data visible.
    pub async fn refresh(&mut self, client: &LiveClient) {
        self.phase = FetchPhase::Loading;

        let (runs, tasks) = tokio::join!(client.fetch_audit_runs(), client.fetch_tasks(&[]));

        match (runs, tasks) {
            (Ok(runs), Ok(tasks)) => {
                tracing::debug!(
                    runs = runs.len(),
                    tasks = tasks.len(),
                    "remote snapshot refreshed"
                );
                self.audit_runs = runs;
                self.tasks = tasks;
                self.last_error = None;
                self.phase = FetchPhase::Ready;
            }
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!(error = %e, "remote refresh failed");
                self.last_error = Some(e.to_string());
                self.phase = FetchPhase::Error;
            }
        }
    }
}

impl Default for RemoteCache {
    fn default() -> Self {
        Self::new()
    }
}
