//! # coe-console — view/role controller
//!
//! The Command Center's client-side state machine:
//!
//! - [`state`]: the application state (role, POC identity, view,
//!   selection, data store) with a single reducer transition function
//!   and a pure selection-reconciliation rule.
//! - [`remote`]: the remote data cache over the live backend's read
//!   path — loading/error phases and wholesale snapshot replacement.
//! - [`submission`]: the write-path state — local validation, the
//!   in-flight flag, and the last tagged outcome.
//!
//! No rendering lives here; the CLI (or any other frontend) consumes
//! these types and draws from them.

pub mod remote;
pub mod state;
pub mod submission;

pub use remote::{FetchPhase, RemoteCache};
pub use state::{reconcile_selection, reduce, Action, AppState, Role, View};
pub use submission::Submission;
