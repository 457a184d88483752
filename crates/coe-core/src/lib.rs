//! # coe-core — Audit CoE foundational types
//!
//! The shared vocabulary of the Audit CoE Command Center:
//!
//! - **Identifiers** ([`identity`]): validated string newtypes for audits,
//!   domains, assignments, and questions.
//! - **Status machinery** ([`status`]): the assignment SLA progression and
//!   the per-question compliance choice.
//! - **Records** ([`audit`]): domains, the audit, assignments, questions,
//!   and responses with patch-merge semantics.
//! - **Time** ([`temporal`]): UTC-only timestamps with the dashboard's
//!   display format.
//! - **Errors** ([`error`]): construction-time validation failures.
//!
//! Every other crate in the workspace builds on these types. This crate
//! holds no I/O, no HTTP, and no view logic.

pub mod audit;
pub mod error;
pub mod identity;
pub mod status;
pub mod temporal;

pub use audit::{
    Assignment, Audit, ChoicePatch, Domain, Question, QuestionKind, Response, ResponsePatch,
};
pub use error::ValidationError;
pub use identity::{AssignmentId, AuditId, DomainId, QuestionId};
pub use status::{AssignmentStatus, ComplianceChoice};
pub use temporal::Timestamp;
