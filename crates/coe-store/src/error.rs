//! Store-specific error types.

use coe_core::{AssignmentId, QuestionId};
use thiserror::Error;

/// Errors from audit store mutations.
///
/// Lookups by unknown id are rejected rather than silently ignored —
/// callers that want "best effort" semantics (the reducer) log and keep
/// the previous snapshot.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The referenced assignment does not exist in this snapshot.
    #[error("unknown assignment: {0}")]
    UnknownAssignment(AssignmentId),

    /// The referenced question is not part of the target assignment.
    #[error("assignment {assignment} has no question {question}")]
    UnknownQuestion {
        assignment: AssignmentId,
        question: QuestionId,
    },
}
