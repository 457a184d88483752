//! # Statistics Aggregator
//!
//! Pure derivation of command-center metrics from an assignment subset.
//! The aggregator holds no state between calls — the same subset always
//! yields the same [`AuditStats`], which is what makes the role-scoped
//! metric tiles trivially testable.

use coe_core::{Assignment, AssignmentStatus, ComplianceChoice};
use serde::Serialize;

/// Derived metrics over an assignment subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditStats {
    /// Number of assignments in the subset.
    pub total: usize,
    /// Assignments with status Completed.
    pub completed: usize,
    /// Assignments with status Overdue.
    pub overdue: usize,
    /// Assignments with status In Progress.
    pub in_progress: usize,
    /// Responses across the subset whose choice is Non-Compliant.
    pub non_compliances: usize,
    /// Evidence filenames across the subset. Counted per question —
    /// the same filename attached to two questions counts twice.
    pub evidence_count: usize,
    /// `round(100 * completed / total)`; 0 for an empty subset.
    pub completion_pct: u8,
}

impl AuditStats {
    /// The all-zero stats of an empty subset.
    pub fn empty() -> Self {
        Self {
            total: 0,
            completed: 0,
            overdue: 0,
            in_progress: 0,
            non_compliances: 0,
            evidence_count: 0,
            completion_pct: 0,
        }
    }
}

/// Aggregate metrics over an assignment subset.
///
/// Deterministic in the subset alone; order of the subset is irrelevant.
pub fn aggregate<'a>(assignments: impl IntoIterator<Item = &'a Assignment>) -> AuditStats {
    let mut stats = AuditStats::empty();

    for a in assignments {
        stats.total += 1;
        match a.status {
            AssignmentStatus::Completed => stats.completed += 1,
            AssignmentStatus::Overdue => stats.overdue += 1,
            AssignmentStatus::InProgress => stats.in_progress += 1,
            AssignmentStatus::NotStarted => {}
        }
        for r in a.responses.values() {
            if r.choice == Some(ComplianceChoice::NonCompliant) {
                stats.non_compliances += 1;
            }
            stats.evidence_count += r.evidence.len();
        }
    }

    if stats.total > 0 {
        let pct = (stats.completed as f64 / stats.total as f64) * 100.0;
        stats.completion_pct = pct.round() as u8;
    }

    stats
}
