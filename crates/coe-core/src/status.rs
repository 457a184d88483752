//! # Assignment Status Progression
//!
//! The SLA lifecycle of an assignment and the per-question compliance
//! choice. Status names are the exact strings the dashboard and the
//! exported Audit Pack display, enforced through serde renames.
//!
//! ## Progression
//!
//! ```text
//! Not Started ──▶ In Progress ──▶ Overdue ──▶ Completed
//! ```
//!
//! The progression is linear. `advanced()` moves exactly one step and is
//! idempotent at the terminal state, which is what the fast-forward SLA
//! simulation relies on. Independently of the progression, the first
//! response write or evidence upload promotes Not Started to In Progress,
//! and marking complete jumps to Completed from any state.

use serde::{Deserialize, Serialize};

/// The SLA status of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentStatus {
    /// No response or evidence has been recorded yet.
    #[serde(rename = "Not Started")]
    NotStarted,
    /// At least one response or evidence file exists.
    #[serde(rename = "In Progress")]
    InProgress,
    /// The assignment passed its due date without completion.
    #[serde(rename = "Overdue")]
    Overdue,
    /// The assignee (or an admin) marked the assignment done. Terminal.
    #[serde(rename = "Completed")]
    Completed,
}

impl AssignmentStatus {
    /// The canonical display name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Overdue => "Overdue",
            Self::Completed => "Completed",
        }
    }

    /// Convert a canonical display name to a status.
    ///
    /// Returns `None` for any other input — there are no legacy aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Not Started" => Some(Self::NotStarted),
            "In Progress" => Some(Self::InProgress),
            "Overdue" => Some(Self::Overdue),
            "Completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Whether this is the terminal state of the progression.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// The status one step further along the fixed progression.
    ///
    /// Completed advances to itself, so repeated application converges.
    pub fn advanced(self) -> Self {
        match self {
            Self::NotStarted => Self::InProgress,
            Self::InProgress => Self::Overdue,
            Self::Overdue => Self::Completed,
            Self::Completed => Self::Completed,
        }
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The compliance verdict a POC records for one question.
///
/// Absence of a choice is represented as `Option::None` on the response,
/// not as a variant here — a question can carry text and evidence before
/// any verdict is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplianceChoice {
    /// The control is met.
    #[serde(rename = "Compliant")]
    Compliant,
    /// The control is not met; counts toward the non-compliance flags.
    #[serde(rename = "Non-Compliant")]
    NonCompliant,
    /// The question does not apply to this domain.
    #[serde(rename = "Not Applicable")]
    NotApplicable,
}

impl ComplianceChoice {
    /// The canonical display name of this choice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compliant => "Compliant",
            Self::NonCompliant => "Non-Compliant",
            Self::NotApplicable => "Not Applicable",
        }
    }

    /// Convert a canonical display name to a choice.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Compliant" => Some(Self::Compliant),
            "Non-Compliant" => Some(Self::NonCompliant),
            "Not Applicable" => Some(Self::NotApplicable),
            _ => None,
        }
    }
}

impl std::fmt::Display for ComplianceChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_progression_is_linear() {
        assert_eq!(
            AssignmentStatus::NotStarted.advanced(),
            AssignmentStatus::InProgress
        );
        assert_eq!(
            AssignmentStatus::InProgress.advanced(),
            AssignmentStatus::Overdue
        );
        assert_eq!(
            AssignmentStatus::Overdue.advanced(),
            AssignmentStatus::Completed
        );
    }

    #[test]
    fn completed_is_terminal_and_idempotent() {
        assert!(AssignmentStatus::Completed.is_terminal());
        assert_eq!(
            AssignmentStatus::Completed.advanced(),
            AssignmentStatus::Completed
        );
        assert!(!AssignmentStatus::NotStarted.is_terminal());
        assert!(!AssignmentStatus::InProgress.is_terminal());
        assert!(!AssignmentStatus::Overdue.is_terminal());
    }

    #[test]
    fn status_serializes_to_display_names() {
        let cases = [
            (AssignmentStatus::NotStarted, "\"Not Started\""),
            (AssignmentStatus::InProgress, "\"In Progress\""),
            (AssignmentStatus::Overdue, "\"Overdue\""),
            (AssignmentStatus::Completed, "\"Completed\""),
        ];
        for (status, expected) in cases {
            assert_eq!(serde_json::to_string(&status).unwrap(), expected);
        }
    }

    #[test]
    fn status_from_name_round_trips() {
        for status in [
            AssignmentStatus::NotStarted,
            AssignmentStatus::InProgress,
            AssignmentStatus::Overdue,
            AssignmentStatus::Completed,
        ] {
            assert_eq!(AssignmentStatus::from_name(status.as_str()), Some(status));
        }
    }

    #[test]
    fn status_rejects_unknown_names() {
        assert_eq!(AssignmentStatus::from_name("NOT_STARTED"), None);
        assert_eq!(AssignmentStatus::from_name("in progress"), None);
        assert_eq!(AssignmentStatus::from_name(""), None);
        let parsed: Result<AssignmentStatus, _> = serde_json::from_str("\"Done\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn choice_serializes_to_display_names() {
        assert_eq!(
            serde_json::to_string(&ComplianceChoice::NonCompliant).unwrap(),
            "\"Non-Compliant\""
        );
        let parsed: ComplianceChoice = serde_json::from_str("\"Not Applicable\"").unwrap();
        assert_eq!(parsed, ComplianceChoice::NotApplicable);
    }

    #[test]
    fn choice_from_name_round_trips() {
        for choice in [
            ComplianceChoice::Compliant,
            ComplianceChoice::NonCompliant,
            ComplianceChoice::NotApplicable,
        ] {
            assert_eq!(ComplianceChoice::from_name(choice.as_str()), Some(choice));
        }
        assert_eq!(ComplianceChoice::from_name("compliant"), None);
    }

    #[test]
    fn status_display_matches_as_str() {
        assert_eq!(format!("{}", AssignmentStatus::NotStarted), "Not Started");
        assert_eq!(format!("{}", ComplianceChoice::NonCompliant), "Non-Compliant");
    }
}
