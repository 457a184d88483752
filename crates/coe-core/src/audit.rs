//! # Audit Records
//!
//! The record types a session tracks: compliance [`Domain`]s, the single
//! [`Audit`], and the per-domain [`Assignment`] bundles of questions and
//! responses. Assignments are owned exclusively by the data store and
//! mutated by snapshot replacement, never aliased — these types are plain
//! values with `Clone` + `PartialEq` so whole-state comparison stays cheap
//! to reason about.
//!
//! Serialized form uses camelCase field names, matching the backend's
//! JSON conventions.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::identity::{AssignmentId, AuditId, DomainId, QuestionId};
use crate::status::{AssignmentStatus, ComplianceChoice};
use crate::temporal::Timestamp;

/// A compliance domain with its point of contact and escalation contact.
///
/// Immutable after load. Assignments reference a domain by id; they do
/// not own it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    /// Domain identifier (e.g. `legal`).
    pub id: DomainId,
    /// Display name (e.g. `Legal & Compliance`).
    pub name: String,
    /// Point-of-contact name responsible for responding.
    pub poc: String,
    /// Escalation contact name.
    pub escalation: String,
}

/// The audit run tracked by a session. Singleton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    /// Audit identifier (e.g. `AUD-2026-021`).
    pub id: AuditId,
    /// Account the audit runs against.
    pub account: String,
    /// Cohort label (e.g. `Cohort 3: Planned Client Audit`).
    pub cohort: String,
    /// Overall due date.
    pub due_date: NaiveDate,
    /// Overall status label. Free-form — the backend owns its vocabulary.
    pub status: String,
}

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Free-text rationale.
    Text,
    /// Compliance choice from the fixed set.
    Choice,
    /// Evidence file reference.
    Upload,
}

/// A single audit question assigned to a domain.
///
/// Immutable once its assignment is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Question identifier (e.g. `q-3`).
    pub id: QuestionId,
    /// Prompt text shown to the POC.
    pub text: String,
    /// Answer modality.
    pub kind: QuestionKind,
}

/// A POC's answer to one question: compliance choice, free-text
/// rationale, and evidence file references.
///
/// A missing response is equivalent to the default value — no choice,
/// empty text, no evidence. Responses are created lazily on first update
/// and never deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// Compliance verdict, if one has been picked.
    #[serde(default)]
    pub choice: Option<ComplianceChoice>,
    /// Free-text rationale.
    #[serde(default)]
    pub text: String,
    /// Evidence filenames. Append-only and deduplicated; insertion order
    /// is preserved for display but carries no meaning.
    #[serde(default)]
    pub evidence: Vec<String>,
}

impl Response {
    /// Append an evidence filename, skipping duplicates.
    ///
    /// Returns `true` when the set grew. Repeated identical filenames are
    /// a no-op, which makes evidence upload idempotent.
    pub fn add_evidence(&mut self, filename: impl Into<String>) -> bool {
        let filename = filename.into();
        if self.evidence.iter().any(|f| *f == filename) {
            return false;
        }
        self.evidence.push(filename);
        true
    }

    /// Merge a patch into this response.
    ///
    /// Fields the patch leaves at their keep-state are untouched, so a
    /// patch that only sets the choice never clobbers previously entered
    /// text, and vice versa.
    pub fn apply(&mut self, patch: &ResponsePatch) {
        match &patch.choice {
            ChoicePatch::Keep => {}
            ChoicePatch::Clear => self.choice = None,
            ChoicePatch::Set(choice) => self.choice = Some(*choice),
        }
        if let Some(text) = &patch.text {
            self.text = text.clone();
        }
    }
}

/// What a patch does to the compliance choice of a response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ChoicePatch {
    /// Leave the current choice as it is.
    #[default]
    Keep,
    /// Remove the current choice (the POC picked "Select…" again).
    Clear,
    /// Set the choice.
    Set(ComplianceChoice),
}

/// A partial update to a [`Response`]. Unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponsePatch {
    /// What to do with the compliance choice.
    pub choice: ChoicePatch,
    /// Replacement rationale text, if any.
    pub text: Option<String>,
}

impl ResponsePatch {
    /// A patch that sets the compliance choice.
    pub fn set_choice(choice: ComplianceChoice) -> Self {
        Self {
            choice: ChoicePatch::Set(choice),
            text: None,
        }
    }

    /// A patch that clears the compliance choice.
    pub fn clear_choice() -> Self {
        Self {
            choice: ChoicePatch::Clear,
            text: None,
        }
    }

    /// A patch that replaces the rationale text.
    pub fn set_text(text: impl Into<String>) -> Self {
        Self {
            choice: ChoicePatch::Keep,
            text: Some(text.into()),
        }
    }

    /// Builder-style: also replace the rationale text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// A domain's audit task bundle: the questions owed by one assignee and
/// the responses recorded so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Assignment identifier (e.g. `asgn-2`).
    pub id: AssignmentId,
    /// The domain this bundle belongs to. Reference, not ownership.
    pub domain_id: DomainId,
    /// Name of the person (or queue) owing the responses.
    pub assignee: String,
    /// Response due date for this bundle.
    pub due_date: NaiveDate,
    /// Current SLA status.
    pub status: AssignmentStatus,
    /// When a response was last written. `None` until first touched.
    #[serde(default)]
    pub last_updated: Option<Timestamp>,
    /// The questions assigned to this domain, in presentation order.
    pub questions: Vec<Question>,
    /// Responses keyed by question id. Keys are always question ids that
    /// exist in `questions`; the store enforces this on mutation.
    #[serde(default)]
    pub responses: BTreeMap<QuestionId, Response>,
}

impl Assignment {
    /// Look up a question by id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == *id)
    }

    /// Look up the recorded response for a question, if any.
    pub fn response(&self, id: &QuestionId) -> Option<&Response> {
        self.responses.get(id)
    }

    /// The "last updated" label the dashboard shows: the stamp, or an
    /// em dash when the assignment has never been touched.
    pub fn last_updated_label(&self) -> String {
        match &self.last_updated {
            Some(ts) => ts.to_display_string(),
            None => "—".to_string(),
        }
    }
}
