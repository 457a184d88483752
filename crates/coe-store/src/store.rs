//! # Audit Store
//!
//! Owns the session's audit, domains, and assignments. Every mutation
//! takes `&self`, clones the snapshot, applies the change to the clone,
//! and returns the new snapshot — whole-state replacement, so a reader
//! holding the previous [`AuditStore`] always sees a complete,
//! consistent state. There is no interior mutability and no locking;
//! a single logical thread swaps snapshots.
//!
//! ## Status side effect
//!
//! Writing a response or attaching evidence to a `Not Started`
//! assignment promotes it to `In Progress`. This is a derived effect of
//! mutation, not a user action, and it never reverts automatically.

use coe_core::{
    Assignment, AssignmentId, AssignmentStatus, Audit, Domain, DomainId, QuestionId, Response,
    ResponsePatch, Timestamp,
};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// The in-memory source of truth for one Command Center session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditStore {
    audit: Audit,
    domains: Vec<Domain>,
    assignments: Vec<Assignment>,
}

impl AuditStore {
    /// Assemble a store from already-validated records.
    pub fn new(audit: Audit, domains: Vec<Domain>, assignments: Vec<Assignment>) -> Self {
        Self {
            audit,
            domains,
            assignments,
        }
    }

    /// The audit this session tracks.
    pub fn audit(&self) -> &Audit {
        &self.audit
    }

    /// All compliance domains, in load order.
    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    /// All assignments, in load order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Look up an assignment by id.
    pub fn assignment(&self, id: &AssignmentId) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == *id)
    }

    /// Look up a domain by id.
    pub fn domain(&self, id: &DomainId) -> Option<&Domain> {
        self.domains.iter().find(|d| d.id == *id)
    }

    /// The display name for a domain id, falling back to the raw id when
    /// the domain is unknown. Assignments must always render, even when
    /// their domain reference does not resolve.
    pub fn domain_label<'a>(&'a self, id: &'a DomainId) -> &'a str {
        match self.domain(id) {
            Some(d) => &d.name,
            None => id.as_str(),
        }
    }

    /// Merge a response patch into one question's response, creating the
    /// response if this is the first write for that question.
    ///
    /// Stamps `last_updated` and promotes `Not Started` assignments to
    /// `In Progress`.
    ///
    /// # Errors
    ///
    /// [`StoreError::UnknownAssignment`] / [`StoreError::UnknownQuestion`]
    /// when the target ids do not resolve; the snapshot is unchanged.
    pub fn update_response(
        &self,
        assignment_id: &AssignmentId,
        question_id: &QuestionId,
        patch: &ResponsePatch,
    ) -> Result<Self, StoreError> {
        let mut next = self.clone();
        let a = next.assignment_mut(assignment_id)?;
        if a.question(question_id).is_none() {
            return Err(StoreError::UnknownQuestion {
                assignment: assignment_id.clone(),
                question: question_id.clone(),
            });
        }
        a.responses
            .entry(question_id.clone())
            .or_insert_with(Response::default)
            .apply(patch);
        Self::touch(a);
        tracing::debug!(
            assignment = %assignment_id,
            question = %question_id,
            "response updated"
        );
        Ok(next)
    }

    /// Append an evidence filename to one question's response,
    /// deduplicated. Idempotent for repeated identical filenames.
    ///
    /// Stamps `last_updated` and applies the same Not Started →
    /// In Progress promotion as [`update_response`](Self::update_response).
    pub fn add_evidence(
        &self,
        assignment_id: &AssignmentId,
        question_id: &QuestionId,
        filename: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let filename = filename.into();
        let mut next = self.clone();
        let a = next.assignment_mut(assignment_id)?;
        if a.question(question_id).is_none() {
            return Err(StoreError::UnknownQuestion {
                assignment: assignment_id.clone(),
                question: question_id.clone(),
            });
        }
        let added = a
            .responses
            .entry(question_id.clone())
            .or_insert_with(Response::default)
            .add_evidence(filename.clone());
        Self::touch(a);
        tracing::debug!(
            assignment = %assignment_id,
            question = %question_id,
            file = %filename,
            added,
            "evidence recorded"
        );
        Ok(next)
    }

    /// Force an assignment to `Completed`, regardless of current state.
    pub fn mark_completed(&self, assignment_id: &AssignmentId) -> Result<Self, StoreError> {
        let mut next = self.clone();
        let a = next.assignment_mut(assignment_id)?;
        a.status = AssignmentStatus::Completed;
        a.last_updated = Some(Timestamp::now());
        tracing::debug!(assignment = %assignment_id, "assignment marked completed");
        Ok(next)
    }

    /// Advance every assignment exactly one step along the SLA
    /// progression. Completed assignments are unaffected.
    ///
    /// This is the fast-forward simulation used to demo reminder and
    /// escalation flows; it is not tied to real elapsed time.
    pub fn advance_all_statuses(&self) -> Self {
        let mut next = self.clone();
        for a in &mut next.assignments {
            let advanced = a.status.advanced();
            if advanced != a.status {
                a.status = advanced;
                a.last_updated = Some(Timestamp::now());
            }
        }
        tracing::debug!("all assignment statuses advanced one step");
        next
    }

    fn assignment_mut(&mut self, id: &AssignmentId) -> Result<&mut Assignment, StoreError> {
        self.assignments
            .iter_mut()
            .find(|a| a.id == *id)
            .ok_or_else(|| StoreError::UnknownAssignment(id.clone()))
    }

    /// Stamp a write: update the timestamp and apply the Not Started →
    /// In Progress promotion.
    fn touch(a: &mut Assignment) {
        a.last_updated = Some(Timestamp::now());
        if a.status == AssignmentStatus::NotStarted {
            a.status = AssignmentStatus::InProgress;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed;
    use coe_core::ComplianceChoice;

    fn asgn(id: &str) -> AssignmentId {
        AssignmentId::new(id).unwrap()
    }

    fn q(id: &str) -> QuestionId {
        QuestionId::new(id).unwrap()
    }

    #[test]
    fn update_response_merges_patch_and_round_trips() {
        let store = seed();
        let store = store
            .update_response(
                &asgn("asgn-1"),
                &q("q-1"),
                &ResponsePatch::set_choice(ComplianceChoice::Compliant),
            )
            .unwrap();

        // Previously seeded text and evidence survive a choice-only patch.
        let r = store
            .assignment(&asgn("asgn-1"))
            .unwrap()
            .response(&q("q-1"))
            .unwrap();
        assert_eq!(r.choice, Some(ComplianceChoice::Compliant));
        assert_eq!(r.text, "Training tracker attached.");
        assert_eq!(r.evidence, vec!["training_tracker.xlsx"]);

        let store = store
            .update_response(&asgn("asgn-1"), &q("q-1"), &ResponsePatch::set_text("Updated"))
            .unwrap();
        let r = store
            .assignment(&asgn("asgn-1"))
            .unwrap()
            .response(&q("q-1"))
            .unwrap();
        assert_eq!(r.choice, Some(ComplianceChoice::Compliant));
        assert_eq!(r.text, "Updated");
    }

    #[test]
    fn update_response_creates_response_lazily() {
        let store = seed();
        // asgn-3 starts with no responses at all.
        assert!(store
            .assignment(&asgn("asgn-3"))
            .unwrap()
            .response(&q("q-5"))
            .is_none());

        let store = store
            .update_response(&asgn("asgn-3"), &q("q-5"), &ResponsePatch::set_text("Review sent"))
            .unwrap();
        let r = store
            .assignment(&asgn("asgn-3"))
            .unwrap()
            .response(&q("q-5"))
            .unwrap();
        assert_eq!(r.text, "Review sent");
        assert_eq!(r.choice, None);
    }

    #[test]
    fn first_write_promotes_not_started_to_in_progress() {
        let store = seed();
        assert_eq!(
            store.assignment(&asgn("asgn-3")).unwrap().status,
            AssignmentStatus::NotStarted
        );

        let store = store
            .update_response(&asgn("asgn-3"), &q("q-6"), &ResponsePatch::set_text("x"))
            .unwrap();
        let a = store.assignment(&asgn("asgn-3")).unwrap();
        assert_eq!(a.status, AssignmentStatus::InProgress);
        assert!(a.last_updated.is_some());

        // A second write never reverts the status.
        let store = store
            .update_response(&asgn("asgn-3"), &q("q-6"), &ResponsePatch::set_text("y"))
            .unwrap();
        assert_eq!(
            store.assignment(&asgn("asgn-3")).unwrap().status,
            AssignmentStatus::InProgress
        );
    }

    #[test]
    fn evidence_promotes_status_too() {
        let store = seed();
        let store = store
            .add_evidence(&asgn("asgn-3"), &q("q-5"), "access_review.xlsx")
            .unwrap();
        assert_eq!(
            store.assignment(&asgn("asgn-3")).unwrap().status,
            AssignmentStatus::InProgress
        );
    }

    #[test]
    fn add_evidence_is_idempotent() {
        let store = seed();
        let store = store
            .add_evidence(&asgn("asgn-2"), &q("q-4"), "a.pdf")
            .unwrap();
        let store = store
            .add_evidence(&asgn("asgn-2"), &q("q-4"), "a.pdf")
            .unwrap();
        let r = store
            .assignment(&asgn("asgn-2"))
            .unwrap()
            .response(&q("q-4"))
            .unwrap();
        assert_eq!(r.evidence, vec!["a.pdf"]);
    }

    #[test]
    fn mark_completed_forces_terminal_state() {
        let store = seed();
        // asgn-2 is Overdue in the seed; completion overrides it.
        let store = store.mark_completed(&asgn("asgn-2")).unwrap();
        let a = store.assignment(&asgn("asgn-2")).unwrap();
        assert_eq!(a.status, AssignmentStatus::Completed);
        assert!(a.last_updated.is_some());
    }

    #[test]
    fn advance_all_statuses_moves_each_one_step() {
        let store = seed();
        let advanced = store.advance_all_statuses();
        // In Progress → Overdue, Overdue → Completed, Not Started → In Progress.
        assert_eq!(
            advanced.assignment(&asgn("asgn-1")).unwrap().status,
            AssignmentStatus::Overdue
        );
        assert_eq!(
            advanced.assignment(&asgn("asgn-2")).unwrap().status,
            AssignmentStatus::Completed
        );
        assert_eq!(
            advanced.assignment(&asgn("asgn-3")).unwrap().status,
            AssignmentStatus::InProgress
        );
    }

    #[test]
    fn triple_fast_forward_walks_asgn_3_to_completed() {
        let mut store = seed();
        let mut observed = Vec::new();
        for _ in 0..3 {
            store = store.advance_all_statuses();
            observed.push(store.assignment(&asgn("asgn-3")).unwrap().status);
        }
        assert_eq!(
            observed,
            vec![
                AssignmentStatus::InProgress,
                AssignmentStatus::Overdue,
                AssignmentStatus::Completed,
            ]
        );
        // Idempotent once terminal.
        let store = store.advance_all_statuses();
        assert_eq!(
            store.assignment(&asgn("asgn-3")).unwrap().status,
            AssignmentStatus::Completed
        );
    }

    #[test]
    fn mutations_do_not_alias_the_previous_snapshot() {
        let before = seed();
        let after = before
            .update_response(&asgn("asgn-3"), &q("q-6"), &ResponsePatch::set_text("x"))
            .unwrap();
        // The old snapshot is untouched.
        assert_eq!(
            before.assignment(&asgn("asgn-3")).unwrap().status,
            AssignmentStatus::NotStarted
        );
        assert!(before
            .assignment(&asgn("asgn-3"))
            .unwrap()
            .responses
            .is_empty());
        assert_ne!(before, after);
    }

    #[test]
    fn unknown_ids_are_rejected_without_mutation() {
        let store = seed();
        let err = store
            .update_response(&asgn("asgn-9"), &q("q-1"), &ResponsePatch::default())
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownAssignment(_)));

        let err = store
            .add_evidence(&asgn("asgn-1"), &q("q-99"), "x.pdf")
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownQuestion { .. }));

        assert!(store.mark_completed(&asgn("nope")).is_err());
    }

    #[test]
    fn domain_label_falls_back_to_raw_id() {
        let store = seed();
        let known = DomainId::new("legal").unwrap();
        assert_eq!(store.domain_label(&known), "Legal & Compliance");
        let unknown = DomainId::new("finance").unwrap();
        assert_eq!(store.domain_label(&unknown), "finance");
    }
}
