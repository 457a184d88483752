//! # Application State Machine
//!
//! The role/view/selection state of a session, driven through a single
//! reducer: every external event — role switch, POC switch, navigation,
//! data mutation — is an [`Action`] fed to [`reduce`], and every
//! transition ends with [`reconcile_selection`], so the selected
//! assignment can never dangle and the view can never contradict the
//! role rules.
//!
//! ## Role rules
//!
//! - **Executive Viewer** is read-only: the view is pinned to Command
//!   and write actions are ignored.
//! - **Domain POC** only sees assignments whose assignee matches the
//!   active POC name, and gets the Inbox instead of the Command Center.
//! - **COE Admin** sees everything and can do everything.

use coe_core::{Assignment, AssignmentId, QuestionId, ResponsePatch};
use coe_store::{aggregate, AuditStats, AuditStore};
use serde::{Deserialize, Serialize};

/// Who is looking at the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Audit Center-of-Excellence administrator. Full visibility, full
    /// write access.
    #[serde(rename = "COE Admin")]
    CoeAdmin,
    /// A domain point of contact. Sees and answers only their own
    /// assignments.
    #[serde(rename = "Domain POC")]
    DomainPoc,
    /// Leadership. Sees the full picture, changes nothing.
    #[serde(rename = "Executive Viewer")]
    ExecutiveViewer,
}

impl Role {
    /// The canonical display name of this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CoeAdmin => "COE Admin",
            Self::DomainPoc => "Domain POC",
            Self::ExecutiveViewer => "Executive Viewer",
        }
    }

    /// Convert a canonical display name to a role.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "COE Admin" => Some(Self::CoeAdmin),
            "Domain POC" => Some(Self::DomainPoc),
            "Executive Viewer" => Some(Self::ExecutiveViewer),
            _ => None,
        }
    }

    /// Whether this role may mutate audit data.
    pub fn can_write(&self) -> bool {
        !matches!(self, Self::ExecutiveViewer)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// The command center: metric tiles and the domain status table.
    Command,
    /// The POC task inbox.
    Inbox,
    /// The per-assignment response screen.
    Respond,
}

impl View {
    /// The canonical name of this view.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Inbox => "inbox",
            Self::Respond => "respond",
        }
    }

    /// Convert a canonical name to a view.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "command" => Some(Self::Command),
            "inbox" => Some(Self::Inbox),
            "respond" => Some(Self::Respond),
            _ => None,
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The complete client-side application state.
///
/// Owned by a single logical thread; transitions replace the whole
/// value, so any reader holds a consistent snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    store: AuditStore,
    role: Role,
    poc_name: String,
    view: View,
    selected: Option<AssignmentId>,
}

impl AppState {
    /// Start a session over a store, as COE Admin on the Command view
    /// with the first assignment selected.
    pub fn new(store: AuditStore) -> Self {
        let state = Self {
            selected: store.assignments().first().map(|a| a.id.clone()),
            store,
            role: Role::CoeAdmin,
            poc_name: "Hanuma Sateesh".to_string(),
            view: View::Command,
        };
        reconcile_selection(state)
    }

    /// The current data store snapshot.
    pub fn store(&self) -> &AuditStore {
        &self.store
    }

    /// The active role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// The active POC identity (meaningful for [`Role::DomainPoc`]).
    pub fn poc_name(&self) -> &str {
        &self.poc_name
    }

    /// The current view.
    pub fn view(&self) -> View {
        self.view
    }

    /// The currently selected assignment id, if any assignment exists.
    pub fn selected_id(&self) -> Option<&AssignmentId> {
        self.selected.as_ref()
    }

    /// The assignments visible to the active role: a Domain POC sees
    /// their own slice, everyone else sees all of them.
    pub fn visible_assignments(&self) -> Vec<&Assignment> {
        match self.role {
            Role::DomainPoc => self
                .store
                .assignments()
                .iter()
                .filter(|a| a.assignee == self.poc_name)
                .collect(),
            _ => self.store.assignments().iter().collect(),
        }
    }

    /// The selected assignment, resolved against the visible pool, with
    /// the first visible assignment as fallback.
    pub fn selected_assignment(&self) -> Option<&Assignment> {
        let pool = self.visible_assignments();
        pool.iter()
            .find(|a| Some(&a.id) == self.selected.as_ref())
            .copied()
            .or_else(|| pool.first().copied())
    }

    /// Metrics over the visible subset — execs and admins get the full
    /// picture, a POC gets their slice.
    pub fn stats(&self) -> AuditStats {
        aggregate(self.visible_assignments())
    }
}

/// An external event driving the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Switch the active role.
    SwitchRole(Role),
    /// Switch the active POC identity.
    SwitchPoc(String),
    /// Navigate to a view.
    Navigate(View),
    /// Select an assignment.
    Select(AssignmentId),
    /// Merge a response patch for one question.
    UpdateResponse {
        assignment: AssignmentId,
        question: QuestionId,
        patch: ResponsePatch,
    },
    /// Attach an evidence filename to one question.
    AddEvidence {
        assignment: AssignmentId,
        question: QuestionId,
        filename: String,
    },
    /// Force an assignment to Completed.
    MarkCompleted(AssignmentId),
    /// Advance every assignment one SLA step (fast-forward simulation).
    FastForward,
}

/// The single state-transition function.
///
/// Total: invalid actions (write under a read-only role, unknown ids)
/// leave the state unchanged apart from logging. Every transition runs
/// through [`reconcile_selection`] before it is returned.
pub fn reduce(state: AppState, action: Action) -> AppState {
    let mut next = state;
    match action {
        Action::SwitchRole(role) => next.role = role,
        Action::SwitchPoc(name) => next.poc_name = name,
        Action::Navigate(view) => next.view = view,
        Action::Select(id) => next.selected = Some(id),
        ref write_action if !next.role.can_write() => {
            tracing::warn!(
                action = ?write_action,
                role = %next.role,
                "write action ignored for read-only role"
            );
        }
        Action::UpdateResponse {
            assignment,
            question,
            patch,
        } => match next.store.update_response(&assignment, &question, &patch) {
            Ok(store) => next.store = store,
            Err(e) => tracing::warn!(error = %e, "response update rejected"),
        },
        Action::AddEvidence {
            assignment,
            question,
            filename,
        } => match next.store.add_evidence(&assignment, &question, filename) {
            Ok(store) => next.store = store,
            Err(e) => tracing::warn!(error = %e, "evidence upload rejected"),
        },
        Action::MarkCompleted(assignment) => match next.store.mark_completed(&assignment) {
            Ok(store) => next.store = store,
            Err(e) => tracing::warn!(error = %e, "completion rejected"),
        },
        Action::FastForward => next.store = next.store.advance_all_statuses(),
    }
    reconcile_selection(next)
}

/// Re-establish the role/view/selection invariants.
///
/// Pure in the state value; invoked after every transition instead of
/// relying on a dependency-tracked effect scheduler:
/// - Executive Viewer is pinned to the Command view.
/// - A Domain POC sitting on Command is redirected to the Inbox.
/// - A selection outside the visible set resets to the first visible
///   assignment, falling back to the first assignment overall.
pub fn reconcile_selection(mut state: AppState) -> AppState {
    match state.role {
        Role::ExecutiveViewer => state.view = View::Command,
        Role::DomainPoc if state.view == View::Command => state.view = View::Inbox,
        _ => {}
    }

    let visible_ids: Vec<AssignmentId> = state
        .visible_assignments()
        .iter()
        .map(|a| a.id.clone())
        .collect();
    let selection_valid = state
        .selected
        .as_ref()
        .is_some_and(|id| visible_ids.contains(id));
    if !selection_valid {
        state.selected = visible_ids.first().cloned().or_else(|| {
            state
                .store
                .assignments()
                .first()
                .map(|a| a.id.clone())
        });
    }
    state
}
