//! # Demo Console Handlers
//!
//! The dashboard's three screens — Command Center, POC Task Inbox, and
//! Respond — rendered as text over the seeded demo store, plus the SLA
//! fast-forward simulation and the Audit Pack export. Every handler
//! drives the same reducer the views derive from, so role rules apply
//! here exactly as they would in a graphical frontend.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Args, ValueEnum};
use coe_console::{reduce, Action, AppState, Role, View};
use coe_core::{
    Assignment, AssignmentId, ComplianceChoice, QuestionId, ResponsePatch,
};
use coe_store::seed;

/// Role selector shared by the demo subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    /// COE Admin — full visibility, full write access.
    Admin,
    /// Domain POC — own slice only.
    Poc,
    /// Executive Viewer — read-only command center.
    Executive,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Admin => Role::CoeAdmin,
            RoleArg::Poc => Role::DomainPoc,
            RoleArg::Executive => Role::ExecutiveViewer,
        }
    }
}

/// Flags shared by every demo subcommand.
#[derive(Debug, Args)]
pub struct SessionArgs {
    /// Active role for the session.
    #[arg(long, value_enum, default_value_t = RoleArg::Admin)]
    pub role: RoleArg,

    /// Active POC identity (meaningful with --role poc).
    #[arg(long, default_value = "Hanuma Sateesh")]
    pub poc: String,
}

impl SessionArgs {
    /// Seed a session and apply the role/POC selection through the
    /// reducer, so the usual redirect and visibility rules run.
    fn session(&self) -> AppState {
        let state = AppState::new(seed());
        let state = reduce(state, Action::SwitchPoc(self.poc.clone()));
        reduce(state, Action::SwitchRole(self.role.into()))
    }
}

// ── coe status ───────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct StatusArgs {
    #[command(flatten)]
    pub session: SessionArgs,
}

/// Render the command center (or the inbox, when the role rules
/// redirect there).
pub fn run_status(args: &StatusArgs) -> anyhow::Result<u8> {
    let state = reduce(args.session.session(), Action::Navigate(View::Command));
    match state.view() {
        View::Command => print!("{}", render_command(&state)),
        _ => {
            println!("Command Center is not available for the {} role.", state.role());
            print!("{}", render_inbox(&state));
        }
    }
    Ok(0)
}

// ── coe inbox ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InboxArgs {
    #[command(flatten)]
    pub session: SessionArgs,
}

/// Render the POC task inbox for the active role.
pub fn run_inbox(args: &InboxArgs) -> anyhow::Result<u8> {
    let state = reduce(args.session.session(), Action::Navigate(View::Inbox));
    if state.view() != View::Inbox {
        println!("The inbox is not available for the {} role.", state.role());
        return Ok(1);
    }
    print!("{}", render_inbox(&state));
    Ok(0)
}

// ── coe respond ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RespondArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Assignment to open (defaults to the current selection).
    #[arg(long)]
    pub assignment: Option<String>,

    /// Question to answer (required with --choice/--comment/--evidence).
    #[arg(long)]
    pub question: Option<String>,

    /// Compliance choice: Compliant, Non-Compliant, or Not Applicable.
    #[arg(long)]
    pub choice: Option<String>,

    /// Free-text rationale for the question.
    #[arg(long)]
    pub comment: Option<String>,

    /// Evidence filename to attach. Repeatable.
    #[arg(long)]
    pub evidence: Vec<String>,

    /// Mark the assignment completed after applying the updates.
    #[arg(long)]
    pub complete: bool,
}

/// Apply response updates through the reducer and render the respond
/// view for the selected assignment.
pub fn run_respond(args: &RespondArgs) -> anyhow::Result<u8> {
    let mut state = reduce(args.session.session(), Action::Navigate(View::Respond));

    if !state.role().can_write()
        && (args.choice.is_some()
            || args.comment.is_some()
            || !args.evidence.is_empty()
            || args.complete)
    {
        println!("The {} role is read-only; updates were not applied.", state.role());
    }

    if let Some(raw) = &args.assignment {
        let id = AssignmentId::new(raw.clone())?;
        state = reduce(state, Action::Select(id));
    }

    let Some(selected_id) = state.selected_id().cloned() else {
        println!("No assignment to respond to.");
        return Ok(1);
    };

    let wants_question_update =
        args.choice.is_some() || args.comment.is_some() || !args.evidence.is_empty();
    if wants_question_update {
        let Some(question_raw) = &args.question else {
            bail!("--question is required with --choice, --comment, or --evidence");
        };
        let question = QuestionId::new(question_raw.clone())?;

        let mut patch = ResponsePatch::default();
        if let Some(raw_choice) = &args.choice {
            let choice = ComplianceChoice::from_name(raw_choice).with_context(|| {
                format!(
                    "unknown choice {raw_choice:?} (expected Compliant, Non-Compliant, or Not Applicable)"
                )
            })?;
            patch = ResponsePatch::set_choice(choice);
        }
        if let Some(comment) = &args.comment {
            patch = patch.with_text(comment.clone());
        }
        if patch != ResponsePatch::default() {
            state = reduce(
                state,
                Action::UpdateResponse {
                    assignment: selected_id.clone(),
                    question: question.clone(),
                    patch,
                },
            );
        }
        for filename in &args.evidence {
            state = reduce(
                state,
                Action::AddEvidence {
                    assignment: selected_id.clone(),
                    question: question.clone(),
                    filename: filename.clone(),
                },
            );
        }
    }

    if args.complete {
        state = reduce(state, Action::MarkCompleted(selected_id));
    }

    match state.selected_assignment() {
        Some(a) => print!("{}", render_respond(&state, a)),
        None => println!("No tasks assigned to {} in this dataset.", state.poc_name()),
    }
    Ok(0)
}

// ── coe advance ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AdvanceArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Number of fast-forward steps to simulate.
    #[arg(long, default_value_t = 1)]
    pub steps: u32,
}

/// Advance every assignment one SLA step per requested step.
pub fn run_advance(args: &AdvanceArgs) -> anyhow::Result<u8> {
    let mut state = args.session.session();
    if !state.role().can_write() {
        println!("The {} role is read-only; nothing advanced.", state.role());
        return Ok(1);
    }
    for step in 1..=args.steps {
        state = reduce(state, Action::FastForward);
        let line: Vec<String> = state
            .store()
            .assignments()
            .iter()
            .map(|a| format!("{} {}", a.id, a.status))
            .collect();
        println!("Step {step}: {}", line.join(" | "));
    }
    Ok(0)
}

// ── coe export ───────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Directory the Audit Pack is written into.
    #[arg(long, default_value = ".")]
    pub out: PathBuf,
}

/// Write the role-scoped Audit Pack and print its path.
pub fn run_export(args: &ExportArgs) -> anyhow::Result<u8> {
    let state = args.session.session();
    let subset = state.visible_assignments();
    let path = coe_pack::write(
        &args.out,
        state.store().audit(),
        state.store().domains(),
        &subset,
    )
    .context("audit pack export failed")?;
    println!("Audit Pack written to {}", path.display());
    Ok(0)
}

// ── Rendering ────────────────────────────────────────────────────────

fn render_command(state: &AppState) -> String {
    let audit = state.store().audit();
    let stats = state.stats();
    let mut out = String::new();

    out.push_str(&format!("{} — Audit Command Center\n", audit.account));
    out.push_str(&format!(
        "{} • {} • Due {}\n\n",
        audit.id, audit.cohort, audit.due_date
    ));
    out.push_str(&format!(
        "Progress: {}% (Completed {}/{})   Overdue: {}   In Progress: {}\n",
        stats.completion_pct, stats.completed, stats.total, stats.overdue, stats.in_progress
    ));
    out.push_str(&format!(
        "Non-compliance flags: {}   Evidence uploaded: {}\n\n",
        stats.non_compliances, stats.evidence_count
    ));

    out.push_str(&format!(
        "{:<24} {:<24} {:<12} {:<12} {}\n",
        "Domain", "Assignee", "Status", "Due", "Last Updated"
    ));
    for a in state.store().assignments() {
        out.push_str(&format!(
            "{:<24} {:<24} {:<12} {:<12} {}\n",
            state.store().domain_label(&a.domain_id),
            a.assignee,
            a.status,
            a.due_date,
            a.last_updated_label()
        ));
    }
    out
}

fn render_inbox(state: &AppState) -> String {
    let visible = state.visible_assignments();
    if visible.is_empty() {
        return format!(
            "No tasks assigned to {} in this dataset.\n",
            state.poc_name()
        );
    }
    let mut out = String::new();
    out.push_str("POC Task Inbox\n\n");
    for a in &visible {
        out.push_str(&format!(
            "[{}] {} — {} | Assignee: {} | Due: {} | {} questions | Last updated: {}\n",
            a.id,
            state.store().domain_label(&a.domain_id),
            a.status,
            a.assignee,
            a.due_date,
            a.questions.len(),
            a.last_updated_label()
        ));
    }
    out
}

fn render_respond(state: &AppState, assignment: &Assignment) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Respond — {} | Assignee: {} | Status: {} | Due: {}\n",
        state.store().domain_label(&assignment.domain_id),
        assignment.assignee,
        assignment.status,
        assignment.due_date
    ));
    out.push_str(&format!(
        "Last updated: {}\n\n",
        assignment.last_updated_label()
    ));
    for q in &assignment.questions {
        out.push_str(&format!("[{}] {}\n", q.id, q.text));
        match assignment.response(&q.id) {
            Some(r) => {
                let choice = r
                    .choice
                    .map(|c| c.as_str().to_string())
                    .unwrap_or_else(|| "—".to_string());
                out.push_str(&format!("    Status: {choice}\n"));
                if !r.text.is_empty() {
                    out.push_str(&format!("    Comment: {}\n", r.text));
                }
                if !r.evidence.is_empty() {
                    out.push_str(&format!("    Evidence: {}\n", r.evidence.join(", ")));
                }
            }
            None => out.push_str("    Status: —\n"),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: RoleArg, poc: &str) -> SessionArgs {
        SessionArgs {
            role,
            poc: poc.to_string(),
        }
    }

    #[test]
    fn command_view_shows_metrics_and_all_domains() {
        let state = session(RoleArg::Admin, "Hanuma Sateesh").session();
        let rendered = render_command(&state);
        assert!(rendered.contains("Client — Audit Command Center"));
        assert!(rendered.contains("Progress: 0% (Completed 0/3)"));
        assert!(rendered.contains("Non-compliance flags: 1"));
        assert!(rendered.contains("Legal & Compliance"));
        assert!(rendered.contains("Information Security"));
    }

    #[test]
    fn poc_inbox_lists_only_the_slice() {
        let state = session(RoleArg::Poc, "Hanuma Sateesh").session();
        let rendered = render_inbox(&state);
        assert!(rendered.contains("[asgn-2]"));
        assert!(!rendered.contains("[asgn-1]"));
    }

    #[test]
    fn unassigned_poc_gets_the_empty_notice() {
        let state = session(RoleArg::Poc, "Nobody").session();
        let rendered = render_inbox(&state);
        assert!(rendered.contains("No tasks assigned to Nobody"));
    }

    #[test]
    fn respond_view_shows_questions_and_recorded_answers() {
        let state = session(RoleArg::Poc, "Hanuma Sateesh").session();
        let assignment = state.selected_assignment().unwrap();
        let rendered = render_respond(&state, assignment);
        assert!(rendered.contains("[q-3] Confirm MFA enforcement"));
        assert!(rendered.contains("Status: Non-Compliant"));
        assert!(rendered.contains("Comment: MFA rollout in progress for legacy apps."));
        // q-4 has an empty response; no comment or evidence lines.
        assert!(rendered.contains("[q-4] Upload latest vulnerability scan report."));
    }

    #[test]
    fn role_arg_maps_to_console_roles() {
        assert_eq!(Role::from(RoleArg::Admin), Role::CoeAdmin);
        assert_eq!(Role::from(RoleArg::Poc), Role::DomainPoc);
        assert_eq!(Role::from(RoleArg::Executive), Role::ExecutiveViewer);
    }
}
