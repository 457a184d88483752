//! # Audit Pack Report
//!
//! Flat-text rendering of an assignment subset: a header naming the
//! audit, then one block per assignment with its questions, answers,
//! and evidence. The subset is whatever the caller's role makes
//! visible — admins and executives export the full pack, a POC exports
//! their slice.

use std::path::{Path, PathBuf};

use coe_core::{Assignment, Audit, Domain, DomainId};

use crate::error::PackError;

/// Render the Audit Pack for an assignment subset.
///
/// Deterministic: the same inputs produce byte-identical output.
/// Questions are listed in assignment order whether or not they have
/// been answered; the `Evidence:` line appears only when a response
/// carries at least one file.
pub fn render(audit: &Audit, domains: &[Domain], assignments: &[&Assignment]) -> String {
    let mut lines = Vec::new();
    lines.push("Audit Pack".to_string());
    lines.push(format!("Audit: {} | {}", audit.id, audit.account));

    for a in assignments {
        lines.push(String::new());
        lines.push(format!("=== {} ===", domain_name(domains, &a.domain_id)));
        lines.push(format!(
            "Assignee: {} | Status: {} | Due: {}",
            a.assignee, a.status, a.due_date
        ));
        for q in &a.questions {
            lines.push(format!("- Q: {}", q.text));

            let (choice, text) = match a.response(&q.id) {
                Some(r) => (
                    r.choice.map(|c| c.as_str()).unwrap_or_default(),
                    r.text.as_str(),
                ),
                None => ("", ""),
            };
            let answer = match (choice.is_empty(), text.is_empty()) {
                (true, true) => "  Answer:".to_string(),
                (false, true) => format!("  Answer: {choice}"),
                (true, false) => format!("  Answer: | {text}"),
                (false, false) => format!("  Answer: {choice} | {text}"),
            };
            lines.push(answer);

            if let Some(r) = a.response(&q.id) {
                if !r.evidence.is_empty() {
                    lines.push(format!("  Evidence: {}", r.evidence.join(", ")));
                }
            }
        }
    }

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

/// Render and save the Audit Pack as `<auditId>_AuditPack.txt` in `dir`.
///
/// Returns the path of the written file.
pub fn write(
    dir: &Path,
    audit: &Audit,
    domains: &[Domain],
    assignments: &[&Assignment],
) -> Result<PathBuf, PackError> {
    let path = dir.join(format!("{}_AuditPack.txt", audit.id));
    let report = render(audit, domains, assignments);
    std::fs::write(&path, report).map_err(|source| PackError::Io {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "audit pack written");
    Ok(path)
}

/// The display name for a domain id, falling back to the raw id — an
/// assignment must render even when its domain reference is unknown.
fn domain_name<'a>(domains: &'a [Domain], id: &'a DomainId) -> &'a str {
    domains
        .iter()
        .find(|d| d.id == *id)
        .map(|d| d.name.as_str())
        .unwrap_or_else(|| id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use coe_store::seed;

    fn render_seed() -> String {
        let store = seed();
        let subset: Vec<&Assignment> = store.assignments().iter().collect();
        render(store.audit(), store.domains(), &subset)
    }

    #[test]
    fn header_names_the_audit() {
        let report = render_seed();
        assert!(report.starts_with("Audit Pack\nAudit: AUD-2026-021 | Client\n"));
    }

    #[test]
    fn full_export_has_one_block_per_assignment() {
        let report = render_seed();
        let blocks = report.matches("=== ").count();
        assert_eq!(blocks, 3);
        assert!(report.contains("=== Legal & Compliance ==="));
        assert!(report.contains("=== Information Security ==="));
        assert!(report.contains("=== IT ==="));
    }

    #[test]
    fn blocks_carry_assignee_status_and_due_date() {
        let report = render_seed();
        assert!(report
            .contains("Assignee: Hanuma Sateesh | Status: Overdue | Due: 2026-02-11"));
        assert!(report.contains("Assignee: TAM Queue | Status: Not Started | Due: 2026-02-13"));
    }

    #[test]
    fn every_question_is_listed_answered_or_not() {
        let report = render_seed();
        assert_eq!(report.matches("- Q: ").count(), 6);
        // asgn-3 has no responses; its questions still appear with bare
        // Answer lines.
        assert!(report.contains("- Q: Confirm incident response process is documented.\n  Answer:\n"));
    }

    #[test]
    fn answers_join_choice_and_comment() {
        let report = render_seed();
        assert!(report
            .contains("  Answer: Compliant | All required clauses met as per latest review."));
        assert!(report.contains("  Answer: Non-Compliant | MFA rollout in progress for legacy apps."));
        // Text-only response renders without a choice.
        assert!(report.contains("  Answer: | Training tracker attached."));
    }

    #[test]
    fn evidence_line_appears_only_when_present() {
        let report = render_seed();
        assert_eq!(report.matches("  Evidence: ").count(), 1);
        assert!(report.contains("  Evidence: training_tracker.xlsx"));
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render_seed(), render_seed());
    }

    #[test]
    fn unknown_domain_falls_back_to_the_raw_id() {
        let store = seed();
        let mut assignment = store.assignments()[0].clone();
        assignment.domain_id = DomainId::new("finance").unwrap();
        let subset = vec![&assignment];
        let report = render(store.audit(), store.domains(), &subset);
        assert!(report.contains("=== finance ==="));
    }

    #[test]
    fn a_poc_slice_exports_only_its_block() {
        let store = seed();
        let subset: Vec<&Assignment> = store
            .assignments()
            .iter()
            .filter(|a| a.assignee == "Hanuma Sateesh")
            .collect();
        let report = render(store.audit(), store.domains(), &subset);
        assert_eq!(report.matches("=== ").count(), 1);
        assert!(report.contains("=== Information Security ==="));
    }

    #[test]
    fn write_saves_the_named_file() {
        let store = seed();
        let subset: Vec<&Assignment> = store.assignments().iter().collect();
        let dir = tempfile::tempdir().unwrap();

        let path = write(dir.path(), store.audit(), store.domains(), &subset).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "AUD-2026-021_AuditPack.txt"
        );
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, render(store.audit(), store.domains(), &subset));
    }

    #[test]
    fn write_reports_io_failures_with_the_path() {
        let store = seed();
        let subset: Vec<&Assignment> = store.assignments().iter().collect();
        let missing = Path::new("/nonexistent-coe-dir/deeper");
        let err = write(missing, store.audit(), store.domains(), &subset).unwrap_err();
        assert!(format!("{err}").contains("AUD-2026-021_AuditPack.txt"));
    }
}
