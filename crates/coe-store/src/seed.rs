//! # Seed Dataset
//!
//! The fixed demo dataset a session starts from: four compliance
//! domains, one audit, and three assignments in distinct SLA states.
//! Seeded once at session start; everything lives in memory only and
//! vanishes with the session.

use std::collections::BTreeMap;

use chrono::{NaiveDate, TimeZone, Utc};
use coe_core::{
    Assignment, AssignmentId, AssignmentStatus, Audit, AuditId, ComplianceChoice, Domain, DomainId,
    Question, QuestionId, QuestionKind, Response, Timestamp,
};

use crate::store::AuditStore;

/// Build the demo store.
///
/// The dataset is deliberately small but covers every state the views
/// care about: an in-progress assignment with mixed responses, an
/// overdue one carrying a non-compliance flag, and an untouched one.
pub fn seed() -> AuditStore {
    let audit = Audit {
        id: audit_id("AUD-2026-021"),
        account: "Client".to_string(),
        cohort: "Cohort 3: Planned Client Audit".to_string(),
        due_date: date(2026, 2, 28),
        status: "In Progress".to_string(),
    };

    let domains = vec![
        Domain {
            id: domain_id("legal"),
            name: "Legal & Compliance".to_string(),
            poc: "Lebogangshadi Jiyana".to_string(),
            escalation: "Jillian Stillman".to_string(),
        },
        Domain {
            id: domain_id("infosec"),
            name: "Information Security".to_string(),
            poc: "Hanuma Sateesh".to_string(),
            escalation: "Gopinath Subramaniyam".to_string(),
        },
        Domain {
            id: domain_id("it"),
            name: "IT".to_string(),
            poc: "TAM Queue".to_string(),
            escalation: "SSG Leads".to_string(),
        },
        Domain {
            id: domain_id("hr"),
            name: "HR".to_string(),
            poc: "HR Audit Team".to_string(),
            escalation: "Ranveer Chawla".to_string(),
        },
    ];

    let assignments = vec![
        Assignment {
            id: assignment_id("asgn-1"),
            domain_id: domain_id("legal"),
            assignee: "Lebogangshadi Jiyana".to_string(),
            due_date: date(2026, 2, 14),
            status: AssignmentStatus::InProgress,
            last_updated: Some(ts(2026, 2, 9, 10, 12)),
            questions: vec![
                Question {
                    id: question_id("q-1"),
                    text: "Provide evidence of updated compliance training completion."
                        .to_string(),
                    kind: QuestionKind::Text,
                },
                Question {
                    id: question_id("q-2"),
                    text: "Are contractual compliance clauses met?".to_string(),
                    kind: QuestionKind::Choice,
                },
            ],
            responses: BTreeMap::from([
                (
                    question_id("q-1"),
                    Response {
                        choice: None,
                        text: "Training tracker attached.".to_string(),
                        evidence: vec!["training_tracker.xlsx".to_string()],
                    },
                ),
                (
                    question_id("q-2"),
                    Response {
                        choice: Some(ComplianceChoice::Compliant),
                        text: "All required clauses met as per latest review.".to_string(),
                        evidence: vec![],
                    },
                ),
            ]),
        },
        Assignment {
            id: assignment_id("asgn-2"),
            domain_id: domain_id("infosec"),
            assignee: "Hanuma Sateesh".to_string(),
            due_date: date(2026, 2, 11),
            status: AssignmentStatus::Overdue,
            last_updated: Some(ts(2026, 2, 8, 17, 40)),
            questions: vec![
                Question {
                    id: question_id("q-3"),
                    text: "Confirm MFA enforcement and provide policy reference.".to_string(),
                    kind: QuestionKind::Choice,
                },
                Question {
                    id: question_id("q-4"),
                    text: "Upload latest vulnerability scan report.".to_string(),
                    kind: QuestionKind::Upload,
                },
            ],
            responses: BTreeMap::from([
                (
                    question_id("q-3"),
                    Response {
                        choice: Some(ComplianceChoice::NonCompliant),
                        text: "MFA rollout in progress for legacy apps.".to_string(),
                        evidence: vec![],
                    },
                ),
                (question_id("q-4"), Response::default()),
            ]),
        },
        Assignment {
            id: assignment_id("asgn-3"),
            domain_id: domain_id("it"),
            assignee: "TAM Queue".to_string(),
            due_date: date(2026, 2, 13),
            status: AssignmentStatus::NotStarted,
            last_updated: None,
            questions: vec![
                Question {
                    id: question_id("q-5"),
                    text: "Provide IT access review evidence for last quarter.".to_string(),
                    kind: QuestionKind::Upload,
                },
                Question {
                    id: question_id("q-6"),
                    text: "Confirm incident response process is documented.".to_string(),
                    kind: QuestionKind::Choice,
                },
            ],
            responses: BTreeMap::new(),
        },
    ];

    AuditStore::new(audit, domains, assignments)
}

fn audit_id(raw: &str) -> AuditId {
    AuditId::new(raw).expect("seed audit id is non-empty")
}

fn domain_id(raw: &str) -> DomainId {
    DomainId::new(raw).expect("seed domain id is non-empty")
}

fn assignment_id(raw: &str) -> AssignmentId {
    AssignmentId::new(raw).expect("seed assignment id is non-empty")
}

fn question_id(raw: &str) -> QuestionId {
    QuestionId::new(raw).expect("seed question id is non-empty")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed date is valid")
}

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Timestamp {
    Timestamp::from_datetime(
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
            .single()
            .expect("seed timestamp is valid"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_four_domains_and_three_assignments() {
        let store = seed();
        assert_eq!(store.domains().len(), 4);
        assert_eq!(store.assignments().len(), 3);
        assert_eq!(store.audit().id.as_str(), "AUD-2026-021");
        assert_eq!(store.audit().account, "Client");
    }

    #[test]
    fn seed_assignment_domains_all_resolve() {
        let store = seed();
        for a in store.assignments() {
            assert!(
                store.domain(&a.domain_id).is_some(),
                "domain {} must resolve",
                a.domain_id
            );
        }
    }

    #[test]
    fn seed_statuses_cover_the_progression() {
        let store = seed();
        let statuses: Vec<_> = store.assignments().iter().map(|a| a.status).collect();
        assert_eq!(
            statuses,
            vec![
                AssignmentStatus::InProgress,
                AssignmentStatus::Overdue,
                AssignmentStatus::NotStarted,
            ]
        );
    }

    #[test]
    fn seed_carries_one_non_compliance_flag() {
        let store = seed();
        let flagged: usize = store
            .assignments()
            .iter()
            .flat_map(|a| a.responses.values())
            .filter(|r| r.choice == Some(ComplianceChoice::NonCompliant))
            .count();
        assert_eq!(flagged, 1);
    }

    #[test]
    fn untouched_assignment_has_no_timestamp() {
        let store = seed();
        let a = store
            .assignment(&assignment_id("asgn-3"))
            .expect("asgn-3 seeded");
        assert!(a.last_updated.is_none());
        assert_eq!(a.last_updated_label(), "—");
    }

    #[test]
    fn seed_last_updated_stamps_match_the_dashboard() {
        let store = seed();
        let a1 = store.assignment(&assignment_id("asgn-1")).unwrap();
        assert_eq!(a1.last_updated_label(), "2026-02-09 10:12");
        let a2 = store.assignment(&assignment_id("asgn-2")).unwrap();
        assert_eq!(a2.last_updated_label(), "2026-02-08 17:40");
    }
}
