//! # Write-Path Submission State
//!
//! Tracks the single outstanding task-response submission: local
//! validation before any network call, the in-flight flag frontends use
//! to disable re-submission, and the last tagged outcome, which
//! survives unrelated state changes so the inline message does not
//! flicker away.

use coe_core::ValidationError;
use coe_live_client::{LiveClient, SubmitOutcome, TaskResponseRequest};

/// State of the task-response write path.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    in_flight: bool,
    last: Option<SubmitOutcome>,
}

impl Submission {
    /// A fresh submission state with nothing in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a submission is currently in flight. Frontends disable
    /// the submit control while this is set.
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// The outcome of the last attempted submission, if any.
    pub fn last_outcome(&self) -> Option<&SubmitOutcome> {
        self.last.as_ref()
    }

    /// Validate submission input locally.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingTaskSelection`] when no task id is set,
    /// [`ValidationError::EmptyResponseText`] when the response text is
    /// blank. Either way, no network call should be attempted.
    pub fn validate(req: &TaskResponseRequest) -> Result<(), ValidationError> {
        if req.task_id.trim().is_empty() {
            return Err(ValidationError::MissingTaskSelection);
        }
        if req.response_text.trim().is_empty() {
            return Err(ValidationError::EmptyResponseText);
        }
        Ok(())
    }

    /// Submit one task response.
    ///
    /// Validates locally first — a validation failure is recorded and
    /// returned as a rejection without touching the network. Otherwise
    /// the in-flight flag wraps the backend call, and the tagged outcome
    /// is recorded and returned. Never panics, never returns an error
    /// value.
    pub async fn submit(
        &mut self,
        client: &LiveClient,
        req: &TaskResponseRequest,
    ) -> SubmitOutcome {
        if let Err(e) = Self::validate(req) {
            let outcome = SubmitOutcome::Rejected {
                error: e.to_string(),
            };
            self.last = Some(outcome.clone());
            return outcome;
        }

        self.in_flight = true;
        let outcome = client.submit_task_response(req).await;
        self.in_flight = false;

        self.last = Some(outcome.clone());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coe_live_client::LiveApiConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> LiveClient {
        LiveClient::new(LiveApiConfig::for_base(server.uri().parse().unwrap())).unwrap()
    }

    #[tokio::test]
    async fn validation_failures_never_reach_the_network() {
        let server = MockServer::start().await;
        // Any request hitting the server would violate .expect(0).
        Mock::given(method("POST"))
            .and(path("/task-responses"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let mut submission = Submission::new();

        let outcome = submission
            .submit(&client, &TaskResponseRequest::text("", "some text"))
            .await;
        assert!(outcome.error().unwrap().contains("no task selected"));

        let outcome = submission
            .submit(&client, &TaskResponseRequest::text("t-1", "   "))
            .await;
        assert!(outcome.error().unwrap().contains("non-empty"));

        assert!(!submission.in_flight());
        assert!(submission.last_outcome().is_some());
    }

    #[tokio::test]
    async fn accepted_submission_is_recorded() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/task-responses"))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": "tr-1"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut submission = Submission::new();
        let outcome = submission
            .submit(&client_for(&server), &TaskResponseRequest::text("t-1", "done"))
            .await;

        assert!(outcome.is_accepted());
        assert!(!submission.in_flight());
        assert_eq!(submission.last_outcome(), Some(&outcome));
    }

    #[tokio::test]
    async fn backend_rejection_is_recorded_with_the_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/task-responses"))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
            .mount(&server)
            .await;

        let mut submission = Submission::new();
        let outcome = submission
            .submit(&client_for(&server), &TaskResponseRequest::text("t-1", "x"))
            .await;

        assert!(!outcome.is_accepted());
        assert!(outcome.error().unwrap().contains("400"));
        assert!(!submission.in_flight());
        // The rejection stays visible until the next attempt.
        assert_eq!(submission.last_outcome(), Some(&outcome));
    }
}
