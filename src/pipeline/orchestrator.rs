//! Request orchestration.
//!
//! A request moves through validation, persistence, policy evaluation and
//! notification. Validation and persistence failures end the request before
//! any mail is sent. Once the record is stored both notifications are
//! always attempted, concurrently, and their results are reported side by
//! side in the [`LeaveOutcome`].

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::PipelineResult;
use crate::models::{Decision, EmployeeRecord, LeaveRequest, RecipientRole, RecordId, StoredRecord};
use crate::store::LeaveStore;

use super::composer::compose;
use super::dispatcher::NotificationDispatcher;
use super::policy::evaluate;

/// Confirmation message returned for every stored request.
pub const ADDED_MESSAGE: &str = "Employee added";

/// Combined result of a handled request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveOutcome {
    /// Always [`ADDED_MESSAGE`].
    pub message: String,
    /// Identifier of the stored record.
    pub id: RecordId,
    /// The policy decision.
    pub decision: Decision,
    /// Caller-facing summary of the decision.
    pub agent_response: String,
    /// Whether the admin notification was accepted by the transport.
    pub admin_email_sent: bool,
    /// Whether the employee notification was accepted by the transport.
    pub employee_email_sent: bool,
}

/// Runs leave requests through the decision and notification pipeline.
#[derive(Clone)]
pub struct LeavePipeline {
    store: Arc<dyn LeaveStore>,
    dispatcher: NotificationDispatcher,
    admin_email: String,
    today: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl LeavePipeline {
    /// Creates a pipeline notifying `admin_email` for every request.
    pub fn new(
        store: Arc<dyn LeaveStore>,
        dispatcher: NotificationDispatcher,
        admin_email: impl Into<String>,
    ) -> Self {
        Self {
            store,
            dispatcher,
            admin_email: admin_email.into(),
            today: local_today,
        }
    }

    /// Replaces the clock used to date notification subjects.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// The configured admin recipient.
    pub fn admin_email(&self) -> &str {
        &self.admin_email
    }

    /// Handles one leave request end to end.
    pub async fn handle(&self, request: &LeaveRequest) -> PipelineResult<LeaveOutcome> {
        let record = EmployeeRecord::from_request(request).inspect_err(|err| {
            debug!(emp_id = %request.emp_id, error = %err, "Request failed validation");
        })?;

        let id = self
            .store
            .insert(record.clone())
            .await
            .inspect_err(|err| {
                warn!(emp_id = %record.emp_id, error = %err, "Persisting request failed");
            })?;
        debug!(id = %id, emp_id = %record.emp_id, "Request persisted");

        let decision = evaluate(record.is_on_probation, record.applied_leaves);
        debug!(
            id = %id,
            outcome = ?decision.outcome,
            rule = ?decision.rule,
            "Policy evaluated"
        );

        let today = (self.today)();
        let admin_message = compose(&record, &decision, RecipientRole::Admin, today);
        let employee_message = compose(&record, &decision, RecipientRole::Employee, today);

        let (admin, employee) = tokio::join!(
            self.dispatcher
                .dispatch(RecipientRole::Admin, &self.admin_email, &admin_message),
            self.dispatcher
                .dispatch(RecipientRole::Employee, &record.email, &employee_message),
        );

        info!(
            id = %id,
            emp_id = %record.emp_id,
            outcome = ?decision.outcome,
            admin_email_sent = admin.delivered,
            employee_email_sent = employee.delivered,
            "Leave request handled"
        );

        Ok(LeaveOutcome {
            message: ADDED_MESSAGE.to_string(),
            id,
            decision,
            agent_response: decision.summary().to_string(),
            admin_email_sent: admin.delivered,
            employee_email_sent: employee.delivered,
        })
    }

    /// Lists every stored record.
    pub async fn list(&self) -> PipelineResult<Vec<StoredRecord>> {
        Ok(self.store.find_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::error::PipelineError;
    use crate::models::Outcome;
    use crate::store::{InMemoryLeaveStore, StoreError};
    use crate::transport::{MailTransport, TransportError};

    const ADMIN: &str = "hr-admin@example.com";

    #[derive(Default)]
    struct RecordingTransport {
        failing: Vec<String>,
        sent: Mutex<Vec<(String, String)>>,
    }

    impl RecordingTransport {
        fn failing_for(address: &str) -> Self {
            Self {
                failing: vec![address.to_string()],
                ..Self::default()
            }
        }

        fn recipients(&self) -> Vec<String> {
            let mut to: Vec<String> = self
                .sent
                .lock()
                .unwrap()
                .iter()
                .map(|(to, _)| to.clone())
                .collect();
            to.sort();
            to
        }
    }

    #[async_trait]
    impl MailTransport for RecordingTransport {
        async fn send(&self, to: &str, subject: &str, _body: &str) -> Result<(), TransportError> {
            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), subject.to_string()));
            if self.failing.iter().any(|addr| addr == to) {
                return Err(TransportError::Connection("smtp refused".to_string()));
            }
            Ok(())
        }
    }

    struct UnavailableStore;

    #[async_trait]
    impl LeaveStore for UnavailableStore {
        async fn insert(&self, _record: EmployeeRecord) -> Result<RecordId, StoreError> {
            Err(StoreError::Unavailable("connection reset".to_string()))
        }

        async fn find_all(&self) -> Result<Vec<StoredRecord>, StoreError> {
            Err(StoreError::Unavailable("connection reset".to_string()))
        }
    }

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    fn pipeline(
        store: Arc<dyn LeaveStore>,
        transport: Arc<RecordingTransport>,
    ) -> LeavePipeline {
        let dispatcher = NotificationDispatcher::new(transport, Duration::from_secs(1));
        LeavePipeline::new(store, dispatcher, ADMIN).with_clock(fixed_today)
    }

    fn request(is_on_probation: bool, applied_leaves: u32) -> LeaveRequest {
        LeaveRequest {
            emp_id: "E007".to_string(),
            emp_name: "Ravi Iyer".to_string(),
            role: "QA".to_string(),
            dept: "Quality".to_string(),
            date_of_joining: "2025-01-15".to_string(),
            total_leaves: 12,
            applied_leaves,
            status: "active".to_string(),
            email: "ravi@example.com".to_string(),
            is_on_probation,
        }
    }

    #[tokio::test]
    async fn approved_request_is_stored_and_both_notified() {
        let store = Arc::new(InMemoryLeaveStore::new());
        let transport = Arc::new(RecordingTransport::default());
        let pipeline = pipeline(store.clone(), transport.clone());

        let outcome = pipeline.handle(&request(false, 2)).await.unwrap();

        assert_eq!(outcome.message, "Employee added");
        assert_eq!(outcome.decision.outcome, Outcome::AutoApproved);
        assert_eq!(outcome.agent_response, "Leave approved automatically.");
        assert!(outcome.admin_email_sent);
        assert!(outcome.employee_email_sent);
        assert_eq!(transport.recipients(), vec![ADMIN, "ravi@example.com"]);

        let stored = store.find_all().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, outcome.id);
    }

    #[tokio::test]
    async fn subjects_are_dated_and_labelled() {
        let transport = Arc::new(RecordingTransport::default());
        let pipeline = pipeline(Arc::new(InMemoryLeaveStore::new()), transport.clone());

        pipeline.handle(&request(true, 1)).await.unwrap();

        let mut subjects: Vec<String> = transport
            .sent
            .lock()
            .unwrap()
            .iter()
            .map(|(_, subject)| subject.clone())
            .collect();
        subjects.sort();
        assert_eq!(
            subjects,
            vec![
                "Leave Request Status | Ravi Iyer | 02 June 2025",
                "Leave Request | Ravi Iyer | 02 June 2025",
            ]
        );
    }

    #[tokio::test]
    async fn admin_failure_does_not_suppress_employee_notification() {
        let transport = Arc::new(RecordingTransport::failing_for(ADMIN));
        let pipeline = pipeline(Arc::new(InMemoryLeaveStore::new()), transport.clone());

        let outcome = pipeline.handle(&request(true, 3)).await.unwrap();

        assert_eq!(outcome.decision.outcome, Outcome::Escalated);
        assert!(!outcome.admin_email_sent);
        assert!(outcome.employee_email_sent);
        assert_eq!(transport.recipients().len(), 2);
    }

    #[tokio::test]
    async fn store_failure_prevents_any_dispatch() {
        let transport = Arc::new(RecordingTransport::default());
        let pipeline = pipeline(Arc::new(UnavailableStore), transport.clone());

        let result = pipeline.handle(&request(false, 1)).await;

        assert!(matches!(result, Err(PipelineError::Store(_))));
        assert!(transport.recipients().is_empty());
    }

    #[tokio::test]
    async fn invalid_date_skips_store_and_dispatch() {
        let store = Arc::new(InMemoryLeaveStore::new());
        let transport = Arc::new(RecordingTransport::default());
        let pipeline = pipeline(store.clone(), transport.clone());

        let mut bad = request(false, 1);
        bad.date_of_joining = "15-01-2025".to_string();

        let result = pipeline.handle(&bad).await;

        assert!(matches!(result, Err(PipelineError::InvalidDate { .. })));
        assert!(store.is_empty().await);
        assert!(transport.recipients().is_empty());
    }

    #[tokio::test]
    async fn list_surfaces_store_errors() {
        let pipeline = pipeline(
            Arc::new(UnavailableStore),
            Arc::new(RecordingTransport::default()),
        );
        assert!(matches!(
            pipeline.list().await,
            Err(PipelineError::Store(_))
        ));
    }
}
