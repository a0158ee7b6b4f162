//! Core data models for the leave pipeline.
//!
//! This module contains the domain models shared by the pipeline, the store
//! and the HTTP layer.

mod decision;
mod leave_request;
mod notification;
mod record;

pub use decision::{Decision, Outcome, PolicyRule};
pub use leave_request::{DEFAULT_TOTAL_LEAVES, JOIN_DATE_FORMAT, LeaveRequest, is_email_address};
pub use notification::{ComposedMessage, NotificationResult, RecipientRole};
pub use record::{EmployeeRecord, RecordId, StoredRecord};
