//! The leave decision and notification pipeline.
//!
//! Policy evaluation and composition are pure functions. The dispatcher
//! wraps the mail transport so that failures become delivery flags, and the
//! orchestrator sequences validation, persistence, evaluation and
//! notification for one request.

mod composer;
mod dispatcher;
mod orchestrator;
mod policy;

pub use composer::{SUBJECT_DATE_FORMAT, compose};
pub use dispatcher::NotificationDispatcher;
pub use orchestrator::{ADDED_MESSAGE, LeaveOutcome, LeavePipeline};
pub use policy::{PROBATION_MONTHLY_CAP, REGULAR_MONTHLY_CAP, evaluate};
