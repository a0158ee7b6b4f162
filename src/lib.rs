//! Leave request decision and notification service.
//!
//! A submitted leave request is validated, stored, evaluated against a
//! probation-aware monthly cap, and announced by email to both the HR admin
//! and the employee. Notification delivery is best-effort: the response
//! reports each recipient's delivery separately and never fails because of
//! it.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod store;
pub mod telemetry;
pub mod transport;
