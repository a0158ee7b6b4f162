//! Leave request model.
//!
//! This module defines the [`LeaveRequest`] accepted at the API boundary and
//! the checks that turn it into something the pipeline can persist.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, PipelineResult};

/// Wire format of the join date.
pub const JOIN_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default yearly leave allowance.
pub const DEFAULT_TOTAL_LEAVES: u32 = 12;

fn default_total_leaves() -> u32 {
    DEFAULT_TOTAL_LEAVES
}

/// A leave request submitted for an employee.
///
/// Field names match the JSON wire format. The join date is kept as the
/// submitted string; [`LeaveRequest::join_date`] parses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Employee identifier, as issued by HR.
    pub emp_id: String,
    /// Employee display name.
    pub emp_name: String,
    /// Job role.
    pub role: String,
    /// Department.
    pub dept: String,
    /// Join date in `YYYY-MM-DD` form.
    pub date_of_joining: String,
    /// Total leave allowance.
    #[serde(default = "default_total_leaves")]
    pub total_leaves: u32,
    /// Leaves applied for in this request.
    pub applied_leaves: u32,
    /// Free-form employment status (e.g. "active").
    pub status: String,
    /// Address the employee notification is sent to.
    pub email: String,
    /// Whether the employee is still on probation.
    #[serde(default)]
    pub is_on_probation: bool,
}

impl LeaveRequest {
    /// Parses the join date.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_desk::models::LeaveRequest;
    /// use chrono::NaiveDate;
    ///
    /// let request: LeaveRequest = serde_json::from_str(r#"{
    ///     "emp_id": "E001", "emp_name": "Asha", "role": "Engineer",
    ///     "dept": "Platform", "date_of_joining": "2024-03-18",
    ///     "applied_leaves": 1, "status": "active", "email": "asha@example.com"
    /// }"#).unwrap();
    ///
    /// assert_eq!(request.join_date().unwrap(), NaiveDate::from_ymd_opt(2024, 3, 18).unwrap());
    /// assert_eq!(request.total_leaves, 12);
    /// assert!(!request.is_on_probation);
    /// ```
    pub fn join_date(&self) -> PipelineResult<NaiveDate> {
        let invalid = || PipelineError::InvalidDate {
            value: self.date_of_joining.clone(),
        };

        // chrono accepts unpadded fields; only the canonical rendering reads back unchanged.
        let date = NaiveDate::parse_from_str(&self.date_of_joining, JOIN_DATE_FORMAT)
            .map_err(|_| invalid())?;
        if date.format(JOIN_DATE_FORMAT).to_string() != self.date_of_joining {
            return Err(invalid());
        }
        Ok(date)
    }

    /// Checks required text fields and the email address shape.
    pub fn validate_fields(&self) -> PipelineResult<()> {
        let required = [
            ("emp_id", &self.emp_id),
            ("emp_name", &self.emp_name),
            ("role", &self.role),
            ("dept", &self.dept),
            ("status", &self.status),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(PipelineError::InvalidField {
                    field: field.to_string(),
                    message: "must not be blank".to_string(),
                });
            }
        }

        if !is_email_address(&self.email) {
            return Err(PipelineError::InvalidField {
                field: "email".to_string(),
                message: format!("'{}' is not a valid email address", self.email),
            });
        }

        Ok(())
    }
}

/// Loose mailbox check: one `@`, a non-empty local part and a dotted domain.
pub fn is_email_address(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}
