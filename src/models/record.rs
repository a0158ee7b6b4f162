//! Persisted leave records.
//!
//! An [`EmployeeRecord`] is a validated [`LeaveRequest`] with its join date
//! normalized to a calendar date. The store assigns a [`RecordId`] on insert,
//! producing a [`StoredRecord`].

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PipelineResult;

use super::leave_request::LeaveRequest;

/// Store-assigned record identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub Uuid);

impl RecordId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated request ready for insertion.
///
/// `date_of_joining` serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Employee identifier.
    pub emp_id: String,
    /// Employee display name.
    pub emp_name: String,
    /// Job role.
    pub role: String,
    /// Department.
    pub dept: String,
    /// Normalized join date.
    pub date_of_joining: NaiveDate,
    /// Total leave allowance.
    pub total_leaves: u32,
    /// Leaves applied for.
    pub applied_leaves: u32,
    /// Employment status.
    pub status: String,
    /// Employee email address.
    pub email: String,
    /// Probation flag.
    pub is_on_probation: bool,
}

impl EmployeeRecord {
    /// Validates `request` and normalizes its join date.
    ///
    /// The date is checked first so a malformed date is reported even when
    /// other fields are also wrong.
    pub fn from_request(request: &LeaveRequest) -> PipelineResult<Self> {
        let date_of_joining = request.join_date()?;
        request.validate_fields()?;

        Ok(Self {
            emp_id: request.emp_id.trim().to_string(),
            emp_name: request.emp_name.trim().to_string(),
            role: request.role.clone(),
            dept: request.dept.clone(),
            date_of_joining,
            total_leaves: request.total_leaves,
            applied_leaves: request.applied_leaves,
            status: request.status.clone(),
            email: request.email.clone(),
            is_on_probation: request.is_on_probation,
        })
    }
}

/// A record as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    /// Store-assigned identifier.
    pub id: RecordId,
    /// The persisted fields.
    #[serde(flatten)]
    pub record: EmployeeRecord,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;

    fn create_test_request(date: &str) -> LeaveRequest {
        LeaveRequest {
            emp_id: " E001 ".to_string(),
            emp_name: "Asha Rao".to_string(),
            role: "Engineer".to_string(),
            dept: "Platform".to_string(),
            date_of_joining: date.to_string(),
            total_leaves: 12,
            applied_leaves: 1,
            status: "active".to_string(),
            email: "asha@example.com".to_string(),
            is_on_probation: true,
        }
    }

    #[test]
    fn test_from_request_normalizes_date_and_id() {
        let record = EmployeeRecord::from_request(&create_test_request("2024-03-18")).unwrap();
        assert_eq!(
            record.date_of_joining,
            NaiveDate::from_ymd_opt(2024, 3, 18).unwrap()
        );
        assert_eq!(record.emp_id, "E001");
        assert!(record.is_on_probation);
    }

    #[test]
    fn test_from_request_reports_date_before_other_fields() {
        let mut request = create_test_request("03/18/2024");
        request.email = "not-an-email".to_string();

        assert!(matches!(
            EmployeeRecord::from_request(&request),
            Err(PipelineError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_stored_record_renders_join_date_as_submitted() {
        let stored = StoredRecord {
            id: RecordId::new(),
            record: EmployeeRecord::from_request(&create_test_request("2019-07-04")).unwrap(),
        };

        let json = serde_json::to_value(&stored).unwrap();
        assert_eq!(json["date_of_joining"], "2019-07-04");
        assert_eq!(json["id"], stored.id.to_string());
        assert_eq!(json["emp_name"], "Asha Rao");
    }
}
