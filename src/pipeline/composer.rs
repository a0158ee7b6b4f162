//! Notification composition.
//!
//! Admin and employee receive the same body; only the subject label depends
//! on the recipient. Everything that varies in the body comes from the
//! [`Decision`].

use chrono::NaiveDate;

use crate::models::{ComposedMessage, Decision, EmployeeRecord, RecipientRole};

/// Date format used in subjects, e.g. `05 March 2025`.
pub const SUBJECT_DATE_FORMAT: &str = "%d %B %Y";

/// Renders the subject and body for one recipient.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use leave_desk::models::{EmployeeRecord, RecipientRole};
/// use leave_desk::pipeline::{compose, evaluate};
///
/// let record = EmployeeRecord {
///     emp_id: "E001".to_string(),
///     emp_name: "Asha Rao".to_string(),
///     role: "Engineer".to_string(),
///     dept: "Platform".to_string(),
///     date_of_joining: NaiveDate::from_ymd_opt(2024, 3, 18).unwrap(),
///     total_leaves: 12,
///     applied_leaves: 5,
///     status: "active".to_string(),
///     email: "asha@example.com".to_string(),
///     is_on_probation: false,
/// };
/// let today = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
///
/// let message = compose(&record, &evaluate(false, 5), RecipientRole::Admin, today);
/// assert_eq!(message.subject, "Leave Request | Asha Rao | 05 March 2025");
/// assert!(message.body.contains("Policy Note      : 2 leaves per month"));
/// ```
pub fn compose(
    record: &EmployeeRecord,
    decision: &Decision,
    role: RecipientRole,
    date: NaiveDate,
) -> ComposedMessage {
    let subject = format!(
        "{} | {} | {}",
        role.subject_label(),
        record.emp_name,
        date.format(SUBJECT_DATE_FORMAT)
    );

    ComposedMessage {
        subject,
        body: render_body(record, decision),
    }
}

fn render_body(record: &EmployeeRecord, decision: &Decision) -> String {
    let headline = if decision.is_approved() {
        "Your leave request has been successfully approved as per company policy."
    } else {
        "Your leave request has been notified to your manager."
    };

    let mut lines = vec![
        format!("Dear {},", record.emp_name),
        String::new(),
        headline.to_string(),
        String::new(),
        "Leave Summary:".to_string(),
        summary_line("Employee ID", &record.emp_id),
        summary_line("Department", &record.dept),
        summary_line("Role", &record.role),
        summary_line("Leaves Applied", &record.applied_leaves.to_string()),
        summary_line("Total Leaves", &record.total_leaves.to_string()),
        summary_line("Status", decision.status_label()),
        summary_line("Employee Type", decision.rule.employee_type()),
    ];

    if let Some(note) = decision.policy_note() {
        lines.push(summary_line("Policy Note", note));
    }

    lines.extend([
        String::new(),
        "Wishing you a restful time off. Please reach out if any changes are required.".to_string(),
        String::new(),
        "Warm regards,".to_string(),
        "HR Department".to_string(),
    ]);

    lines.join("\n")
}

fn summary_line(label: &str, value: &str) -> String {
    format!("- {label:<16} : {value}")
}
