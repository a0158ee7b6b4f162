//! Notification types.

use serde::{Deserialize, Serialize};

/// Who a notification is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipientRole {
    /// The configured HR admin mailbox.
    Admin,
    /// The employee who submitted the request.
    Employee,
}

impl RecipientRole {
    /// Fixed subject label for this recipient.
    pub fn subject_label(&self) -> &'static str {
        match self {
            RecipientRole::Admin => "Leave Request",
            RecipientRole::Employee => "Leave Request Status",
        }
    }
}

/// A rendered email ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedMessage {
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

/// Delivery outcome for one recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationResult {
    /// The recipient this result is for.
    pub role: RecipientRole,
    /// Whether the transport accepted the message.
    pub delivered: bool,
}
