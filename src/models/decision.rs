//! Policy decision types.

use serde::{Deserialize, Serialize};

/// Whether a request was resolved automatically or needs a manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Within the applicable monthly cap.
    AutoApproved,
    /// Over the cap; forwarded to the manager.
    Escalated,
}

/// Which policy branch applied to the employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyRule {
    /// Employee is on probation: cap of 1 per month.
    Probation,
    /// Any other employee: cap of 2 per month.
    Regular,
}

impl PolicyRule {
    /// Label used in notifications.
    pub fn employee_type(&self) -> &'static str {
        match self {
            PolicyRule::Probation => "Probation",
            PolicyRule::Regular => "Regular",
        }
    }

    /// Short statement of the cap, used for the policy note.
    pub fn cap_note(&self) -> &'static str {
        match self {
            PolicyRule::Probation => "1 leave per month",
            PolicyRule::Regular => "2 leaves per month",
        }
    }

    /// Rationale attached to escalations.
    pub fn rationale(&self) -> &'static str {
        match self {
            PolicyRule::Probation => "probation cap = 1/month",
            PolicyRule::Regular => "regular cap = 2/month",
        }
    }
}

/// Result of evaluating a request against the leave policy.
///
/// Escalations serialize with a `rationale` naming the cap that was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "DecisionBody")]
pub struct Decision {
    /// Approved or escalated.
    pub outcome: Outcome,
    /// The branch that was applied.
    pub rule: PolicyRule,
    /// Leaves per month allowed under `rule`.
    pub monthly_cap: u32,
}

impl Decision {
    /// Returns true when no manager action is needed.
    pub fn is_approved(&self) -> bool {
        self.outcome == Outcome::AutoApproved
    }

    /// Status line shown in notifications.
    pub fn status_label(&self) -> &'static str {
        match self.outcome {
            Outcome::AutoApproved => "Approved",
            Outcome::Escalated => "Pending Manager Approval",
        }
    }

    /// Why the request was escalated; `None` when approved.
    pub fn rationale(&self) -> Option<&'static str> {
        match self.outcome {
            Outcome::AutoApproved => None,
            Outcome::Escalated => Some(self.rule.rationale()),
        }
    }

    /// The cap note, present only for escalations.
    pub fn policy_note(&self) -> Option<&'static str> {
        match self.outcome {
            Outcome::AutoApproved => None,
            Outcome::Escalated => Some(self.rule.cap_note()),
        }
    }

    /// Caller-facing summary returned as `agent_response`.
    pub fn summary(&self) -> &'static str {
        match (self.outcome, self.rule) {
            (Outcome::AutoApproved, _) => "Leave approved automatically.",
            (Outcome::Escalated, PolicyRule::Probation) => {
                "Your leave request has been notified to your manager. Note: Probation employees are allowed only 1 leave per month."
            }
            (Outcome::Escalated, PolicyRule::Regular) => {
                "Your leave request has been notified to your manager. Note: Regular employees are allowed up to 2 leaves per month."
            }
        }
    }
}

#[derive(Serialize)]
struct DecisionBody {
    outcome: Outcome,
    rule: PolicyRule,
    monthly_cap: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    rationale: Option<&'static str>,
}

impl From<Decision> for DecisionBody {
    fn from(decision: Decision) -> Self {
        Self {
            outcome: decision.outcome,
            rule: decision.rule,
            monthly_cap: decision.monthly_cap,
            rationale: decision.rationale(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decision(outcome: Outcome, rule: PolicyRule) -> Decision {
        Decision {
            outcome,
            rule,
            monthly_cap: match rule {
                PolicyRule::Probation => 1,
                PolicyRule::Regular => 2,
            },
        }
    }

    #[test]
    fn test_policy_note_only_for_escalations() {
        assert_eq!(
            decision(Outcome::AutoApproved, PolicyRule::Regular).policy_note(),
            None
        );
        assert_eq!(
            decision(Outcome::Escalated, PolicyRule::Probation).policy_note(),
            Some("1 leave per month")
        );
        assert_eq!(
            decision(Outcome::Escalated, PolicyRule::Regular).policy_note(),
            Some("2 leaves per month")
        );
    }

    #[test]
    fn test_summary_mentions_cap_on_escalation() {
        let summary = decision(Outcome::Escalated, PolicyRule::Probation).summary();
        assert!(summary.contains("only 1 leave per month"));
        assert_eq!(
            decision(Outcome::AutoApproved, PolicyRule::Probation).summary(),
            "Leave approved automatically."
        );
    }

    #[test]
    fn test_decision_serializes_snake_case() {
        let json = serde_json::to_value(decision(Outcome::AutoApproved, PolicyRule::Regular))
            .unwrap();
        assert_eq!(json["outcome"], "auto_approved");
        assert_eq!(json["rule"], "regular");
        assert_eq!(json["monthly_cap"], 2);
        assert!(json.get("rationale").is_none());
    }

    #[test]
    fn test_escalation_serializes_rationale() {
        let escalated = decision(Outcome::Escalated, PolicyRule::Probation);
        let json = serde_json::to_value(escalated).unwrap();
        assert_eq!(json["outcome"], "escalated");
        assert_eq!(json["rationale"], "probation cap = 1/month");

        let parsed: Decision = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, escalated);
    }
}
