//! Probation-aware leave policy.
//!
//! Probation employees may take 1 leave per month, everyone else 2. A
//! request within the cap is approved automatically; anything else goes to
//! the manager.

use crate::models::{Decision, Outcome, PolicyRule};

/// Monthly cap for employees on probation.
pub const PROBATION_MONTHLY_CAP: u32 = 1;

/// Monthly cap for regular employees.
pub const REGULAR_MONTHLY_CAP: u32 = 2;

/// Evaluates a request against the leave policy.
///
/// On probation the request is approved only when exactly one leave is
/// applied for. Otherwise it is approved when it stays within the regular
/// cap.
///
/// # Examples
///
/// ```
/// use leave_desk::models::{Outcome, PolicyRule};
/// use leave_desk::pipeline::evaluate;
///
/// let decision = evaluate(true, 3);
/// assert_eq!(decision.outcome, Outcome::Escalated);
/// assert_eq!(decision.rule, PolicyRule::Probation);
/// assert_eq!(decision.monthly_cap, 1);
///
/// assert_eq!(evaluate(false, 2).outcome, Outcome::AutoApproved);
/// ```
pub fn evaluate(is_on_probation: bool, applied_leaves: u32) -> Decision {
    let (rule, monthly_cap, within_cap) = if is_on_probation {
        (
            PolicyRule::Probation,
            PROBATION_MONTHLY_CAP,
            applied_leaves == PROBATION_MONTHLY_CAP,
        )
    } else {
        (
            PolicyRule::Regular,
            REGULAR_MONTHLY_CAP,
            applied_leaves <= REGULAR_MONTHLY_CAP,
        )
    };

    let outcome = if within_cap {
        Outcome::AutoApproved
    } else {
        Outcome::Escalated
    };

    Decision {
        outcome,
        rule,
        monthly_cap,
    }
}
