//! Purchase validation
//!
//! Checks run in a fixed order and stop at the first violation. The caller
//! supplies every fact that needs I/O, so this module stays pure.

use chrono::NaiveDate;

use crate::domain::entities::{PaymentMethod, PurchaseRequest};
use crate::error::RuleViolation;

/// Maximum number of tickets per purchase
pub const MAX_VISITORS: usize = 10;

/// Validate a purchase request
///
/// `today` is the current UTC date; visits earlier than it are rejected.
pub fn validate(
    request: &PurchaseRequest,
    user_exists: bool,
    park_open: bool,
    today: NaiveDate,
) -> Result<(), RuleViolation> {
    if !user_exists {
        return Err(RuleViolation::UnregisteredUser);
    }

    if request.visitors.is_empty() {
        return Err(RuleViolation::NoVisitors);
    }

    if request.visitors.len() > MAX_VISITORS {
        return Err(RuleViolation::TooManyVisitors);
    }

    if request.visitors.iter().any(|v| v.age < 0) {
        return Err(RuleViolation::InvalidAge);
    }

    if request.visit_date < today {
        return Err(RuleViolation::PastDate);
    }

    if !park_open {
        return Err(RuleViolation::ParkClosed);
    }

    if request.payment_method == PaymentMethod::Unspecified {
        return Err(RuleViolation::MissingPaymentMethod);
    }

    if request.buyer_email.trim().is_empty() {
        return Err(RuleViolation::MissingEmail);
    }

    Ok(())
}
