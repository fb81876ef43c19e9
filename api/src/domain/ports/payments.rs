//! Payment port trait
//!
//! Card payments happen off-system: the gateway hands back a URL the buyer is
//! redirected to.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::error::PaymentError;

/// Starts an external payment flow
#[async_trait]
pub trait PaymentInitiator: Send + Sync {
    /// Create a payment for the amount and return the checkout redirect URL
    async fn create_payment(&self, amount: Decimal, currency: &str)
        -> Result<String, PaymentError>;
}
