//! Sandbox checkout gateway
//!
//! Issues a checkout redirect per payment without talking to a real processor.

use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::ports::PaymentInitiator;
use crate::error::PaymentError;

/// Default checkout location for the sandbox gateway
pub const DEFAULT_CHECKOUT_URL: &str = "https://sandbox.mercado-pago/checkout";

pub struct SandboxPaymentGateway {
    checkout_url: String,
}

impl SandboxPaymentGateway {
    pub fn new(checkout_url: String) -> Self {
        Self {
            checkout_url: checkout_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for SandboxPaymentGateway {
    fn default() -> Self {
        Self::new(DEFAULT_CHECKOUT_URL.to_string())
    }
}

#[async_trait]
impl PaymentInitiator for SandboxPaymentGateway {
    async fn create_payment(
        &self,
        amount: Decimal,
        currency: &str,
    ) -> Result<String, PaymentError> {
        if currency.trim().is_empty() {
            return Err(PaymentError::Gateway("currency is required".to_string()));
        }

        let preference_id = Uuid::new_v4().simple().to_string();
        tracing::debug!(%amount, currency, %preference_id, "Created sandbox payment");
        Ok(format!("{}/{}", self.checkout_url, preference_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn redirect_points_at_checkout() {
        let gateway = SandboxPaymentGateway::new("https://pay.test/checkout/".to_string());

        let url = gateway.create_payment(dec!(15000), "ARS").await.unwrap();

        let id = url.strip_prefix("https://pay.test/checkout/").unwrap();
        assert_eq!(id.len(), 32);
    }

    #[tokio::test]
    async fn each_payment_gets_its_own_redirect() {
        let gateway = SandboxPaymentGateway::default();

        let first = gateway.create_payment(dec!(5000), "ARS").await.unwrap();
        let second = gateway.create_payment(dec!(5000), "ARS").await.unwrap();

        assert!(first.starts_with(DEFAULT_CHECKOUT_URL));
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn blank_currency_is_rejected() {
        let gateway = SandboxPaymentGateway::default();

        let err = gateway.create_payment(dec!(5000), " ").await.unwrap_err();

        assert!(err.to_string().contains("currency"));
    }

    #[tokio::test]
    async fn zero_amount_still_redirects() {
        let gateway = SandboxPaymentGateway::default();
        assert!(gateway.create_payment(Decimal::ZERO, "ARS").await.is_ok());
    }
}
