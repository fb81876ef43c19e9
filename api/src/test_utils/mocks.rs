//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They record calls so tests can verify which side effects happened.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::{Arc, RwLock};

use crate::domain::entities::UserId;
use crate::domain::ports::{Clock, Notifier, OpeningCalendar, PaymentInitiator, UserDirectory};
use crate::error::{NotificationError, PaymentError};

/// Redirect URL returned by a non-failing `MockPaymentGateway`
pub const TEST_REDIRECT_URL: &str = "https://sandbox.mercado-pago/checkout/xyz789";

// ============================================================================
// User Directory
// ============================================================================

pub struct MockUserDirectory {
    exists: bool,
}

impl MockUserDirectory {
    pub fn registered() -> Self {
        Self { exists: true }
    }

    pub fn unregistered() -> Self {
        Self { exists: false }
    }
}

#[async_trait]
impl UserDirectory for MockUserDirectory {
    async fn exists(&self, _user_id: &UserId) -> bool {
        self.exists
    }
}

// ============================================================================
// Calendar & Clock
// ============================================================================

pub struct MockCalendar {
    open: bool,
}

impl MockCalendar {
    pub fn open() -> Self {
        Self { open: true }
    }

    pub fn closed() -> Self {
        Self { open: false }
    }
}

#[async_trait]
impl OpeningCalendar for MockCalendar {
    async fn is_open(&self, _date: NaiveDate) -> bool {
        self.open
    }
}

pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

// ============================================================================
// Payment Gateway
// ============================================================================

/// A mock payment gateway that records every payment it is asked to create
#[derive(Default)]
pub struct MockPaymentGateway {
    pub should_fail: bool,
    calls: Arc<RwLock<Vec<(Decimal, String)>>>,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(Decimal, String)> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl PaymentInitiator for MockPaymentGateway {
    async fn create_payment(
        &self,
        amount: Decimal,
        currency: &str,
    ) -> Result<String, PaymentError> {
        self.calls
            .write()
            .unwrap()
            .push((amount, currency.to_string()));

        if self.should_fail {
            return Err(PaymentError::Gateway("gateway unavailable".to_string()));
        }
        Ok(TEST_REDIRECT_URL.to_string())
    }
}

// ============================================================================
// Notifier
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// A notifier that keeps every message instead of delivering it
#[derive(Default)]
pub struct RecordingNotifier {
    pub should_fail: bool,
    sent: Arc<RwLock<Vec<SentMessage>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.read().unwrap().clone()
    }

    /// Wait until `count` messages were sent by background tasks
    pub async fn wait_for(&self, count: usize) -> Vec<SentMessage> {
        let poll = async {
            while self.sent.read().unwrap().len() < count {
                tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            }
        };
        tokio::time::timeout(std::time::Duration::from_secs(2), poll)
            .await
            .expect("confirmation email was not sent in time");
        self.sent()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), NotificationError> {
        self.sent.write().unwrap().push(SentMessage {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });

        if self.should_fail {
            return Err(NotificationError::Api {
                status: 503,
                message: "mail service unavailable".to_string(),
            });
        }
        Ok(())
    }
}

/// Notifier whose send never completes
pub struct HangingNotifier;

#[async_trait]
impl Notifier for HangingNotifier {
    async fn send(&self, _to: &str, _subject: &str, _body: &str) -> Result<(), NotificationError> {
        std::future::pending().await
    }
}
