//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{Days, NaiveDate};
use uuid::Uuid;

use crate::domain::entities::{PassType, PaymentMethod, PurchaseRequest, UserId, Visitor};

/// "Today" as seen by services built with `FixedClock(test_today())`
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

/// A valid request for `qty` adults with Regular passes, visiting tomorrow
pub fn test_request(method: PaymentMethod, qty: usize) -> PurchaseRequest {
    PurchaseRequest {
        user_id: UserId(Uuid::new_v4()),
        visit_date: test_today() + Days::new(1),
        visitors: (0..qty)
            .map(|_| Visitor::new(25, PassType::Regular))
            .collect(),
        payment_method: method,
        buyer_email: "test@buyer.com".to_string(),
        currency: "ARS".to_string(),
    }
}

/// JSON body for `POST /tickets/purchase`
pub fn test_request_json(method: PaymentMethod, qty: usize) -> serde_json::Value {
    serde_json::to_value(test_request(method, qty)).unwrap()
}
