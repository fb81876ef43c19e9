//! Park-side lookups
//!
//! Facts the validator needs but cannot compute itself: whether the buyer is
//! registered, whether the park opens on a date, and what day it is today.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::entities::UserId;

/// Registry of users allowed to buy tickets
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Check whether the user is registered
    async fn exists(&self, user_id: &UserId) -> bool;
}

/// Days on which the park accepts visitors
#[async_trait]
pub trait OpeningCalendar: Send + Sync {
    /// Check whether the park is open on the given date
    async fn is_open(&self, date: NaiveDate) -> bool;
}

/// Source of the current calendar date
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
