//! Weekday-based opening calendar and the system clock

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, Utc, Weekday};

use crate::domain::ports::{Clock, OpeningCalendar};

/// Wednesday through Sunday
pub const DEFAULT_OPEN_DAYS: [Weekday; 5] = [
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Park open on a fixed set of weekdays, every week
#[derive(Debug, Clone)]
pub struct WeekdayCalendar {
    open_days: Vec<Weekday>,
}

impl WeekdayCalendar {
    pub fn new(open_days: impl IntoIterator<Item = Weekday>) -> Self {
        let mut open_days: Vec<Weekday> = open_days.into_iter().collect();
        open_days.sort_by_key(|d| d.num_days_from_monday());
        open_days.dedup();
        Self { open_days }
    }

    pub fn open_days(&self) -> &[Weekday] {
        &self.open_days
    }
}

impl Default for WeekdayCalendar {
    fn default() -> Self {
        Self::new(DEFAULT_OPEN_DAYS)
    }
}

#[async_trait]
impl OpeningCalendar for WeekdayCalendar {
    async fn is_open(&self, date: NaiveDate) -> bool {
        self.open_days.contains(&date.weekday())
    }
}

/// Current date in UTC
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}
