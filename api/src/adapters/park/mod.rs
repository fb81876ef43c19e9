//! Park adapters
//!
//! Local implementations of the user directory, opening calendar and clock.

pub mod calendar;
pub mod users;

pub use calendar::{SystemClock, WeekdayCalendar};
pub use users::InMemoryUserDirectory;
