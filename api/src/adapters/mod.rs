//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod mail;
pub mod park;
pub mod payments;

pub use mail::{ConsoleNotifier, SendGridNotifier};
pub use park::{InMemoryUserDirectory, SystemClock, WeekdayCalendar};
pub use payments::SandboxPaymentGateway;
