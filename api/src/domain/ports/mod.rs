//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod notifications;
pub mod park;
pub mod payments;

pub use notifications::Notifier;
pub use park::{Clock, OpeningCalendar, UserDirectory};
pub use payments::PaymentInitiator;
