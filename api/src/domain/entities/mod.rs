//! Domain entities
//!
//! Pure domain models for the ticket purchase transaction.

pub mod purchase;
pub mod user;
pub mod visitor;

pub use purchase::{PaymentMethod, PurchaseRequest, PurchaseResult};
pub use user::UserId;
pub use visitor::{AgeBracket, PassType, Visitor};
