//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod tickets;

pub use tickets::purchase_tickets;
