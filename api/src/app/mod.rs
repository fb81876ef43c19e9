//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain rules, ports, and external systems.

pub mod confirmation;
pub mod ticketing_service;

pub use ticketing_service::TicketingService;
