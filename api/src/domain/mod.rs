//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models for the purchase transaction
//! - `ports`: Trait definitions for external collaborators
//! - `pricing`: Per-visitor ticket prices
//! - `rules`: Purchase validation rules

pub mod entities;
pub mod ports;
pub mod pricing;
pub mod rules;
