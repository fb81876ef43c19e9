//! Test utilities
//!
//! Hand-written port implementations and fixtures for unit tests.
//!
//! Mocks record what the service handed them (payment calls, sent emails) so
//! tests can assert on side effects as well as on the returned result.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
