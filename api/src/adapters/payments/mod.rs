//! Payment adapters

pub mod sandbox;

pub use sandbox::SandboxPaymentGateway;
