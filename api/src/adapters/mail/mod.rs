//! Mail adapters
//!
//! Notifier implementations: SendGrid for real delivery, console for local runs.

pub mod console;
pub mod sendgrid;

pub use console::ConsoleNotifier;
pub use sendgrid::SendGridNotifier;
