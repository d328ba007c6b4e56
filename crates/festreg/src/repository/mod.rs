//! Repository Layer
//!
//! MySQL persistence for accepted registrations.

pub mod registration;

pub use registration::{MySqlRegistrationRepository, RegistrationReceipt};
