//! API Layer
//!
//! REST endpoints for registration intake.

pub mod common;
pub mod openapi;
pub mod registrations;

pub use common::*;
pub use openapi::RegistrationApiDoc;
pub use registrations::{registrations_router, RegistrationsState};
