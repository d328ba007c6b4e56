//! FestReg Registration Platform
//!
//! Core platform providing:
//! - The fixed festival event catalog with per-event cardinality rules
//! - Submission validation (pure, collects every violation in one pass)
//! - MySQL persistence of accepted registrations
//! - REST API for registration intake

pub mod api;
pub mod domain;
pub mod error;
pub mod repository;

pub use domain::*;
pub use error::RegistrationError;
