//! Domain Layer
//!
//! The fixed event catalog and the submission validator.

pub mod catalog;
pub mod validator;

pub use catalog::{CardinalityRule, EventField, CARDINALITY_RULES, EVENT_FIELDS};
pub use validator::{validate, CollegeIdentity, ParticipantEntry, Registration};
