//! Submission Validator
//!
//! Pure validation of a raw JSON submission against the event catalog.
//! Every check runs unconditionally so the caller gets the complete
//! violation list in one round trip instead of one error per resubmission.

use serde_json::{Map, Value};

use super::catalog::{CARDINALITY_RULES, EVENT_FIELDS};

/// College identity fields, trimmed and verified non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollegeIdentity {
    pub college_name: String,
    pub coordinator_name: String,
    pub coordinator_contact: String,
}

/// One accepted participant slot: the event it belongs to and the trimmed
/// name that was submitted for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantEntry {
    pub event_name: &'static str,
    pub participant_name: String,
}

/// A submission that passed validation, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub college: CollegeIdentity,
    pub participants: Vec<ParticipantEntry>,
}

/// Validate a raw submission.
///
/// Returns the normalized registration, or the full ordered list of
/// violation messages: identity-field errors first, then the cardinality
/// rules in check order. Unknown submission keys are ignored.
pub fn validate(submission: &Map<String, Value>) -> Result<Registration, Vec<String>> {
    let mut errors = Vec::new();

    let college_name = text_field(submission, "collegeName");
    let coordinator_name = text_field(submission, "coordinatorName");
    let coordinator_contact = text_field(submission, "coordinatorContact");

    if college_name.is_empty() {
        errors.push("collegeName is required".to_string());
    }
    if coordinator_name.is_empty() {
        errors.push("coordinatorName is required".to_string());
    }
    if !is_valid_contact(&coordinator_contact) {
        errors.push("coordinatorContact must be a valid 10-digit number".to_string());
    }

    let mut participants = Vec::new();
    for field in EVENT_FIELDS {
        let participant_name = text_field(submission, field.key);
        if !participant_name.is_empty() {
            participants.push(ParticipantEntry {
                event_name: field.event_name,
                participant_name,
            });
        }
    }

    for rule in CARDINALITY_RULES {
        let count = participants
            .iter()
            .filter(|p| p.event_name == rule.event_name)
            .count();
        if !rule.is_satisfied_by(count) {
            errors.push(rule.violation_message(count));
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Registration {
        college: CollegeIdentity {
            college_name,
            coordinator_name,
            coordinator_contact,
        },
        participants,
    })
}

/// Coerce-to-string-or-empty, applied uniformly to every field read so the
/// contract is total over any JSON value shape. Missing keys and nulls read
/// as empty; non-string values read as their JSON text. Always trimmed.
fn text_field(submission: &Map<String, Value>, key: &str) -> String {
    match submission.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => other.to_string().trim().to_string(),
    }
}

/// Exactly 10 ASCII decimal digits. Empty strings fail the length check.
fn is_valid_contact(contact: &str) -> bool {
    contact.len() == 10 && contact.bytes().all(|b| b.is_ascii_digit())
}
