//! Festival Event Catalog
//!
//! The fixed table of submission field keys and the per-event cardinality
//! rules. Both tables are compile-time constants: never mutated, safe for
//! unsynchronized concurrent reads from any number of requests.

/// One participant slot within an event.
///
/// `key` is the inbound submission key; several keys may share one
/// `event_name` (the multi-slot events, e.g. Dance and Mad Ad).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventField {
    pub key: &'static str,
    pub event_name: &'static str,
}

const fn field(key: &'static str, event_name: &'static str) -> EventField {
    EventField { key, event_name }
}

/// Event field definitions, order preserved.
pub const EVENT_FIELDS: &[EventField] = &[
    field("dance1", "Dance"),
    field("dance2", "Dance"),
    field("dance3", "Dance"),
    field("dance4", "Dance"),
    field("dance5", "Dance"),
    field("dance6", "Dance"),
    field("dance7", "Dance"),
    field("mockPress", "Mock Press"),
    field("quiz1", "Quiz"),
    field("quiz2", "Quiz"),
    field("treasureHunt", "Treasure Hunt"),
    field("madAd1", "Mad Ad"),
    field("madAd2", "Mad Ad"),
    field("madAd3", "Mad Ad"),
    field("madAd4", "Mad Ad"),
    field("madAd5", "Mad Ad"),
    field("madAd6", "Mad Ad"),
    field("marketing1", "Marketing"),
    field("marketing2", "Marketing"),
    field("bottleArt", "Bottle Art"),
    field("motorMouth", "Motor Mouth"),
    field("bestManager", "Best Manager"),
    field("sharkTank1", "Shark Tank"),
    field("sharkTank2", "Shark Tank"),
    field("mockCid1", "Mock CID"),
    field("mockCid2", "Mock CID"),
    field("reelsMaking", "Reels Making"),
];

/// Required participant count for one event. Exact-count events have
/// `min == max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardinalityRule {
    pub event_name: &'static str,
    pub min: usize,
    pub max: usize,
}

const fn rule(event_name: &'static str, min: usize, max: usize) -> CardinalityRule {
    CardinalityRule { event_name, min, max }
}

/// Cardinality rules, in check order: the range-counted Dance, then Mad Ad,
/// then the exact-count events in catalog order.
pub const CARDINALITY_RULES: &[CardinalityRule] = &[
    rule("Dance", 5, 7),
    rule("Mad Ad", 6, 6),
    rule("Mock Press", 1, 1),
    rule("Quiz", 2, 2),
    rule("Treasure Hunt", 1, 1),
    rule("Marketing", 2, 2),
    rule("Bottle Art", 1, 1),
    rule("Motor Mouth", 1, 1),
    rule("Best Manager", 1, 1),
    rule("Shark Tank", 2, 2),
    rule("Mock CID", 2, 2),
    rule("Reels Making", 1, 1),
];

impl CardinalityRule {
    pub fn is_satisfied_by(&self, count: usize) -> bool {
        self.min <= count && count <= self.max
    }

    /// Human-readable violation message with the actual count embedded.
    pub fn violation_message(&self, count: usize) -> String {
        if self.min == self.max {
            let noun = if self.min == 1 { "participant" } else { "participants" };
            format!(
                "{} must have exactly {} {} (got {})",
                self.event_name, self.min, noun, count
            )
        } else {
            format!(
                "{} must have between {} and {} participants (got {})",
                self.event_name, self.min, self.max, count
            )
        }
    }
}
