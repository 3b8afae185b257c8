//! Domain models for persisted counter records.

use chrono::{DateTime, Utc};

/// A named scalar value persisted as text.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterRecord {
    /// Record name, e.g. `last_reset_at`.
    pub name: String,
    /// Text-encoded value, parsed by the counter store.
    pub value: String,
    /// Timestamp of the last write.
    pub updated_at: DateTime<Utc>,
}

impl CounterRecord {
    /// Converts an entity model to a counter record domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `CounterRecord` - The converted domain model
    pub fn from_entity(entity: entity::counter_record::Model) -> Self {
        Self {
            name: entity.name,
            value: entity.value,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for creating or overwriting a counter record.
#[derive(Debug, Clone)]
pub struct UpsertCounterRecordParam {
    /// Record name to write.
    pub name: String,
    /// Text-encoded value to store.
    pub value: String,
}
