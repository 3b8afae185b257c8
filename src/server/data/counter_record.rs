//! Counter record data repository for database operations.
//!
//! The counter persists two scalars (the reset timestamp and the display message id)
//! as rows of the `counter_record` table. This repository only moves text in and out;
//! parsing and self-healing of malformed values live in the counter store service.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::counter_record::{CounterRecord, UpsertCounterRecordParam};

/// Repository providing database operations for counter records.
pub struct CounterRecordRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CounterRecordRepository<'a> {
    /// Creates a new CounterRecordRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CounterRecordRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a counter record by name.
    ///
    /// # Arguments
    /// - `name` - Record name
    ///
    /// # Returns
    /// - `Ok(Some(CounterRecord))` - Record exists
    /// - `Ok(None)` - Record was never written
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_name(&self, name: &str) -> Result<Option<CounterRecord>, DbErr> {
        let entity = entity::prelude::CounterRecord::find_by_id(name.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(CounterRecord::from_entity))
    }

    /// Creates or overwrites a counter record.
    ///
    /// Updates the value and `updated_at` of an existing record, otherwise inserts a
    /// new one.
    ///
    /// # Arguments
    /// - `param` - Record name and text-encoded value
    ///
    /// # Returns
    /// - `Ok(CounterRecord)` - The stored record
    /// - `Err(DbErr)` - Database error during upsert operation
    pub async fn upsert(&self, param: UpsertCounterRecordParam) -> Result<CounterRecord, DbErr> {
        let existing = entity::prelude::CounterRecord::find_by_id(param.name.clone())
            .one(self.db)
            .await?;

        let now = Utc::now();

        let entity = if let Some(existing) = existing {
            let mut active: entity::counter_record::ActiveModel = existing.into();
            active.value = ActiveValue::Set(param.value);
            active.updated_at = ActiveValue::Set(now);
            active.update(self.db).await?
        } else {
            let new_record = entity::counter_record::ActiveModel {
                name: ActiveValue::Set(param.name),
                value: ActiveValue::Set(param.value),
                updated_at: ActiveValue::Set(now),
            };
            new_record.insert(self.db).await?
        };

        Ok(CounterRecord::from_entity(entity))
    }
}
