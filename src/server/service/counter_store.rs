//! Persistent counter store.
//!
//! Reads and writes the two scalars the counter survives restarts with: the reset
//! timestamp and the display message id. Missing or malformed values never surface as
//! errors; they heal to "now" and "no message" respectively. The store does no locking
//! of its own, callers hold the `AppContext` session lock around every write.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::counter_record::CounterRecordRepository,
    error::AppError,
    model::counter_record::UpsertCounterRecordParam,
    util::{clock::Clock, parse::parse_u64_from_string},
};

/// Record name of the last reset timestamp.
pub const LAST_RESET_AT: &str = "last_reset_at";
/// Record name of the display message id.
pub const DISPLAY_MESSAGE_ID: &str = "display_message_id";

pub struct CounterStore<'a> {
    db: &'a DatabaseConnection,
    clock: &'a dyn Clock,
}

impl<'a> CounterStore<'a> {
    pub fn new(db: &'a DatabaseConnection, clock: &'a dyn Clock) -> Self {
        Self { db, clock }
    }

    /// Returns the last reset timestamp.
    ///
    /// A missing record is initialized to the current time. A value that does not parse
    /// as a non-negative integer is replaced by the current time as well, so the counter
    /// keeps running from that point across restarts.
    ///
    /// # Returns
    /// - `Ok(i64)` - Unix timestamp of the last reset
    /// - `Err(AppError::DbErr)` - Database error reading or healing the record
    pub async fn read_timestamp(&self) -> Result<i64, AppError> {
        let repo = CounterRecordRepository::new(self.db);

        let Some(record) = repo.get_by_name(LAST_RESET_AT).await? else {
            let now = self.clock.now();
            tracing::info!("No reset timestamp on record, starting counter at {}", now);
            self.write_timestamp(now).await?;
            return Ok(now);
        };

        match record.value.trim().parse::<i64>() {
            Ok(timestamp) if timestamp >= 0 => Ok(timestamp),
            _ => {
                let now = self.clock.now();
                tracing::warn!(
                    "Malformed reset timestamp '{}' on record, restarting counter at {}",
                    record.value,
                    now
                );
                self.write_timestamp(now).await?;
                Ok(now)
            }
        }
    }

    /// Durably overwrites the last reset timestamp.
    pub async fn write_timestamp(&self, timestamp: i64) -> Result<(), AppError> {
        CounterRecordRepository::new(self.db)
            .upsert(UpsertCounterRecordParam {
                name: LAST_RESET_AT.to_string(),
                value: timestamp.to_string(),
            })
            .await?;

        Ok(())
    }

    /// Returns the recorded display message id.
    ///
    /// # Returns
    /// - `Ok(Some(u64))` - A message id was recorded
    /// - `Ok(None)` - No id was ever recorded or the stored value is malformed. Zero counts
    ///   as malformed since Discord snowflakes are never zero.
    /// - `Err(AppError::DbErr)` - Database error reading the record
    pub async fn read_message_ref(&self) -> Result<Option<u64>, AppError> {
        let repo = CounterRecordRepository::new(self.db);

        let Some(record) = repo.get_by_name(DISPLAY_MESSAGE_ID).await? else {
            return Ok(None);
        };

        match parse_u64_from_string(&record.value) {
            Ok(0) => {
                tracing::warn!("Ignoring zero display message id");
                Ok(None)
            }
            Ok(message_id) => Ok(Some(message_id)),
            Err(e) => {
                tracing::warn!("Ignoring malformed display message id: {}", e);
                Ok(None)
            }
        }
    }

    /// Durably overwrites the display message id.
    pub async fn write_message_ref(&self, message_id: u64) -> Result<(), AppError> {
        CounterRecordRepository::new(self.db)
            .upsert(UpsertCounterRecordParam {
                name: DISPLAY_MESSAGE_ID.to_string(),
                value: message_id.to_string(),
            })
            .await?;

        Ok(())
    }
}
