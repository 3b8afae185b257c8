//! Application context shared by every event handler and the scheduler.
//!
//! The context replaces global bot state: it is built once at startup, cloned
//! (cheaply) into the Discord event handler and the refresh job, and carries the only
//! copy of the in-memory counter data behind a single async mutex.

use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::server::{
    error::AppError, model::counter::CounterSession, service::counter_store::CounterStore,
    util::clock::Clock,
};

/// Application context containing shared resources and the counter session.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<dyn Clock>` and `Arc<Mutex<_>>` are reference-counted
#[derive(Clone)]
pub struct AppContext {
    /// Database connection backing the counter store.
    pub db: DatabaseConnection,

    /// Time source for resets and rendering.
    pub clock: Arc<dyn Clock>,

    /// Counter state and cached display message.
    ///
    /// Every reset, tick and reconciliation holds this lock for its whole duration.
    pub session: Arc<Mutex<CounterSession>>,
}

impl AppContext {
    /// Loads the persisted reset time and builds the context.
    ///
    /// The display message is left unresolved; the first reconciliation reads the
    /// recorded message id and verifies it against Discord.
    ///
    /// # Arguments
    /// - `db` - Database connection with migrations applied
    /// - `clock` - Time source
    /// - `channel_id` - Discord channel holding the counter message
    ///
    /// # Returns
    /// - `Ok(AppContext)` - Context ready to hand to the bot
    /// - `Err(AppError::DbErr)` - Failed to read or initialize the reset timestamp
    pub async fn load(
        db: DatabaseConnection,
        clock: Arc<dyn Clock>,
        channel_id: u64,
    ) -> Result<Self, AppError> {
        let last_reset_at = CounterStore::new(&db, clock.as_ref())
            .read_timestamp()
            .await?;

        Ok(Self {
            db,
            clock,
            session: Arc::new(Mutex::new(CounterSession::new(last_reset_at, channel_id))),
        })
    }
}
