use std::sync::Arc;

use sea_orm::DatabaseConnection;
use test_utils::builder::TestBuilder;

use crate::server::{
    error::AppError,
    service::counter_store::CounterStore,
    state::AppContext,
    util::clock::{Clock, ManualClock},
};


mod scenario;

pub(crate) const NOW: i64 = 1_760_000_000;
pub(crate) const CHANNEL_ID: u64 = 1427876160867536926;

/// Counter wiring over an in-memory database and a manual clock.
pub(crate) struct TestCounter {
    pub app: AppContext,
    pub clock: Arc<ManualClock>,
}

impl TestCounter {
    /// Builds a context over a fresh database with the clock at `NOW`.
    pub async fn new() -> Result<Self, AppError> {
        let test = TestBuilder::new().with_counter_tables().build().await.unwrap();
        let db = test.db.unwrap();

        Self::with_db(db).await
    }

    /// Builds a context over an already prepared database.
    pub async fn with_db(db: DatabaseConnection) -> Result<Self, AppError> {
        let clock = Arc::new(ManualClock::new(NOW));
        let app = AppContext::load(db, clock.clone() as Arc<dyn Clock>, CHANNEL_ID).await?;

        Ok(Self { app, clock })
    }

    pub fn store(&self) -> CounterStore<'_> {
        CounterStore::new(&self.app.db, self.clock.as_ref())
    }
}
