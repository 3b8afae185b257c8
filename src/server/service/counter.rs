//! Counter state transitions.
//!
//! Startup reconciliation, the periodic tick and the reset action all go through
//! `CounterService`, which takes the session lock before touching the store or Discord
//! so concurrently dispatched events run one after another.

use dioxus_logger::tracing;

use crate::server::{
    error::AppError,
    service::{display::DisplayChannel, reconciler::MessageReconciler},
    state::AppContext,
};

pub struct CounterService<'a> {
    app: &'a AppContext,
    display: &'a dyn DisplayChannel,
}

impl<'a> CounterService<'a> {
    pub fn new(app: &'a AppContext, display: &'a dyn DisplayChannel) -> Self {
        Self { app, display }
    }

    fn reconciler(&self) -> MessageReconciler<'_> {
        MessageReconciler::new(&self.app.db, self.app.clock.as_ref(), self.display)
    }

    /// Full reconciliation, run once when the gateway reports ready.
    pub async fn ensure(&self) -> Result<(), AppError> {
        let mut session = self.app.session.lock().await;
        self.reconciler().ensure(&mut session).await
    }

    /// Periodic refresh of the displayed elapsed time.
    pub async fn tick(&self) -> Result<(), AppError> {
        let mut session = self.app.session.lock().await;
        self.reconciler().refresh(&mut session).await
    }

    /// Resets the counter to now and pushes the new rendering.
    ///
    /// # Returns
    /// - `Ok(i64)` - The new reset timestamp
    /// - `Err(AppError::DbErr)` - The timestamp could not be persisted; the in-memory
    ///   state is left untouched
    pub async fn reset(&self) -> Result<i64, AppError> {
        let mut session = self.app.session.lock().await;
        let reconciler = self.reconciler();

        let now = self.app.clock.now();
        reconciler.store().write_timestamp(now).await?;
        session.state.last_reset_at = now;

        tracing::info!("Counter reset at {}", now);

        reconciler.refresh(&mut session).await?;

        Ok(now)
    }
}
