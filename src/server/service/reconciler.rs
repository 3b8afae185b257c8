//! Display message reconciliation.
//!
//! Keeps exactly one counter message in the configured channel. `ensure` finds or
//! recreates the message and re-binds the reset button; `refresh` pushes the current
//! elapsed time into the cached message and falls back to `ensure` when the message was
//! deleted. Discord failures are logged and swallowed here: the next periodic tick acts
//! as the retry. Only counter store (database) errors are returned to the caller.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    error::AppError,
    model::counter::{CounterSession, CounterState, EditOutcome, MessageLookup},
    service::{
        counter_store::CounterStore,
        display::DisplayChannel,
        elapsed::{format_elapsed, render_content},
    },
    util::clock::Clock,
};

pub struct MessageReconciler<'a> {
    store: CounterStore<'a>,
    clock: &'a dyn Clock,
    display: &'a dyn DisplayChannel,
}

impl<'a> MessageReconciler<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        clock: &'a dyn Clock,
        display: &'a dyn DisplayChannel,
    ) -> Self {
        Self {
            store: CounterStore::new(db, clock),
            clock,
            display,
        }
    }

    pub fn store(&self) -> &CounterStore<'a> {
        &self.store
    }

    /// Renders the counter content for the current time.
    pub fn render(&self, state: &CounterState) -> String {
        render_content(&format_elapsed(state.last_reset_at, self.clock.now()))
    }

    /// Makes sure the counter message exists and carries the reset button.
    ///
    /// Resolves the channel, then the recorded message. A missing or unreachable
    /// message is replaced by a freshly sent one whose id is persisted. An existing
    /// message only gets its button re-attached. On success the message id is cached
    /// in `session` for later refreshes.
    ///
    /// # Arguments
    /// - `session` - Counter data, borrowed from the held session lock
    ///
    /// # Returns
    /// - `Ok(())` - Reconciled, or gave up on a Discord failure that was logged
    /// - `Err(AppError::DbErr)` - Reading or writing the counter store failed
    pub async fn ensure(&self, session: &mut CounterSession) -> Result<(), AppError> {
        let channel_id = session.display.channel_id;

        if let Err(e) = self.display.resolve_channel(channel_id).await {
            tracing::error!("Failed to resolve counter channel {}: {}", channel_id, e);
            return Ok(());
        }

        let existing = match self.store.read_message_ref().await? {
            Some(message_id) => self.lookup_message(channel_id, message_id).await,
            None => MessageLookup::NotFound,
        };

        let message_id = match existing {
            MessageLookup::Found(message_id) => {
                match self.display.edit_message(channel_id, message_id, None).await {
                    Ok(EditOutcome::Edited) => {
                        tracing::debug!("Re-attached reset control to message {}", message_id);
                    }
                    Ok(EditOutcome::NotFound) => {
                        tracing::warn!(
                            "Counter message {} vanished while re-attaching the reset control",
                            message_id
                        );
                    }
                    Err(e) => {
                        tracing::warn!(
                            "Failed to re-attach reset control to message {}: {}",
                            message_id,
                            e
                        );
                    }
                }
                message_id
            }
            MessageLookup::NotFound => {
                let content = self.render(&session.state);
                let message_id = match self.display.send_message(channel_id, &content).await {
                    Ok(message_id) => message_id,
                    Err(e) => {
                        tracing::error!(
                            "Failed to send counter message to channel {}: {}",
                            channel_id,
                            e
                        );
                        return Ok(());
                    }
                };
                self.store.write_message_ref(message_id).await?;
                tracing::info!(
                    "Posted new counter message {} in channel {}",
                    message_id,
                    channel_id
                );
                message_id
            }
        };

        session.display.message_id = Some(message_id);

        Ok(())
    }

    /// Pushes the current elapsed time into the counter message.
    ///
    /// Without a cached message this reconciles first. A message deleted behind the
    /// bot's back is dropped from the cache and recreated; any other edit failure is
    /// logged and left for the next tick.
    ///
    /// # Arguments
    /// - `session` - Counter data, borrowed from the held session lock
    ///
    /// # Returns
    /// - `Ok(())` - Refreshed, or gave up on a Discord failure that was logged
    /// - `Err(AppError::DbErr)` - Reading or writing the counter store failed
    pub async fn refresh(&self, session: &mut CounterSession) -> Result<(), AppError> {
        if session.display.message_id.is_none() {
            self.ensure(session).await?;
        }
        let Some(message_id) = session.display.message_id else {
            return Ok(());
        };

        let channel_id = session.display.channel_id;
        let content = self.render(&session.state);

        match self
            .display
            .edit_message(channel_id, message_id, Some(&content))
            .await
        {
            Ok(EditOutcome::Edited) => {
                tracing::debug!("Refreshed counter message {}", message_id);
                Ok(())
            }
            Ok(EditOutcome::NotFound) => {
                tracing::warn!(
                    "Counter message {} no longer exists, recreating it",
                    message_id
                );
                session.display.message_id = None;
                self.ensure(session).await
            }
            Err(e) => {
                tracing::error!("Failed to update counter message {}: {}", message_id, e);
                Ok(())
            }
        }
    }

    /// Looks up a recorded message, treating every failure as "not there".
    async fn lookup_message(&self, channel_id: u64, message_id: u64) -> MessageLookup {
        match self.display.fetch_message(channel_id, message_id).await {
            Ok(MessageLookup::NotFound) => {
                tracing::warn!(
                    "Recorded counter message {} was deleted from channel {}",
                    message_id,
                    channel_id
                );
                MessageLookup::NotFound
            }
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(
                    "Failed to fetch counter message {}, posting a new one: {}",
                    message_id,
                    e
                );
                MessageLookup::NotFound
            }
        }
    }
}
