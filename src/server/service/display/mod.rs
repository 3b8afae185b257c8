//! Outward display of the counter.
//!
//! `DisplayChannel` is the seam between the reconciler and Discord. The production
//! implementation (`discord::DiscordDisplayChannel`) talks to the Discord API through
//! Serenity and attaches the reset button to every message it sends or edits; tests
//! use an in-memory channel instead.

pub mod discord;

use serenity::async_trait;

use crate::server::{
    error::AppError,
    model::counter::{EditOutcome, MessageLookup},
};

#[async_trait]
pub trait DisplayChannel: Send + Sync {
    /// Confirms the channel exists and is reachable.
    async fn resolve_channel(&self, channel_id: u64) -> Result<(), AppError>;

    /// Looks up a previously sent message.
    ///
    /// A deleted message is `Ok(MessageLookup::NotFound)`; only other failures are errors.
    async fn fetch_message(&self, channel_id: u64, message_id: u64)
        -> Result<MessageLookup, AppError>;

    /// Sends a new message with the reset control attached and returns its id.
    async fn send_message(&self, channel_id: u64, content: &str) -> Result<u64, AppError>;

    /// Re-attaches the reset control and, when `content` is given, replaces the text.
    async fn edit_message(
        &self,
        channel_id: u64,
        message_id: u64,
        content: Option<&str>,
    ) -> Result<EditOutcome, AppError>;
}
