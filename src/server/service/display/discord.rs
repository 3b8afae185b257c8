//! Serenity-backed display channel.

use dioxus_logger::tracing;
use serenity::all::{
    ButtonStyle, Cache, ChannelId, Context, CreateActionRow, CreateButton, CreateMessage,
    EditMessage, Http, MessageId,
};
use serenity::async_trait;
use std::sync::Arc;

use crate::server::{
    error::AppError,
    model::counter::{EditOutcome, MessageLookup, RESET_CONTROL_ID},
};

use super::DisplayChannel;

/// Display channel posting the counter through the Discord API.
///
/// Holds the gateway cache next to the HTTP client so channel lookups hit the cache
/// first and only fall back to an HTTP fetch when the channel is not cached.
#[derive(Clone)]
pub struct DiscordDisplayChannel {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl DiscordDisplayChannel {
    pub fn new(http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { http, cache }
    }

    /// Builds a display channel sharing the HTTP client and cache of a gateway context.
    pub fn from_context(ctx: &Context) -> Self {
        Self::new(ctx.http.clone(), ctx.cache.clone())
    }
}

/// Builds the action row carrying the reset button.
///
/// The custom id is the only thing binding a press to its handler, so it must stay
/// stable across releases.
pub fn reset_components() -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![CreateButton::new(
        RESET_CONTROL_ID,
    )
    .label("Reset counter")
    .style(ButtonStyle::Danger)
    .emoji('🔁')])]
}

/// Whether Discord answered with 404 (unknown message or channel).
fn is_not_found(err: &serenity::Error) -> bool {
    match err {
        serenity::Error::Http(http_err) => {
            http_err.status_code().map(|status| status.as_u16()) == Some(404)
        }
        _ => false,
    }
}

#[async_trait]
impl DisplayChannel for DiscordDisplayChannel {
    async fn resolve_channel(&self, channel_id: u64) -> Result<(), AppError> {
        let channel = ChannelId::new(channel_id)
            .to_channel((&self.cache, self.http.as_ref()))
            .await?;

        let Some(channel) = channel.guild() else {
            return Err(AppError::NotFound(format!(
                "Channel {} is not a guild channel",
                channel_id
            )));
        };

        tracing::debug!("Resolved counter channel #{} ({})", channel.name, channel.id);

        Ok(())
    }

    async fn fetch_message(
        &self,
        channel_id: u64,
        message_id: u64,
    ) -> Result<MessageLookup, AppError> {
        match self
            .http
            .get_message(ChannelId::new(channel_id), MessageId::new(message_id))
            .await
        {
            Ok(message) => Ok(MessageLookup::Found(message.id.get())),
            Err(e) if is_not_found(&e) => Ok(MessageLookup::NotFound),
            Err(e) => Err(e.into()),
        }
    }

    async fn send_message(&self, channel_id: u64, content: &str) -> Result<u64, AppError> {
        let new_message = CreateMessage::new()
            .content(content)
            .components(reset_components());

        let message = ChannelId::new(channel_id)
            .send_message(&self.http, new_message)
            .await?;

        Ok(message.id.get())
    }

    async fn edit_message(
        &self,
        channel_id: u64,
        message_id: u64,
        content: Option<&str>,
    ) -> Result<EditOutcome, AppError> {
        let mut edit_message = EditMessage::new().components(reset_components());
        if let Some(content) = content {
            edit_message = edit_message.content(content);
        }

        match self
            .http
            .edit_message(
                ChannelId::new(channel_id),
                MessageId::new(message_id),
                &edit_message,
                vec![],
            )
            .await
        {
            Ok(_) => Ok(EditOutcome::Edited),
            Err(e) if is_not_found(&e) => Ok(EditOutcome::NotFound),
            Err(e) => Err(e.into()),
        }
    }
}
