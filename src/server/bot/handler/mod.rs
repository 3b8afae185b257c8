use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;
use std::sync::atomic::AtomicBool;

use crate::server::{bot::registry::InteractionRegistry, state::AppContext};

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub app: AppContext,
    pub registry: InteractionRegistry,
    /// Set once the refresh scheduler runs, so gateway reconnects don't start another.
    scheduler_started: AtomicBool,
}

impl Handler {
    pub fn new(app: AppContext, registry: InteractionRegistry) -> Self {
        Self {
            app,
            registry,
            scheduler_started: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.app, &self.scheduler_started, ctx, ready).await;
    }

    /// Called when a user presses a button or runs a slash command
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(&self.app, &self.registry, ctx, interaction).await;
    }
}
