//! Ready event handler for bot initialization.
//!
//! The `ready` event fires after the gateway handshake and again after every
//! reconnect that needs a fresh session. Each time, the handler sets the activity
//! status, overwrites the global slash commands and reconciles the counter message.
//! The refresh scheduler is started on the first ready only.

use dioxus_logger::tracing;
use serenity::all::{ActivityData, Command, Context, Ready};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::server::{
    bot::commands::create_commands,
    scheduler::counter_refresh,
    service::{counter::CounterService, display::discord::DiscordDisplayChannel},
    state::AppContext,
};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `app` - Application context holding the counter session
/// - `scheduler_started` - Guard ensuring the refresh scheduler starts once per process
/// - `ctx` - Discord context for setting activity status and reaching the API
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(
    app: &AppContext,
    scheduler_started: &AtomicBool,
    ctx: Context,
    ready: Ready,
) {
    tracing::info!(
        "{} is connected to Discord (ID: {})",
        ready.user.name,
        ready.user.id
    );

    ctx.set_activity(Some(ActivityData::watching("the days without incidents")));

    match Command::set_global_commands(&ctx.http, create_commands()).await {
        Ok(commands) => tracing::info!("Registered {} slash command(s)", commands.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }

    let display = DiscordDisplayChannel::from_context(&ctx);

    if let Err(e) = CounterService::new(app, &display).ensure().await {
        tracing::error!("Failed to reconcile counter message on ready: {}", e);
    }

    if scheduler_started.swap(true, Ordering::SeqCst) {
        tracing::debug!("Counter refresh scheduler already running");
        return;
    }

    if let Err(e) = counter_refresh::start_scheduler(app.clone(), display).await {
        scheduler_started.store(false, Ordering::SeqCst);
        tracing::error!("Counter refresh scheduler error: {}", e);
    }
}
