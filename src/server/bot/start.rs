use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents};

use crate::server::{
    bot::{handler::Handler, registry::InteractionRegistry},
    config::Config,
    error::AppError,
    state::AppContext,
};

/// Builds the Discord client with the counter event handler attached.
///
/// The interaction registry is populated here, before the client connects, so the first
/// button press after startup already resolves to its action.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `app` - Application context shared with every event
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(config: &Config, app: AppContext) -> Result<Client, AppError> {
    // Interactions arrive without any intent; GUILDS keeps the channel cache populated.
    let intents = GatewayIntents::GUILDS;

    let handler = Handler::new(app, InteractionRegistry::counter());

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Connects to the gateway and runs until the connection shuts down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
