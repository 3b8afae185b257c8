mod server;

use dioxus_logger::tracing::{self, Level};
use std::sync::Arc;

use crate::server::{
    bot, config::Config, error::AppError, startup, state::AppContext, util::clock::SystemClock,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dioxus_logger::init(Level::INFO)?;

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let app = AppContext::load(db, Arc::new(SystemClock), config.counter_channel_id).await?;

    tracing::info!(
        "Starting incident counter for channel {}",
        config.counter_channel_id
    );

    let client = bot::start::init_bot(&config, app).await?;
    bot::start::start_bot(client).await?;

    Ok(())
}
