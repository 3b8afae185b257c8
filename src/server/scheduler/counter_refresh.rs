use dioxus_logger::tracing;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::{counter::CounterService, display::discord::DiscordDisplayChannel},
    state::AppContext,
};

/// Starts the counter refresh scheduler
///
/// Runs every minute and pushes the current elapsed time into the counter message,
/// recreating the message if it was deleted. Failures are logged; the next run retries.
///
/// # Arguments
/// - `app`: Application context holding the counter session
/// - `display`: Discord display channel the counter is rendered to
pub async fn start_scheduler(
    app: AppContext,
    display: DiscordDisplayChannel,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let app = app.clone();
        let display = display.clone();

        Box::pin(async move {
            if let Err(e) = CounterService::new(&app, &display).tick().await {
                tracing::error!("Error refreshing counter message: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Counter refresh scheduler started");

    Ok(())
}
