//! Error types for the counter bot.
//!
//! `AppError` is the top-level error returned by startup, the data layer and the
//! services. Discord failures inside reconciliation are logged and swallowed by the
//! reconciler itself, so an `AppError` reaching an event handler means the counter
//! store or the bot setup failed.

pub mod config;
pub mod internal;

use dioxus_logger::tracing::subscriber::SetGlobalDefaultError;
use thiserror::Error;

use crate::server::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
///
/// Most variants use `#[from]` so `?` converts library errors automatically.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always fatal: the process refuses to start.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Internal issue such as a stored id that failed to parse.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// The global tracing subscriber could not be installed.
    #[error(transparent)]
    LoggerErr(#[from] SetGlobalDefaultError),

    /// Resource not found error, e.g. the counter channel is not a guild channel.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
