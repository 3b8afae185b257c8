//! Backend of the incident counter bot.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Bot Layer** (`bot/`) - Gateway event handlers, slash commands and the interaction registry
//! - **Service Layer** (`service/`) - Counter transitions, message reconciliation and rendering
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application context (DB, clock, counter session)
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Scheduler** (`scheduler/`) - Cron job refreshing the counter message every minute
//! - **Util** (`util/`) - Clock and id parsing helpers
//!
//! # Event Flow
//!
//! 1. **Bot** receives `ready`, a button press or a slash command
//! 2. **Registry** maps the component id or command name to an action
//! 3. **Service** takes the session lock, updates the store and reconciles the message
//! 4. **Data** reads and writes the counter records
//! 5. **Bot** answers the user privately with the outcome

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
