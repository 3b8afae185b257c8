//! Discord bot integration for the incident counter.
//!
//! The bot keeps a single counter message in the configured channel and answers the
//! reset button and the `/reset_counter` command. Startup reconciliation and the
//! refresh scheduler are driven from the `ready` event; interactions are routed through
//! the [`registry::InteractionRegistry`] built before the client connects.
//!
//! # Gateway Intents
//!
//! Only `GUILDS` is requested. Interactions are delivered regardless of intents and the
//! counter never reads message content.

pub mod commands;
pub mod handler;
pub mod registry;
pub mod start;
