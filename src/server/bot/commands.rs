//! Slash command definitions.

use serenity::all::CreateCommand;

/// Name of the slash command resetting the counter.
pub const RESET_COMMAND_NAME: &str = "reset_counter";

/// Creates all slash commands for registration.
///
/// Registered globally on every ready event; Discord treats the bulk overwrite as
/// idempotent.
pub fn create_commands() -> Vec<CreateCommand> {
    vec![CreateCommand::new(RESET_COMMAND_NAME)
        .description("Manually reset the days without incidents counter")]
}
