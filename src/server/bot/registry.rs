//! Registry binding interaction identifiers to their handlers.
//!
//! Buttons are matched by custom id and slash commands by name. The registry is filled
//! before the gateway client starts and lives in the event handler, independent of any
//! message, so presses on counter messages posted by an earlier process still resolve.

use serenity::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use crate::server::{
    bot::commands::RESET_COMMAND_NAME,
    error::AppError,
    model::counter::RESET_CONTROL_ID,
    service::{counter::CounterService, display::DisplayChannel},
    state::AppContext,
};

/// Action run in response to a button press or slash command.
#[async_trait]
pub trait InteractionAction: Send + Sync {
    /// Runs the action and returns the confirmation shown privately to the user.
    async fn run(&self, app: &AppContext, display: &dyn DisplayChannel)
        -> Result<String, AppError>;
}

/// Resets the counter and refreshes the display message.
pub struct ResetCounterAction;

#[async_trait]
impl InteractionAction for ResetCounterAction {
    async fn run(
        &self,
        app: &AppContext,
        display: &dyn DisplayChannel,
    ) -> Result<String, AppError> {
        CounterService::new(app, display).reset().await?;

        Ok("✅ Counter reset.".to_string())
    }
}

/// Turns an action result into the private reply sent back to the user.
pub fn acknowledgement(result: Result<String, AppError>) -> String {
    match result {
        Ok(confirmation) => confirmation,
        Err(e) => format!("⚠️ An error occurred while updating: {}", e),
    }
}

#[derive(Default)]
pub struct InteractionRegistry {
    components: HashMap<String, Arc<dyn InteractionAction>>,
    commands: HashMap<String, Arc<dyn InteractionAction>>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the reset action bound to both the button and the slash command.
    pub fn counter() -> Self {
        let reset: Arc<dyn InteractionAction> = Arc::new(ResetCounterAction);

        Self::new()
            .with_component(RESET_CONTROL_ID, reset.clone())
            .with_command(RESET_COMMAND_NAME, reset)
    }

    pub fn with_component(mut self, custom_id: &str, action: Arc<dyn InteractionAction>) -> Self {
        self.components.insert(custom_id.to_string(), action);
        self
    }

    pub fn with_command(mut self, name: &str, action: Arc<dyn InteractionAction>) -> Self {
        self.commands.insert(name.to_string(), action);
        self
    }

    pub fn component(&self, custom_id: &str) -> Option<Arc<dyn InteractionAction>> {
        self.components.get(custom_id).cloned()
    }

    pub fn command(&self, name: &str) -> Option<Arc<dyn InteractionAction>> {
        self.commands.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{
        bot::commands::create_commands,
        service::test::{fake::FakeDisplayChannel, TestCounter, NOW},
    };
    use sea_orm::DbErr;

    /// Tests that the counter registry binds the button and every registered command.
    ///
    /// Expected: lookups succeed for the stable ids and fail for unknown ones
    #[test]
    fn counter_registry_binds_reset_everywhere() {
        let registry = InteractionRegistry::counter();

        assert!(registry.component(RESET_CONTROL_ID).is_some());
        assert!(registry.command(RESET_COMMAND_NAME).is_some());
        assert!(registry.component("accident_counter:unknown").is_none());
        assert!(registry.command("ping").is_none());
        assert_eq!(create_commands().len(), 1);
    }

    /// Tests running the bound reset action end to end.
    ///
    /// Expected: Ok with the confirmation and the counter reset to now
    #[tokio::test]
    async fn reset_action_confirms_and_resets() -> Result<(), AppError> {
        let counter = TestCounter::new().await?;
        let display = FakeDisplayChannel::new();
        counter.clock.advance(3 * 86_400);

        let action = InteractionRegistry::counter()
            .component(RESET_CONTROL_ID)
            .unwrap();
        let reply = acknowledgement(action.run(&counter.app, &display).await);

        assert_eq!(reply, "✅ Counter reset.");
        assert_eq!(counter.store().read_timestamp().await?, NOW + 3 * 86_400);
        let message_id = display.message_ids()[0];
        assert!(display.content(message_id).unwrap().contains("**0**"));

        Ok(())
    }

    /// Tests that failures become a visible notice instead of an error.
    ///
    /// Expected: the notice carries the error message
    #[test]
    fn failure_becomes_notice() {
        let reply = acknowledgement(Err(AppError::DbErr(DbErr::Custom(
            "database is locked".to_string(),
        ))));

        assert!(reply.starts_with("⚠️ An error occurred while updating: "));
        assert!(reply.contains("database is locked"));
    }
}
