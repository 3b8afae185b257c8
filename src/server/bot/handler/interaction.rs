use dioxus_logger::tracing;
use serenity::all::{
    CommandInteraction, ComponentInteraction, Context, EditInteractionResponse, Http,
    Interaction,
};
use serenity::async_trait;

use crate::server::{
    bot::registry::{acknowledgement, InteractionAction, InteractionRegistry},
    error::AppError,
    service::display::{discord::DiscordDisplayChannel, DisplayChannel},
    state::AppContext,
};

/// Private reply channel of a single interaction.
///
/// Discord drops answers sent more than three seconds after the interaction, while a
/// reset may wait on the session lock behind a running tick. The interaction is
/// therefore deferred first and the outcome is filled in afterwards.
#[async_trait]
pub trait DeferredReply: Send + Sync {
    /// Acknowledges the interaction with an ephemeral "thinking" state.
    async fn defer(&self) -> Result<(), AppError>;

    /// Replaces the deferred state with the final text.
    async fn reply(&self, content: String) -> Result<(), AppError>;
}

/// Deferred reply to a button press or slash command through the Discord API.
pub enum DiscordReply<'a> {
    Component(&'a Http, &'a ComponentInteraction),
    Command(&'a Http, &'a CommandInteraction),
}

#[async_trait]
impl DeferredReply for DiscordReply<'_> {
    async fn defer(&self) -> Result<(), AppError> {
        match self {
            Self::Component(http, component) => component.defer_ephemeral(*http).await?,
            Self::Command(http, command) => command.defer_ephemeral(*http).await?,
        }

        Ok(())
    }

    async fn reply(&self, content: String) -> Result<(), AppError> {
        let response = EditInteractionResponse::new().content(content);

        match self {
            Self::Component(http, component) => {
                component.edit_response(*http, response).await?;
            }
            Self::Command(http, command) => {
                command.edit_response(*http, response).await?;
            }
        }

        Ok(())
    }
}

/// Routes button presses and slash commands through the registry.
///
/// Unknown ids are ignored so stray components from other bots' messages or stale
/// commands never produce a reply. Every handled interaction is answered privately.
pub async fn handle_interaction(
    app: &AppContext,
    registry: &InteractionRegistry,
    ctx: Context,
    interaction: Interaction,
) {
    let display = DiscordDisplayChannel::from_context(&ctx);

    match interaction {
        Interaction::Component(component) => {
            let custom_id = component.data.custom_id.as_str();
            let Some(action) = registry.component(custom_id) else {
                tracing::debug!("Ignoring unregistered component {}", custom_id);
                return;
            };

            tracing::info!(
                "Component {} pressed by {} ({})",
                custom_id,
                component.user.name,
                component.user.id
            );

            let reply = DiscordReply::Component(&ctx.http, &component);
            answer_deferred(&reply, action.as_ref(), app, &display).await;
        }
        Interaction::Command(command) => {
            let name = command.data.name.as_str();
            let Some(action) = registry.command(name) else {
                tracing::debug!("Ignoring unregistered command /{}", name);
                return;
            };

            tracing::info!(
                "Command /{} used by {} ({})",
                name,
                command.user.name,
                command.user.id
            );

            let reply = DiscordReply::Command(&ctx.http, &command);
            answer_deferred(&reply, action.as_ref(), app, &display).await;
        }
        _ => {}
    }
}

/// Defers the interaction, runs the action and sends its outcome.
///
/// A failed defer means the interaction can no longer be answered, but the action still
/// runs since the user asked for it.
pub async fn answer_deferred(
    reply: &dyn DeferredReply,
    action: &dyn InteractionAction,
    app: &AppContext,
    display: &dyn DisplayChannel,
) {
    let deferred = match reply.defer().await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Failed to defer interaction: {}", e);
            false
        }
    };

    let result = action.run(app, display).await;
    if let Err(e) = &result {
        tracing::error!("Interaction action failed: {}", e);
    }

    if !deferred {
        return;
    }

    if let Err(e) = reply.reply(acknowledgement(result)).await {
        tracing::error!("Failed to answer interaction: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{
        bot::registry::ResetCounterAction,
        service::test::{fake::FakeDisplayChannel, TestCounter, NOW},
    };
    use std::sync::{Arc, Mutex};

    /// Records the order of defer, action and reply calls.
    #[derive(Clone, Default)]
    struct CallLog(Arc<Mutex<Vec<String>>>);

    impl CallLog {
        fn push(&self, entry: impl Into<String>) {
            self.0.lock().unwrap().push(entry.into());
        }

        fn entries(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    struct RecordingReply {
        log: CallLog,
        failing_defer: bool,
    }

    #[async_trait]
    impl DeferredReply for RecordingReply {
        async fn defer(&self) -> Result<(), AppError> {
            if self.failing_defer {
                return Err(serenity::Error::Other("Unknown interaction").into());
            }
            self.log.push("defer");
            Ok(())
        }

        async fn reply(&self, content: String) -> Result<(), AppError> {
            self.log.push(format!("reply: {}", content));
            Ok(())
        }
    }

    struct RecordingAction {
        log: CallLog,
    }

    #[async_trait]
    impl InteractionAction for RecordingAction {
        async fn run(
            &self,
            _app: &AppContext,
            _display: &dyn DisplayChannel,
        ) -> Result<String, AppError> {
            self.log.push("run");
            Ok("done".to_string())
        }
    }

    /// Tests that the interaction is deferred before the action runs.
    ///
    /// Expected: defer, then run, then the reply carrying the action's confirmation
    #[tokio::test]
    async fn defers_before_running_action() -> Result<(), AppError> {
        let counter = TestCounter::new().await?;
        let display = FakeDisplayChannel::new();
        let log = CallLog::default();
        let reply = RecordingReply {
            log: log.clone(),
            failing_defer: false,
        };
        let action = RecordingAction { log: log.clone() };

        answer_deferred(&reply, &action, &counter.app, &display).await;

        assert_eq!(log.entries(), vec!["defer", "run", "reply: done"]);

        Ok(())
    }

    /// Tests a reset answered while a tick holds the session lock.
    ///
    /// Expected: the defer goes out before the lock is released and the reply follows
    /// once the reset completed
    #[tokio::test]
    async fn defers_while_session_is_busy() -> Result<(), AppError> {
        let counter = TestCounter::new().await?;
        let display = FakeDisplayChannel::new();
        let log = CallLog::default();
        let reply = RecordingReply {
            log: log.clone(),
            failing_defer: false,
        };
        counter.clock.advance(120);

        let session = counter.app.session.lock().await;
        let answer = answer_deferred(&reply, &ResetCounterAction, &counter.app, &display);
        let release = async {
            tokio::task::yield_now().await;
            assert_eq!(log.entries(), vec!["defer"]);
            drop(session);
        };
        tokio::join!(answer, release);

        assert_eq!(log.entries(), vec!["defer", "reply: ✅ Counter reset."]);
        assert_eq!(counter.store().read_timestamp().await?, NOW + 120);

        Ok(())
    }

    /// Tests that a failed defer still performs the reset but sends no reply.
    ///
    /// Expected: timestamp reset, no reply recorded
    #[tokio::test]
    async fn runs_action_when_defer_fails() -> Result<(), AppError> {
        let counter = TestCounter::new().await?;
        let display = FakeDisplayChannel::new();
        let log = CallLog::default();
        let reply = RecordingReply {
            log: log.clone(),
            failing_defer: true,
        };
        counter.clock.advance(60);

        answer_deferred(&reply, &ResetCounterAction, &counter.app, &display).await;

        assert!(log.entries().is_empty());
        assert_eq!(counter.store().read_timestamp().await?, NOW + 60);

        Ok(())
    }
}
