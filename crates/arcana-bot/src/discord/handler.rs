use std::sync::Arc;

use arcana_core::{Reading, TarotResult, TarotService, today_utc};
use serenity::async_trait;
use serenity::builder::{CreateAutocompleteResponse, CreateInteractionResponse};
use serenity::model::application::{Command, CommandInteraction, Interaction, ResolvedValue};
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use tokio::task::JoinError;
use tracing::{error, info, warn};

use super::{CARD_INFO, CARD_NAME, DAILY, DRAW, QUESTION, YES_OR_NO, render, slash_commands};

/// Routes slash commands to the tarot service.
pub struct Handler {
    service: Arc<TarotService>,
}

impl Handler {
    pub fn new(service: Arc<TarotService>) -> Self {
        Self { service }
    }

    /// Run a service call off the async runtime; it reads and may re-encode
    /// artwork and writes the grant file.
    async fn blocking<F>(&self, op: F) -> Result<TarotResult<Reading>, JoinError>
    where
        F: FnOnce(&TarotService) -> TarotResult<Reading> + Send + 'static,
    {
        let service = Arc::clone(&self.service);
        tokio::task::spawn_blocking(move || op(service.as_ref())).await
    }

    async fn on_command(&self, ctx: &Context, cmd: &CommandInteraction) {
        let result = match cmd.data.name.as_str() {
            CARD_INFO => {
                let name = string_option(cmd, CARD_NAME).unwrap_or_default();
                self.blocking(move |s| s.lookup(&name)).await
            }
            DRAW => self.blocking(|s| s.draw_card()).await,
            YES_OR_NO => {
                let question = string_option(cmd, QUESTION).unwrap_or_default();
                self.blocking(move |s| s.yes_or_no(&question)).await
            }
            DAILY => {
                let caller = cmd.user.id.to_string();
                let today = today_utc();
                self.blocking(move |s| s.daily(&caller, today)).await
            }
            other => {
                warn!("unknown command: {other}");
                return;
            }
        };

        let message = match result {
            Ok(Ok(reading)) => render::reading(reading),
            Ok(Err(e)) => {
                info!(command = %cmd.data.name, user = %cmd.user.id, "command failed: {e}");
                render::failure(&e)
            }
            Err(e) => {
                error!(command = %cmd.data.name, "command task failed: {e}");
                render::internal_failure()
            }
        };

        if let Err(e) = cmd
            .create_response(&ctx.http, CreateInteractionResponse::Message(message))
            .await
        {
            error!(command = %cmd.data.name, "failed to respond: {e}");
        }
    }

    async fn on_autocomplete(&self, ctx: &Context, cmd: &CommandInteraction) {
        let Some(focused) = cmd.data.autocomplete() else {
            return;
        };
        let choices = self
            .service
            .autocomplete(focused.value)
            .into_iter()
            .fold(CreateAutocompleteResponse::new(), |resp, choice| {
                resp.add_string_choice(choice.name, choice.value)
            });

        if let Err(e) = cmd
            .create_response(&ctx.http, CreateInteractionResponse::Autocomplete(choices))
            .await
        {
            warn!("failed to send autocomplete choices: {e}");
        }
    }
}

/// The string value of option `name`, if the user supplied it.
fn string_option(cmd: &CommandInteraction, name: &str) -> Option<String> {
    cmd.data
        .options()
        .into_iter()
        .find_map(|opt| match opt.value {
            ResolvedValue::String(value) if opt.name == name => Some(value.to_string()),
            _ => None,
        })
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::Command(cmd) => self.on_command(&ctx, &cmd).await,
            Interaction::Autocomplete(cmd) => self.on_autocomplete(&ctx, &cmd).await,
            _ => {}
        }
    }

    /// Register slash commands once connected.
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(
            "connected as {} with {} cards",
            ready.user.name,
            self.service.catalog().len()
        );
        match Command::set_global_commands(&ctx.http, slash_commands()).await {
            Ok(registered) => info!("synced {} slash command(s) globally", registered.len()),
            Err(e) => error!("failed to register slash commands: {e}"),
        }
    }
}
