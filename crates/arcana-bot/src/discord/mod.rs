//! Slash command registration and interaction handling.

mod handler;
mod render;

use serenity::async_trait;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{Command, CommandOptionType};
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use tracing::{error, info};

pub use handler::Handler;

pub const CARD_INFO: &str = "card_info";
pub const DRAW: &str = "draw";
pub const YES_OR_NO: &str = "yes_or_no";
pub const DAILY: &str = "daily";

pub const CARD_NAME: &str = "card_name";
pub const QUESTION: &str = "question";

/// The slash commands the bot serves.
pub fn slash_commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new(CARD_INFO)
            .description("Look up the details of a specific Tarot card.")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    CARD_NAME,
                    "Start typing the name or number of the card",
                )
                .required(true)
                .set_autocomplete(true),
            ),
        CreateCommand::new(DRAW)
            .description("Draws a random Tarot card with a 30% chance to be reversed."),
        CreateCommand::new(YES_OR_NO)
            .description("Ask a yes or no question and draw a Tarot card for guidance.")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    QUESTION,
                    "The question you want to ask the Tarot",
                )
                .required(true),
            ),
        CreateCommand::new(DAILY)
            .description("Draw your daily Tarot card (Resets at midnight UTC)."),
    ]
}

/// Removes every global slash command, then disconnects.
pub struct CommandCleaner;

#[async_trait]
impl EventHandler for CommandCleaner {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("connected as {}, clearing global commands", ready.user.name);
        match Command::set_global_commands(&ctx.http, Vec::new()).await {
            Ok(_) => info!("global commands cleared"),
            Err(e) => error!("failed to clear global commands: {e}"),
        }
        ctx.shard.shutdown_clean();
    }
}
