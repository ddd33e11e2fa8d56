//! Presentation to Discord message conversion.

use arcana_core::presentation::truncate_chars;
use arcana_core::{Reading, TarotError};
use serenity::builder::{CreateAttachment, CreateEmbed, CreateInteractionResponseMessage};

const TITLE_LIMIT: usize = 256;
const DESCRIPTION_LIMIT: usize = 4096;

/// Shown when a command failed for reasons the user cannot act on.
pub const GENERIC_FAILURE: &str = "Something went wrong while reading the cards.";

/// An embed for the reading with its artwork attached.
pub fn reading(reading: Reading) -> CreateInteractionResponseMessage {
    let p = &reading.presentation;
    let embed = p.fields.iter().fold(
        CreateEmbed::new()
            .title(truncate_chars(&p.title, TITLE_LIMIT))
            .description(truncate_chars(&p.description, DESCRIPTION_LIMIT))
            .colour(p.color)
            .image(p.image.attachment_url()),
        |embed, field| embed.field(&field.name, &field.value, false),
    );
    let file = CreateAttachment::bytes(reading.attachment.bytes, reading.attachment.filename);
    CreateInteractionResponseMessage::new()
        .embed(embed)
        .add_file(file)
}

/// A plain text reply describing `err`.
pub fn failure(err: &TarotError) -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new()
        .content(err.user_message())
        .ephemeral(err.is_private())
}

/// A private reply for failures outside the tarot engine.
pub fn internal_failure() -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new()
        .content(GENERIC_FAILURE)
        .ephemeral(true)
}
