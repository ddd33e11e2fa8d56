use serenity::prelude::*;

use crate::discord::CommandCleaner;

pub async fn run(token: &str) -> Result<(), String> {
    let mut client = Client::builder(token, GatewayIntents::empty())
        .event_handler(CommandCleaner)
        .await
        .map_err(|e| format!("failed to create Discord client: {e}"))?;

    client
        .start()
        .await
        .map_err(|e| format!("Discord client stopped: {e}"))
}
