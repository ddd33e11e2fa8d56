use std::sync::Arc;

use arcana_core::ArcanaConfig;
use serenity::prelude::*;

use crate::discord::Handler;

pub async fn run(config: ArcanaConfig, token: &str) -> Result<(), String> {
    let service = super::open_service(&config)?;

    let missing = service
        .catalog()
        .cards()
        .iter()
        .filter(|c| !service.artwork().contains(c))
        .count();
    if missing > 0 {
        tracing::warn!(
            missing,
            dir = %service.artwork().dir().display(),
            "some cards have no artwork; run `arcana check` for details"
        );
    }

    let handler = Handler::new(Arc::new(service));
    let mut client = Client::builder(token, GatewayIntents::empty())
        .event_handler(handler)
        .await
        .map_err(|e| format!("failed to create Discord client: {e}"))?;

    client
        .start()
        .await
        .map_err(|e| format!("Discord client stopped: {e}"))
}
