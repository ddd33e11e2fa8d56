pub mod check;
pub mod clear;
pub mod preview;
pub mod run;

use arcana_core::{ArcanaConfig, TarotService};

/// Load the deck and build the service, or explain why it cannot start.
fn open_service(config: &ArcanaConfig) -> Result<TarotService, String> {
    TarotService::from_config(config).map_err(|e| format!("failed to load deck: {e}"))
}
