//! Discord bot and terminal frontend for Arcana tarot readings.

mod commands;
mod discord;
mod logging;

use std::path::PathBuf;
use std::process;

use arcana_core::ArcanaConfig;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "arcana",
    about = "Arcana — tarot readings for Discord",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(flatten)]
    deck: DeckArgs,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct DeckArgs {
    /// Deck file (JSON array of cards)
    #[arg(long, env = "ARCANA_CARDS", default_value = "data/cards.json", global = true)]
    cards: PathBuf,

    /// Directory containing card artwork
    #[arg(long, env = "ARCANA_IMAGES", default_value = "images", global = true)]
    images: PathBuf,

    /// Directory for persisted state (daily draws)
    #[arg(long, env = "ARCANA_DATA", default_value = "data", global = true)]
    data: PathBuf,
}

impl DeckArgs {
    fn into_config(self) -> ArcanaConfig {
        ArcanaConfig::default()
            .with_cards_path(self.cards)
            .with_images_dir(self.images)
            .with_data_dir(self.data)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to Discord and serve slash commands
    Run {
        /// Bot token
        #[arg(long, env = "DISCORD_TOKEN", hide_env_values = true)]
        token: String,

        /// RNG seed for reproducible draws
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Remove all global slash commands registered by the bot, then exit
    ClearCommands {
        /// Bot token
        #[arg(long, env = "DISCORD_TOKEN", hide_env_values = true)]
        token: String,
    },

    /// Verify that every card in the deck has artwork
    Check,

    /// Show the details of a card
    Lookup {
        /// Card name (case-insensitive)
        name: String,
    },

    /// Draw a random card
    Draw {
        /// Ask a yes/no question
        #[arg(short, long)]
        question: Option<String>,

        /// RNG seed for a reproducible draw
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Take the daily draw for a user, recording it in the data directory
    Daily {
        /// User id the draw is recorded for
        #[arg(short, long)]
        user: String,

        /// RNG seed for a reproducible draw
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = cli.deck.into_config();

    let result = match cli.command {
        Commands::Run { token, seed } => commands::run::run(config.with_seed(seed), &token).await,
        Commands::ClearCommands { token } => commands::clear::run(&token).await,
        Commands::Check => commands::check::run(&config),
        Commands::Lookup { name } => commands::preview::lookup(&config, &name),
        Commands::Draw { question, seed } => {
            commands::preview::draw(&config.with_seed(seed), question.as_deref())
        }
        Commands::Daily { user, seed } => commands::preview::daily(&config.with_seed(seed), &user),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
