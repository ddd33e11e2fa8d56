//! Configuration for the tarot service.

use std::path::{Path, PathBuf};

/// File name of the daily grant store inside the data directory.
pub const DAILY_FILE: &str = "daily_draws.json";

/// Where the deck, artwork, and persisted state live.
#[derive(Debug, Clone)]
pub struct ArcanaConfig {
    /// Path to the deck JSON file.
    pub cards_path: PathBuf,
    /// Directory holding the card artwork.
    pub images_dir: PathBuf,
    /// Directory for persisted state (daily grants).
    pub data_dir: PathBuf,
    /// RNG seed for reproducible draws. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for ArcanaConfig {
    fn default() -> Self {
        Self {
            cards_path: PathBuf::from("data/cards.json"),
            images_dir: PathBuf::from("images"),
            data_dir: PathBuf::from("data"),
            seed: None,
        }
    }
}

impl ArcanaConfig {
    /// Set the deck file path.
    pub fn with_cards_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cards_path = path.into();
        self
    }

    /// Set the artwork directory.
    pub fn with_images_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.images_dir = dir.into();
        self
    }

    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Path of the daily grant store.
    pub fn daily_path(&self) -> PathBuf {
        self.data_dir.join(DAILY_FILE)
    }

    /// Path of the deck file.
    pub fn cards_path(&self) -> &Path {
        &self.cards_path
    }
}
