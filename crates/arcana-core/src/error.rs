//! Error types for the tarot engine.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for tarot operations.
pub type TarotResult<T> = Result<T, TarotError>;

/// Errors that can occur while loading the deck or serving a reading.
#[derive(Debug, Error)]
pub enum TarotError {
    /// The deck file could not be read.
    #[error("failed to read card catalog {}: {source}", .path.display())]
    CatalogRead {
        /// Path of the deck file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The deck file is not valid card JSON.
    #[error("failed to parse card catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// The deck contains no cards.
    #[error("card catalog is empty")]
    EmptyCatalog,

    /// Two cards share a name.
    #[error("duplicate card name in catalog: {0}")]
    DuplicateCard(String),

    /// No card matches the requested name.
    #[error("Could not find a card named '{0}'.")]
    CardNotFound(String),

    /// The card's artwork file is not in the artwork directory.
    #[error("Error: Could not find image for {0}.")]
    AssetMissing(String),

    /// The artwork file exists but could not be read.
    #[error("failed to read artwork {}: {source}", .path.display())]
    ArtworkRead {
        /// Path of the artwork file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The artwork could not be decoded, rotated, or re-encoded.
    #[error("failed to transform artwork: {0}")]
    ImageTransform(#[from] image::ImageError),

    /// The caller already received a daily card today.
    #[error("You have already drawn your daily card for today! Come back tomorrow.")]
    AlreadyClaimed,

    /// The daily grant could not be durably recorded.
    #[error("failed to record daily draw in {}: {source}", .path.display())]
    GateWrite {
        /// Path of the grant file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The daily grants could not be serialized.
    #[error("failed to encode daily draws: {0}")]
    GateEncode(serde_json::Error),
}

impl TarotError {
    /// The text shown to the user who issued the command.
    pub fn user_message(&self) -> String {
        match self {
            Self::CardNotFound(_) | Self::AssetMissing(_) | Self::AlreadyClaimed => {
                self.to_string()
            }
            Self::GateWrite { .. } | Self::GateEncode(_) => {
                "Your daily card could not be saved. Please try again later.".into()
            }
            _ => "Something went wrong while reading the cards.".into(),
        }
    }

    /// Whether the reply should only be visible to the caller.
    ///
    /// A missing asset is a content bug, so it is reported publicly.
    pub fn is_private(&self) -> bool {
        !matches!(self, Self::AssetMissing(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_facing_messages() {
        assert_eq!(
            TarotError::CardNotFound("The Jester".into()).user_message(),
            "Could not find a card named 'The Jester'."
        );
        assert_eq!(
            TarotError::AssetMissing("The Fool".into()).user_message(),
            "Error: Could not find image for The Fool."
        );
        assert_eq!(
            TarotError::AlreadyClaimed.user_message(),
            "You have already drawn your daily card for today! Come back tomorrow."
        );
    }

    #[test]
    fn internal_details_stay_out_of_replies() {
        let err = TarotError::GateWrite {
            path: "/srv/arcana/daily_draws.json".into(),
            source: std::io::Error::other("disk full"),
        };
        assert!(!err.user_message().contains("disk full"));
        assert!(err.is_private());
    }

    #[test]
    fn only_missing_assets_are_public() {
        assert!(!TarotError::AssetMissing("The Sun".into()).is_private());
        assert!(TarotError::CardNotFound("x".into()).is_private());
        assert!(TarotError::AlreadyClaimed.is_private());
    }
}
