//! The immutable deck loaded at startup.

use std::collections::HashSet;
use std::path::Path;

use crate::card::Card;
use crate::error::{TarotError, TarotResult};

/// Maximum number of results returned by [`Catalog::search`].
pub const MAX_CHOICES: usize = 25;

/// The full deck, in file order.
///
/// Never empty and never mutated after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    cards: Vec<Card>,
}

impl Catalog {
    /// Build a catalog, rejecting an empty deck and duplicate names.
    ///
    /// Names are compared case-insensitively because lookups are.
    pub fn new(cards: Vec<Card>) -> TarotResult<Self> {
        if cards.is_empty() {
            return Err(TarotError::EmptyCatalog);
        }
        let mut seen = HashSet::new();
        for card in &cards {
            if !seen.insert(card.name.to_lowercase()) {
                return Err(TarotError::DuplicateCard(card.name.clone()));
            }
        }
        Ok(Self { cards })
    }

    /// Parse a deck from its JSON representation (an array of cards).
    pub fn from_json(json: &str) -> TarotResult<Self> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        Self::new(cards)
    }

    /// Read and parse the deck file.
    pub fn load(path: &Path) -> TarotResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| TarotError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(cards = catalog.len(), path = %path.display(), "loaded card catalog");
        Ok(catalog)
    }

    /// All cards in deck order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is empty; never true for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Find a card by exact name, ignoring case.
    pub fn find_by_name(&self, name: &str) -> TarotResult<&Card> {
        let wanted = name.to_lowercase();
        self.cards
            .iter()
            .find(|c| c.name.to_lowercase() == wanted)
            .ok_or_else(|| TarotError::CardNotFound(name.to_string()))
    }

    /// Cards whose name contains `query` (ignoring case) or whose number
    /// equals `query`, in deck order, at most [`MAX_CHOICES`].
    pub fn search(&self, query: &str) -> Vec<&Card> {
        let query = query.to_lowercase();
        self.cards
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&query) || c.number.to_string() == query)
            .take(MAX_CHOICES)
            .collect()
    }
}
