//! The four bot operations, independent of any chat platform.

use std::sync::{Mutex, PoisonError};

use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::artwork::{ArtworkStore, Attachment};
use crate::card::Orientation;
use crate::catalog::Catalog;
use crate::config::ArcanaConfig;
use crate::draw::{Draw, draw};
use crate::error::{TarotError, TarotResult};
use crate::gate::{DailyGate, GateStatus};
use crate::presentation::{
    DAILY_PREFIX, Presentation, build_card_presentation, build_lookup_presentation,
    build_oracle_answer_presentation,
};

/// A presentation together with the artwork it references.
#[derive(Debug, Clone)]
pub struct Reading {
    /// What to show.
    pub presentation: Presentation,
    /// The card image.
    pub attachment: Attachment,
}

/// An autocomplete suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Shown to the user.
    pub name: String,
    /// Submitted when picked.
    pub value: String,
}

/// Serves lookups, draws, oracle questions, and daily draws.
#[derive(Debug)]
pub struct TarotService {
    catalog: Catalog,
    artwork: ArtworkStore,
    gate: DailyGate,
    rng: Mutex<StdRng>,
}

impl TarotService {
    /// Assemble a service from its parts.
    pub fn new(catalog: Catalog, artwork: ArtworkStore, gate: DailyGate, rng: StdRng) -> Self {
        Self {
            catalog,
            artwork,
            gate,
            rng: Mutex::new(rng),
        }
    }

    /// Load the deck and wire everything up as described by `config`.
    ///
    /// Fails if the deck cannot be loaded.
    pub fn from_config(config: &ArcanaConfig) -> TarotResult<Self> {
        let catalog = Catalog::load(config.cards_path())?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self::new(
            catalog,
            ArtworkStore::new(&config.images_dir),
            DailyGate::new(config.daily_path()),
            rng,
        ))
    }

    /// The loaded deck.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The artwork directory.
    pub fn artwork(&self) -> &ArtworkStore {
        &self.artwork
    }

    fn pick(&self) -> Draw<'_> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        draw(&self.catalog, &mut *rng)
    }

    /// Full details of the card called `name`.
    pub fn lookup(&self, name: &str) -> TarotResult<Reading> {
        let card = self.catalog.find_by_name(name)?;
        let presentation = build_lookup_presentation(card);
        let attachment = self.artwork.load(card, Orientation::Upright)?;
        Ok(Reading {
            presentation,
            attachment,
        })
    }

    /// Draw a random card.
    pub fn draw_card(&self) -> TarotResult<Reading> {
        let Draw { card, orientation } = self.pick();
        tracing::debug!(card = %card.name, %orientation, "drew card");
        let presentation = build_card_presentation(card, orientation, "");
        let attachment = self.artwork.load(card, orientation)?;
        Ok(Reading {
            presentation,
            attachment,
        })
    }

    /// Draw a card in answer to a yes/no `question`.
    pub fn yes_or_no(&self, question: &str) -> TarotResult<Reading> {
        let Draw { card, orientation } = self.pick();
        tracing::debug!(card = %card.name, %orientation, "drew oracle card");
        let presentation = build_oracle_answer_presentation(card, orientation, question);
        let attachment = self.artwork.load(card, orientation)?;
        Ok(Reading {
            presentation,
            attachment,
        })
    }

    /// The free daily draw for `caller`.
    ///
    /// The grant is recorded only after the artwork has been prepared, so a
    /// failed draw can be retried the same day.
    pub fn daily(&self, caller: &str, today: NaiveDate) -> TarotResult<Reading> {
        if self.gate.check_and_consume(caller, today) == GateStatus::AlreadyClaimedToday {
            return Err(TarotError::AlreadyClaimed);
        }
        let Draw { card, orientation } = self.pick();
        let presentation = build_card_presentation(card, orientation, DAILY_PREFIX);
        let attachment = self.artwork.load(card, orientation)?;
        self.gate.confirm(caller, today)?;
        tracing::info!(caller, card = %card.name, %orientation, "daily card drawn");
        Ok(Reading {
            presentation,
            attachment,
        })
    }

    /// Suggestions for a partially typed card name or number.
    pub fn autocomplete(&self, partial: &str) -> Vec<Choice> {
        self.catalog
            .search(partial)
            .into_iter()
            .map(|card| Choice {
                name: card.name.clone(),
                value: card.name.clone(),
            })
            .collect()
    }
}
