//! Tarot deck, draw engine, and daily gate for the Arcana chat bot.
//!
//! The crate is platform-agnostic: it loads the deck, draws cards with an
//! injected random source, enforces one free daily draw per caller, and
//! assembles [`Presentation`]s plus artwork attachments. Rendering them for a
//! particular chat platform is left to the caller.

pub mod artwork;
pub mod card;
pub mod catalog;
pub mod config;
pub mod draw;
pub mod error;
pub mod gate;
pub mod presentation;
pub mod service;

pub use artwork::{ArtworkStore, Attachment};
pub use card::{Card, Orientation, Suit};
pub use catalog::Catalog;
pub use config::ArcanaConfig;
pub use draw::{Draw, draw};
pub use error::{TarotError, TarotResult};
pub use gate::{DailyGate, GateStatus, today_utc};
pub use presentation::{Field, ImageRef, Presentation};
pub use service::{Choice, Reading, TarotService};
