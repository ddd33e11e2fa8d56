//! Card definitions, suits, and orientation.

use serde::{Deserialize, Serialize};

/// The suit a card belongs to.
///
/// Unknown suit names from the deck file are kept verbatim in
/// [`Suit::Other`] so that a hand-edited deck still loads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Suit {
    /// The 22 trump cards.
    MajorArcana,
    /// Fire.
    Wands,
    /// Water.
    Cups,
    /// Air.
    Swords,
    /// Earth.
    Pentacles,
    /// Any suit name not listed above.
    Other(String),
}

impl Suit {
    /// The suit name as written in the deck file.
    pub fn as_str(&self) -> &str {
        match self {
            Self::MajorArcana => "Major Arcana",
            Self::Wands => "Wands",
            Self::Cups => "Cups",
            Self::Swords => "Swords",
            Self::Pentacles => "Pentacles",
            Self::Other(name) => name,
        }
    }

    /// Embed color for cards of this suit.
    pub fn color(&self) -> u32 {
        match self {
            Self::MajorArcana => 0x4a0072,
            Self::Wands => 0xc0392b,
            Self::Cups => 0x2980b9,
            Self::Swords => 0xf39c12,
            Self::Pentacles => 0x27ae60,
            Self::Other(_) => DEFAULT_COLOR,
        }
    }
}

/// Color used when a suit has no entry of its own.
pub const DEFAULT_COLOR: u32 = 0x4a0072;

impl From<String> for Suit {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Major Arcana" => Self::MajorArcana,
            "Wands" => Self::Wands,
            "Cups" => Self::Cups,
            "Swords" => Self::Swords,
            "Pentacles" => Self::Pentacles,
            _ => Self::Other(s),
        }
    }
}

impl From<Suit> for String {
    fn from(suit: Suit) -> Self {
        suit.as_str().to_string()
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a drawn card landed upright or reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Read as printed.
    Upright,
    /// Upside down; the reversed meaning applies and the artwork is rotated.
    Reversed,
}

impl Orientation {
    /// Whether this is [`Orientation::Reversed`].
    pub fn is_reversed(self) -> bool {
        self == Self::Reversed
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upright => write!(f, "Upright"),
            Self::Reversed => write!(f, "Reversed"),
        }
    }
}

/// A single card of the deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Display name, unique within the deck.
    pub name: String,
    /// Suit the card belongs to.
    pub suit: Suit,
    /// Card number within its suit (0-21 for the Major Arcana).
    pub number: u32,
    /// Classical element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    /// Associated zodiac sign or planet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zodiac_sign: Option<String>,
    /// Imagery on the card.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub symbols: Vec<String>,
    /// Short keywords.
    #[serde(default, rename = "meanings", skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    /// Meaning when drawn upright.
    pub upright_meaning: String,
    /// Meaning when drawn reversed.
    pub reversed_meaning: String,
    /// Oracle answer for yes/no questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yes_no: Option<String>,
}

impl Card {
    /// The meaning that applies in the given orientation.
    pub fn meaning(&self, orientation: Orientation) -> &str {
        match orientation {
            Orientation::Upright => &self.upright_meaning,
            Orientation::Reversed => &self.reversed_meaning,
        }
    }

    /// File name of this card's artwork.
    ///
    /// Major Arcana: `00-TheFool.jpg`. Minor suits: `Wands07.jpg`.
    pub fn artwork_filename(&self) -> String {
        match &self.suit {
            Suit::MajorArcana => {
                let name: String = self.name.chars().filter(|c| *c != ' ').collect();
                format!("{:02}-{name}.jpg", self.number)
            }
            suit => format!("{suit}{:02}.jpg", self.number),
        }
    }
}
