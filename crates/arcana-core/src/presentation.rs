//! Platform-agnostic response payloads.
//!
//! A [`Presentation`] is what a chat frontend renders as a rich message:
//! a title, a description, labeled fields, a color, and a reference to the
//! attached artwork.

use crate::card::{Card, Orientation};

/// Maximum length of a field value, in characters.
pub const FIELD_LIMIT: usize = 1024;

/// Title prefix for daily draws.
pub const DAILY_PREFIX: &str = "🌟 Daily Card: ";

/// A labeled block of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field label.
    pub name: String,
    /// Field body, at most [`FIELD_LIMIT`] characters.
    pub value: String,
}

/// Reference to the image attached alongside a presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// File name the attachment is sent under.
    pub filename: String,
}

impl ImageRef {
    /// URL that points a message embed at the attachment.
    pub fn attachment_url(&self) -> String {
        format!("attachment://{}", self.filename)
    }
}

/// A rendered card, ready for a chat frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    /// Heading line.
    pub title: String,
    /// Summary under the title.
    pub description: String,
    /// Labeled fields, in display order.
    pub fields: Vec<Field>,
    /// Accent color (0xRRGGBB).
    pub color: u32,
    /// Attached artwork.
    pub image: ImageRef,
}

impl Presentation {
    fn for_card(card: &Card, title: String, description: String) -> Self {
        Self {
            title,
            description,
            fields: Vec::new(),
            color: card.suit.color(),
            image: ImageRef {
                filename: card.artwork_filename(),
            },
        }
    }

    fn push_field(&mut self, name: &str, value: &str) {
        self.fields.push(Field {
            name: name.to_string(),
            value: truncate_chars(value, FIELD_LIMIT),
        });
    }

    fn push_list(&mut self, name: &str, items: &[String]) {
        if !items.is_empty() {
            self.push_field(name, &items.join(", "));
        }
    }

    /// The value of the field labeled `name`, if present.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}

/// Cut `text` to at most `limit` characters.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}

fn card_summary(card: &Card) -> String {
    format!(
        "**Suit:** {} | **Number:** {} | **Element:** {}",
        card.suit,
        card.number,
        card.element.as_deref().unwrap_or("N/A")
    )
}

/// A drawn card: name, orientation, keywords, and the applicable meaning.
pub fn build_card_presentation(
    card: &Card,
    orientation: Orientation,
    title_prefix: &str,
) -> Presentation {
    let title = format!("{title_prefix}{} ({orientation})", card.name);
    let mut p = Presentation::for_card(card, title, card_summary(card));
    if let Some(sign) = &card.zodiac_sign {
        p.push_field("Astrology", sign);
    }
    p.push_list("Keywords", &card.keywords);
    p.push_field("Meaning", card.meaning(orientation));
    p
}

/// Full details of a card looked up by name.
pub fn build_lookup_presentation(card: &Card) -> Presentation {
    let mut p = Presentation::for_card(card, format!("📖 {}", card.name), card_summary(card));
    if let Some(sign) = &card.zodiac_sign {
        p.push_field("Astrology", sign);
    }
    p.push_list("Symbols", &card.symbols);
    p.push_list("Keywords", &card.keywords);
    p.push_field("Upright Meaning", &card.upright_meaning);
    p.push_field("Reversed Meaning", &card.reversed_meaning);
    if let Some(answer) = &card.yes_no {
        p.push_field("Yes/No", answer);
    }
    p
}

/// A card drawn in answer to a yes/no question.
pub fn build_oracle_answer_presentation(
    card: &Card,
    orientation: Orientation,
    question: &str,
) -> Presentation {
    let description = format!(
        "**Card Drawn:** {} ({orientation})\n{}",
        card.name,
        card_summary(card)
    );
    let mut p = Presentation::for_card(card, format!("Question: {question}"), description);
    if let Some(answer) = &card.yes_no {
        p.push_field("Yes/No", answer);
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;
    use crate::card::tests::card;
    use proptest::prelude::*;

    fn magician() -> Card {
        Card {
            element: Some("Air".into()),
            zodiac_sign: Some("Mercury".into()),
            symbols: vec!["Wand".into(), "Infinity".into()],
            keywords: vec!["Willpower".into(), "Skill".into()],
            yes_no: Some("Yes".into()),
            ..card("The Magician", Suit::MajorArcana, 1)
        }
    }

    fn names(p: &Presentation) -> Vec<&str> {
        p.fields.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn card_presentation_layout() {
        let p = build_card_presentation(&magician(), Orientation::Upright, "");
        assert_eq!(p.title, "The Magician (Upright)");
        assert_eq!(
            p.description,
            "**Suit:** Major Arcana | **Number:** 1 | **Element:** Air"
        );
        assert_eq!(names(&p), vec!["Astrology", "Keywords", "Meaning"]);
        assert_eq!(p.field("Keywords"), Some("Willpower, Skill"));
        assert_eq!(p.field("Meaning"), Some("The Magician upright"));
        assert_eq!(p.color, 0x4a0072);
        assert_eq!(p.image.filename, "01-TheMagician.jpg");
        assert_eq!(p.image.attachment_url(), "attachment://01-TheMagician.jpg");
    }

    #[test]
    fn reversed_card_uses_reversed_meaning() {
        let p = build_card_presentation(&magician(), Orientation::Reversed, "");
        assert_eq!(p.title, "The Magician (Reversed)");
        assert_eq!(p.field("Meaning"), Some("The Magician reversed"));
    }

    #[test]
    fn daily_prefix() {
        let p = build_card_presentation(&magician(), Orientation::Upright, DAILY_PREFIX);
        assert_eq!(p.title, "🌟 Daily Card: The Magician (Upright)");
    }

    #[test]
    fn draw_never_shows_yes_no() {
        let p = build_card_presentation(&magician(), Orientation::Upright, "");
        assert_eq!(p.field("Yes/No"), None);
    }

    #[test]
    fn missing_element_shows_na() {
        let c = card("Three of Swords", Suit::Swords, 3);
        let p = build_card_presentation(&c, Orientation::Upright, "");
        assert_eq!(
            p.description,
            "**Suit:** Swords | **Number:** 3 | **Element:** N/A"
        );
        assert_eq!(p.color, 0xf39c12);
    }

    #[test]
    fn bare_card_has_only_meaning() {
        let c = card("Four of Pentacles", Suit::Pentacles, 4);
        let p = build_card_presentation(&c, Orientation::Upright, "");
        assert_eq!(names(&p), vec!["Meaning"]);
    }

    #[test]
    fn lookup_layout() {
        let p = build_lookup_presentation(&magician());
        assert_eq!(p.title, "📖 The Magician");
        assert_eq!(
            names(&p),
            vec![
                "Astrology",
                "Symbols",
                "Keywords",
                "Upright Meaning",
                "Reversed Meaning",
                "Yes/No"
            ]
        );
        assert_eq!(p.field("Symbols"), Some("Wand, Infinity"));
        assert_eq!(p.field("Yes/No"), Some("Yes"));
    }

    #[test]
    fn lookup_omits_absent_fields() {
        let c = card("Page of Cups", Suit::Cups, 11);
        let p = build_lookup_presentation(&c);
        assert_eq!(names(&p), vec!["Upright Meaning", "Reversed Meaning"]);
    }

    #[test]
    fn lookup_truncates_long_meanings() {
        let c = Card {
            upright_meaning: "é".repeat(3000),
            reversed_meaning: "x".repeat(1024),
            ..card("The Tower", Suit::MajorArcana, 16)
        };
        let p = build_lookup_presentation(&c);
        let upright = p.field("Upright Meaning").unwrap();
        assert_eq!(upright.chars().count(), 1024);
        assert_eq!(p.field("Reversed Meaning").unwrap().len(), 1024);
    }

    #[test]
    fn oracle_layout() {
        let p = build_oracle_answer_presentation(
            &magician(),
            Orientation::Reversed,
            "Will it rain?",
        );
        assert_eq!(p.title, "Question: Will it rain?");
        assert_eq!(
            p.description,
            "**Card Drawn:** The Magician (Reversed)\n**Suit:** Major Arcana | **Number:** 1 | **Element:** Air"
        );
        assert_eq!(names(&p), vec!["Yes/No"]);
    }

    #[test]
    fn oracle_without_answer_has_no_fields() {
        let c = card("Nine of Wands", Suit::Wands, 9);
        let p = build_oracle_answer_presentation(&c, Orientation::Upright, "Should I?");
        assert!(p.fields.is_empty());
        assert_eq!(p.color, 0xc0392b);
        assert_eq!(p.image.filename, "Wands09.jpg");
    }

    #[test]
    fn astrology_only_with_zodiac() {
        let plain = card("The Star", Suit::MajorArcana, 17);
        assert_eq!(build_lookup_presentation(&plain).field("Astrology"), None);
        let starry = Card {
            zodiac_sign: Some("Aquarius".into()),
            ..plain
        };
        assert_eq!(
            build_lookup_presentation(&starry).field("Astrology"),
            Some("Aquarius")
        );
    }

    #[test]
    fn shipped_deck_lookups_have_both_meanings() {
        let deck = crate::Catalog::from_json(include_str!("../../../data/cards.json")).unwrap();
        assert_eq!(deck.len(), 78);
        for c in deck.cards() {
            let p = build_lookup_presentation(c);
            for name in ["Upright Meaning", "Reversed Meaning"] {
                let value = p.field(name).unwrap_or_else(|| panic!("{}: no {name}", c.name));
                assert!(value.chars().count() <= FIELD_LIMIT);
            }
        }
    }

    proptest! {
        #[test]
        fn truncation_respects_limit(text in ".{0,1500}", limit in 0usize..1200) {
            let cut = truncate_chars(&text, limit);
            prop_assert!(cut.chars().count() <= limit);
            prop_assert!(text.starts_with(&cut));
            if text.chars().count() <= limit {
                prop_assert_eq!(cut, text);
            }
        }
    }
}
