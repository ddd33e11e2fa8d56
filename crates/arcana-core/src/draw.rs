//! Random card selection.
//!
//! Every card is equally likely. Orientation is chosen independently and
//! comes up reversed 30% of the time.

use rand::Rng;

use crate::card::{Card, Orientation};
use crate::catalog::Catalog;

/// Probability that a drawn card is reversed.
pub const REVERSED_CHANCE: f64 = 0.30;

/// A card drawn from the deck together with its orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw<'a> {
    /// The drawn card.
    pub card: &'a Card,
    /// How the card landed.
    pub orientation: Orientation,
}

/// Draw one card uniformly from the deck.
pub fn draw<'a, R: Rng + ?Sized>(catalog: &'a Catalog, rng: &mut R) -> Draw<'a> {
    let cards = catalog.cards();
    let card = &cards[rng.random_range(0..cards.len())];
    let orientation = if rng.random_bool(REVERSED_CHANCE) {
        Orientation::Reversed
    } else {
        Orientation::Upright
    };
    Draw { card, orientation }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;
    use crate::card::tests::card;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn deck(size: u32) -> Catalog {
        Catalog::new(
            (0..size)
                .map(|n| card(&format!("Card {n}"), Suit::MajorArcana, n))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn draw_deterministic() {
        let catalog = deck(22);
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            assert_eq!(draw(&catalog, &mut rng1), draw(&catalog, &mut rng2));
        }
    }

    #[test]
    fn single_card_deck_always_draws_it() {
        let catalog = deck(1);
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..20 {
            assert_eq!(draw(&catalog, &mut rng).card.name, "Card 0");
        }
    }

    #[test]
    fn reversed_rate_near_thirty_percent() {
        let catalog = deck(22);
        let mut rng = StdRng::seed_from_u64(7);
        let trials = 1000;
        let reversed = (0..trials)
            .filter(|_| draw(&catalog, &mut rng).orientation.is_reversed())
            .count();
        // Binomial sd is ~14.5 for n=1000, p=0.3; allow four of them.
        assert!((242..=358).contains(&reversed), "reversed {reversed}/{trials}");
    }

    #[test]
    fn selection_is_uniform() {
        let catalog = deck(10);
        let mut rng = StdRng::seed_from_u64(1234);
        let trials = 1000;
        let mut counts = [0u32; 10];
        for _ in 0..trials {
            counts[draw(&catalog, &mut rng).card.number as usize] += 1;
        }
        // Expected 100 per card, sd ~9.5.
        for (n, count) in counts.iter().enumerate() {
            assert!((55..=145).contains(count), "card {n} drawn {count} times");
        }
        let chi_square: f64 = counts
            .iter()
            .map(|&c| (f64::from(c) - 100.0).powi(2) / 100.0)
            .sum();
        // 9 degrees of freedom, p = 0.001 critical value.
        assert!(chi_square < 27.88, "chi-square {chi_square}");
    }

    #[test]
    fn orientation_independent_of_card() {
        let catalog = deck(2);
        let mut rng = StdRng::seed_from_u64(99);
        let mut reversed = [0u32; 2];
        let mut drawn = [0u32; 2];
        for _ in 0..2000 {
            let d = draw(&catalog, &mut rng);
            let i = d.card.number as usize;
            drawn[i] += 1;
            if d.orientation.is_reversed() {
                reversed[i] += 1;
            }
        }
        for i in 0..2 {
            let rate = f64::from(reversed[i]) / f64::from(drawn[i]);
            assert!((0.24..=0.36).contains(&rate), "card {i} reversed rate {rate}");
        }
    }
}
