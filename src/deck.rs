//! A single shuffled deck.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DeckError;

/// An ordered, finite sequence of cards.
///
/// Cards are drawn from the top. A deck is never refilled; a new game builds
/// a fresh one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    /// Remaining cards, top of the deck last.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck shuffled with a `ChaCha8Rng` seeded from `seed`.
    ///
    /// ```
    /// use bjtable::{DECK_SIZE, Deck};
    ///
    /// assert_eq!(Deck::shuffled(7), Deck::shuffled(7));
    /// assert_eq!(Deck::shuffled(7).remaining(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::shuffled_with(&mut rng)
    }

    /// Creates a full deck shuffled with the given random number generator.
    pub fn shuffled_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates a deck that yields `draws` in order, first element first.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards remain.
    pub fn draw_one(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffled_deck_holds_every_card_once() {
        let mut deck = Deck::shuffled(3);
        let mut seen = Vec::new();
        while let Ok(card) = deck.draw_one() {
            assert!(!seen.contains(&card));
            seen.push(card);
        }
        assert_eq!(seen.len(), DECK_SIZE);
        assert_eq!(deck.draw_one(), Err(DeckError::Empty));
    }

    #[test]
    fn from_draws_keeps_order() {
        let first = Card::new(Suit::Hearts, 10);
        let second = Card::new(Suit::Clubs, 5);
        let mut deck = Deck::from_draws(&[first, second]);
        assert_eq!(deck.draw_one(), Ok(first));
        assert_eq!(deck.draw_one(), Ok(second));
        assert!(deck.is_empty());
    }

    #[test]
    fn different_seeds_shuffle_differently() {
        assert_ne!(Deck::shuffled(1), Deck::shuffled(2));
    }
}
