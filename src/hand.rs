//! Hand representation and valuation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest total that is not a bust.
pub const BLACKJACK: u8 = 21;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.points());
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// An ordered set of cards held by a player or bot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in the order they were dealt.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards`.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn hand(ranks: &[u8]) -> Hand {
        let mut hand = Hand::new();
        for &rank in ranks {
            hand.add_card(Card::new(Suit::Spades, rank));
        }
        hand
    }

    #[test]
    fn aces_drop_to_one_only_when_needed() {
        assert_eq!(hand(&[1, 9]).value(), 20);
        assert!(hand(&[1, 9]).is_soft());
        assert_eq!(hand(&[1, 9, 5]).value(), 15);
        assert!(!hand(&[1, 9, 5]).is_soft());
        assert_eq!(hand(&[1, 1]).value(), 12);
        assert_eq!(hand(&[1, 1, 1, 1, 13]).value(), 14);
    }

    #[test]
    fn bust_over_twenty_one() {
        assert!(!hand(&[13, 1]).is_bust());
        assert!(hand(&[13, 12, 2]).is_bust());
    }
}
