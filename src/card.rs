//! Card types.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    const fn symbol(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but count as zero when a hand is totalled.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == 1
    }

    /// Returns the card's points with an ace counted high.
    ///
    /// Whether an ace is finally worth 11 or 1 is decided by the hand total.
    #[must_use]
    pub const fn points(&self) -> u8 {
        match self.rank {
            1 => 11,
            2..=10 => self.rank,
            11..=13 => 10,
            _ => 0,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            1 => write!(f, "A{}", self.suit.symbol()),
            11 => write!(f, "J{}", self.suit.symbol()),
            12 => write!(f, "Q{}", self.suit.symbol()),
            13 => write!(f, "K{}", self.suit.symbol()),
            rank => write!(f, "{rank}{}", self.suit.symbol()),
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn face_cards_are_worth_ten() {
        for rank in 10..=13 {
            assert_eq!(Card::new(Suit::Clubs, rank).points(), 10);
        }
        assert_eq!(Card::new(Suit::Clubs, 1).points(), 11);
    }

    #[test]
    fn display_uses_short_names() {
        assert_eq!(Card::new(Suit::Hearts, 1).to_string(), "AH");
        assert_eq!(Card::new(Suit::Spades, 10).to_string(), "10S");
        assert_eq!(Card::new(Suit::Diamonds, 12).to_string(), "QD");
    }
}
