//! Table participants: the human player and the bots.

use alloc::format;
use alloc::string::String;

use crate::card::Card;
use crate::error::StatusError;
use crate::hand::{BLACKJACK, Hand};

/// Default total below which a bot keeps drawing.
pub const DEFAULT_HIT_BELOW: u8 = 17;

/// Entity status within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityStatus {
    /// Still taking actions.
    Active,
    /// Stopped drawing cards.
    Stood,
    /// Hand went over 21.
    Bust,
    /// Won the round.
    Won,
}

impl EntityStatus {
    /// Returns whether the entity can no longer act this round.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }

    /// Returns whether moving from `self` to `next` is a legal transition.
    #[must_use]
    pub const fn can_become(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Active, Self::Active | Self::Stood | Self::Bust)
                | (Self::Stood, Self::Stood | Self::Won)
                | (Self::Bust, Self::Bust)
                | (Self::Won, Self::Won)
        )
    }
}

/// An action a bot policy can choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Draw another card.
    Hit,
    /// Stop drawing.
    Stand,
}

/// Threshold policy used by bots: hit while the total is below `hit_below`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BotPolicy {
    /// Totals strictly below this value draw another card.
    pub hit_below: u8,
}

impl BotPolicy {
    /// Creates a policy with the given threshold.
    #[must_use]
    pub const fn new(hit_below: u8) -> Self {
        Self { hit_below }
    }

    /// Chooses an action for `hand`. Depends on the hand total only.
    ///
    /// ```
    /// use bjtable::{BotPolicy, Card, Decision, Hand, Suit};
    ///
    /// let policy = BotPolicy::default();
    /// let hand = Hand::from_cards(&[Card::new(Suit::Hearts, 10), Card::new(Suit::Clubs, 6)]);
    /// assert_eq!(policy.decide(&hand), Decision::Hit);
    /// ```
    #[must_use]
    pub fn decide(&self, hand: &Hand) -> Decision {
        if hand.value() < self.hit_below {
            Decision::Hit
        } else {
            Decision::Stand
        }
    }
}

impl Default for BotPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_HIT_BELOW)
    }
}

/// Who controls an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Controlled through the view.
    Human,
    /// Controlled by a policy.
    Bot(BotPolicy),
}

/// A participant in the round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Seat index at the table.
    id: usize,
    kind: EntityKind,
    hand: Hand,
    status: EntityStatus,
}

impl Entity {
    /// Creates the human player at `id` with an empty hand.
    #[must_use]
    pub const fn human(id: usize) -> Self {
        Self::new(id, EntityKind::Human)
    }

    /// Creates a bot at `id` with an empty hand.
    #[must_use]
    pub const fn bot(id: usize, policy: BotPolicy) -> Self {
        Self::new(id, EntityKind::Bot(policy))
    }

    const fn new(id: usize, kind: EntityKind) -> Self {
        Self {
            id,
            kind,
            hand: Hand::new(),
            status: EntityStatus::Active,
        }
    }

    /// Returns the seat index.
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Returns who controls the entity.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Returns whether the entity is a bot.
    #[must_use]
    pub const fn is_bot(&self) -> bool {
        matches!(self.kind, EntityKind::Bot(_))
    }

    /// Returns the hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> EntityStatus {
        self.status
    }

    /// Display name: `Player` for the human, `Bot k` for the k-th bot.
    #[must_use]
    pub fn label(&self) -> String {
        match self.kind {
            EntityKind::Human => String::from("Player"),
            EntityKind::Bot(_) => format!("Bot {}", self.id),
        }
    }

    /// Adds a card to the hand. Going over 21 marks the entity bust.
    pub fn hit(&mut self, card: Card) {
        self.hand.add_card(card);
        if self.compute_total() > BLACKJACK {
            self.status = EntityStatus::Bust;
        }
    }

    /// Returns the best total of the hand.
    #[must_use]
    pub fn compute_total(&self) -> u8 {
        self.hand.value()
    }

    /// Moves the entity to `status`.
    ///
    /// # Errors
    ///
    /// Returns [`StatusError::InvalidTransition`] if the move is not allowed,
    /// for example `Active` straight to `Won`.
    pub const fn set_status(&mut self, status: EntityStatus) -> Result<(), StatusError> {
        if !self.status.can_become(status) {
            return Err(StatusError::InvalidTransition {
                from: self.status,
                to: status,
            });
        }
        self.status = status;
        Ok(())
    }

    /// Asks the entity's policy for an action. Humans have no policy.
    #[must_use]
    pub fn decide(&self) -> Option<Decision> {
        match self.kind {
            EntityKind::Human => None,
            EntityKind::Bot(policy) => Some(policy.decide(&self.hand)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    #[test]
    fn won_only_follows_stood() {
        let mut entity = Entity::human(0);
        assert_eq!(
            entity.set_status(EntityStatus::Won),
            Err(StatusError::InvalidTransition {
                from: EntityStatus::Active,
                to: EntityStatus::Won,
            })
        );
        entity.set_status(EntityStatus::Stood).unwrap();
        entity.set_status(EntityStatus::Won).unwrap();
        assert_eq!(entity.status(), EntityStatus::Won);
    }

    #[test]
    fn hit_over_twenty_one_busts() {
        let mut entity = Entity::bot(1, BotPolicy::default());
        entity.hit(Card::new(Suit::Hearts, 10));
        entity.hit(Card::new(Suit::Clubs, 9));
        assert_eq!(entity.status(), EntityStatus::Active);
        entity.hit(Card::new(Suit::Spades, 5));
        assert_eq!(entity.compute_total(), 24);
        assert_eq!(entity.status(), EntityStatus::Bust);
        assert!(entity.set_status(EntityStatus::Stood).is_err());
    }

    #[test]
    fn labels() {
        assert_eq!(Entity::human(0).label(), "Player");
        assert_eq!(Entity::bot(2, BotPolicy::default()).label(), "Bot 2");
    }
}
