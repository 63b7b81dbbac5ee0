//! Round outcome and snapshot types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::entity::{Entity, EntityStatus};

/// Outcome of the round-level check for the current entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinStatus {
    /// Nobody left to act beats or could still beat this total.
    Win,
    /// Total is over 21.
    Bust,
    /// Neither yet.
    Undecided,
}

/// Read-only view of one entity, for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySummary {
    /// Seat index.
    pub id: usize,
    /// Display name.
    pub label: String,
    /// Whether the seat is played by a bot.
    pub is_bot: bool,
    /// Cards in dealing order.
    pub cards: Vec<Card>,
    /// Best hand total.
    pub total: u8,
    /// Status at snapshot time.
    pub status: EntityStatus,
}

impl From<&Entity> for EntitySummary {
    fn from(entity: &Entity) -> Self {
        Self {
            id: entity.id(),
            label: entity.label(),
            is_bot: entity.is_bot(),
            cards: entity.hand().cards().to_vec(),
            total: entity.compute_total(),
            status: entity.status(),
        }
    }
}

/// Summary shown when a round is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndGameStats {
    /// Every entity in seat order.
    pub entities: Vec<EntitySummary>,
    /// Seats of the winners. Empty when everybody went bust.
    pub winners: Vec<usize>,
}

impl EndGameStats {
    /// Returns whether the human player (seat 0) is among the winners.
    #[must_use]
    pub fn player_won(&self) -> bool {
        self.winners.contains(&0)
    }
}
