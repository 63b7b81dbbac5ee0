use alloc::vec::Vec;

use log::debug;

use crate::entity::{Decision, Entity, EntityKind, EntityStatus};
use crate::error::{ActionError, StatusError};
use crate::hand::BLACKJACK;
use crate::result::WinStatus;

use super::GameModel;

impl GameModel {
    fn ensure_current_active(&self) -> Result<(), ActionError> {
        let entity = self.current_entity().ok_or(ActionError::NoGame)?;
        if entity.status() != EntityStatus::Active {
            return Err(ActionError::EntityNotActive);
        }
        Ok(())
    }

    /// Current entity draws a card.
    ///
    /// A total over 21 marks the entity bust; the turn does not move.
    ///
    /// # Errors
    ///
    /// Returns an error if no game is in progress, the current entity is not
    /// active, or the deck is empty.
    pub fn current_entity_hit(&mut self) -> Result<(), ActionError> {
        self.ensure_current_active()?;

        let card = self.deck.draw_one()?;
        let entity = self.current_entity_mut().ok_or(ActionError::NoGame)?;
        entity.hit(card);

        debug!(
            "{} hits {} (total {}, {:?})",
            entity.label(),
            card,
            entity.compute_total(),
            entity.status()
        );
        Ok(())
    }

    /// Current entity stands on its hand.
    ///
    /// # Errors
    ///
    /// Returns an error if no game is in progress or the current entity is
    /// not active.
    pub fn current_entity_stand(&mut self) -> Result<(), ActionError> {
        self.ensure_current_active()?;

        let entity = self.current_entity_mut().ok_or(ActionError::NoGame)?;
        entity
            .set_status(EntityStatus::Stood)
            .map_err(|_| ActionError::EntityNotActive)?;

        debug!("{} stands on {}", entity.label(), entity.compute_total());
        Ok(())
    }

    /// Moves the current entity to `status`.
    ///
    /// Setting the status the entity already has is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StatusError::InvalidTransition`] for an illegal move. Does
    /// nothing if no entity is current.
    pub fn current_entity_set_status(&mut self, status: EntityStatus) -> Result<(), StatusError> {
        match self.current_entity_mut() {
            Some(entity) => entity.set_status(status),
            None => Ok(()),
        }
    }

    /// Round-level check for the current entity.
    ///
    /// The entity wins when no other entity is still active and its total is
    /// at least every other non-busted total. Busted entities are left out of
    /// the comparison.
    #[must_use]
    pub fn get_player_win_status(&self) -> WinStatus {
        let Some(entity) = self.current_entity() else {
            return WinStatus::Undecided;
        };

        let total = entity.compute_total();
        if total > BLACKJACK {
            return WinStatus::Bust;
        }

        let mut others = self.entities.iter().filter(|other| other.id() != entity.id());
        let unbeaten = others.all(|other| match other.status() {
            EntityStatus::Active => false,
            EntityStatus::Bust => true,
            EntityStatus::Stood | EntityStatus::Won => other.compute_total() <= total,
        });

        if unbeaten {
            WinStatus::Win
        } else {
            WinStatus::Undecided
        }
    }

    /// Returns whether anyone at or after the current seat can still act.
    #[must_use]
    pub fn is_game_playable(&self) -> bool {
        self.entities
            .get(self.current..)
            .is_some_and(|rest| rest.iter().any(|e| !e.status().is_terminal()))
    }

    /// Moves the turn to the first active entity, starting at the current
    /// seat.
    ///
    /// Returns `false` and moves past the last seat if nobody can act.
    pub fn next_entity(&mut self) -> bool {
        let start = self.current.min(self.entities.len());
        let next = self.entities[start..]
            .iter()
            .position(|e| !e.status().is_terminal());

        if let Some(offset) = next {
            if offset > 0 {
                debug!("Turn passes to seat {}", start + offset);
            }
            self.current = start + offset;
            true
        } else {
            self.current = self.entities.len();
            false
        }
    }

    /// Asks the current bot's policy what to do.
    ///
    /// # Errors
    ///
    /// Returns an error if no game is in progress, the current entity is a
    /// human, or it is no longer active.
    pub fn get_bot_decision(&self) -> Result<Decision, ActionError> {
        let entity = self.current_entity().ok_or(ActionError::NoGame)?;
        let EntityKind::Bot(policy) = entity.kind() else {
            return Err(ActionError::NotABot);
        };
        if entity.status() != EntityStatus::Active {
            return Err(ActionError::EntityNotActive);
        }

        let decision = policy.decide(entity.hand());
        debug!(
            "{} decides {:?} on {}",
            entity.label(),
            decision,
            entity.compute_total()
        );
        Ok(decision)
    }

    /// Marks every stood entity with the best non-busted total as the winner.
    ///
    /// Ties share the win. Returns the winning seats, empty if everybody
    /// busted. Calling it again returns the same seats.
    pub fn resolve_round(&mut self) -> Vec<usize> {
        let best = self
            .entities
            .iter()
            .filter(|e| matches!(e.status(), EntityStatus::Stood | EntityStatus::Won))
            .map(Entity::compute_total)
            .max();

        let Some(best) = best else {
            return Vec::new();
        };

        let mut winners = Vec::new();
        for entity in &mut self.entities {
            let contender = matches!(entity.status(), EntityStatus::Stood | EntityStatus::Won);
            if contender && entity.compute_total() == best {
                // Stood -> Won is always legal, Won -> Won is a no-op.
                let _ = entity.set_status(EntityStatus::Won);
                winners.push(entity.id());
            }
        }
        winners
    }
}
