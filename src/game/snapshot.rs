use alloc::vec::Vec;

use crate::entity::{Entity, EntityStatus};
use crate::result::{EndGameStats, EntitySummary};
use crate::view::UpdateCommand;

use super::GameModel;

impl GameModel {
    /// Builds the commands that redraw the game frame.
    ///
    /// One [`UpdateCommand::ShowEntity`] per seat, then the current seat and
    /// the deck size.
    #[must_use]
    pub fn get_update_commands(&self) -> Vec<UpdateCommand> {
        let mut commands: Vec<UpdateCommand> = self
            .entities
            .iter()
            .map(|entity| UpdateCommand::ShowEntity(EntitySummary::from(entity)))
            .collect();

        commands.push(UpdateCommand::SetCurrent(
            self.current_entity().map(Entity::id),
        ));
        commands.push(UpdateCommand::SetCardsRemaining(self.deck.remaining()));
        commands
    }

    /// Builds the standings shown on the end frame.
    #[must_use]
    pub fn get_end_game_stats(&self) -> EndGameStats {
        EndGameStats {
            entities: self.entities.iter().map(EntitySummary::from).collect(),
            winners: self
                .entities
                .iter()
                .filter(|e| e.status() == EntityStatus::Won)
                .map(Entity::id)
                .collect(),
        }
    }
}
