//! Turn-sequencing state machine.
//!
//! The [`Controller`] sits between a [`View`] and the [`GameModel`]. Every
//! entry point runs to completion: a human action is applied, then bots play
//! until it is the human's turn again or the round is over.

use alloc::string::ToString;

use log::{debug, error, info};

use crate::deck::Deck;
use crate::entity::{Decision, EntityStatus};
use crate::error::{ActionError, ConfigError, ControllerError};
use crate::game::GameModel;
use crate::options::GameOptions;
use crate::result::WinStatus;
use crate::view::{Delay, Frame, FrameUpdate, View};

pub mod state;

pub use state::ControllerState;

/// Default pause before a bot acts, in milliseconds.
pub const BOT_DELAY_MS: u64 = 1000;

/// Drives a [`GameModel`] on behalf of a [`View`].
pub struct Controller<V, D> {
    view: V,
    delay: D,
    model: GameModel,
    state: ControllerState,
    /// Delay toggle read from the startup inputs.
    bot_delay: bool,
}

impl<V: View, D: Delay> Controller<V, D> {
    /// Creates a controller in the [`ControllerState::Startup`] state.
    #[must_use]
    pub fn new(view: V, delay: D, options: GameOptions) -> Self {
        Self {
            view,
            delay,
            model: GameModel::new(options),
            state: ControllerState::Startup,
            bot_delay: false,
        }
    }

    /// Returns the state machine's phase.
    #[must_use]
    pub const fn state(&self) -> ControllerState {
        self.state
    }

    /// Returns the game model.
    #[must_use]
    pub const fn model(&self) -> &GameModel {
        &self.model
    }

    /// Returns the view.
    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Returns the view mutably.
    pub const fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Returns the delay capability.
    #[must_use]
    pub const fn delay(&self) -> &D {
        &self.delay
    }

    /// Shows the startup frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the view has no startup frame.
    pub fn launch(&mut self) -> Result<(), ControllerError> {
        self.view.show_frame(Frame::Startup)?;
        self.state = ControllerState::Startup;
        Ok(())
    }

    /// Starts a game with the inputs collected on the startup frame.
    ///
    /// # Errors
    ///
    /// Returns an error if a game is already running, too many bots were
    /// requested, a frame is missing, or the deck runs out. Running out of
    /// cards is also reported through [`View::show_error`].
    pub fn start_game(&mut self) -> Result<(), ControllerError> {
        let result = self.try_start_game(None);
        self.surface(result)
    }

    /// Like [`Controller::start_game`], but deals from `deck` instead of a
    /// fresh shuffle. Used to replay a known game.
    ///
    /// # Errors
    ///
    /// Same as [`Controller::start_game`].
    pub fn start_game_with_deck(&mut self, deck: Deck) -> Result<(), ControllerError> {
        let result = self.try_start_game(Some(deck));
        self.surface(result)
    }

    fn try_start_game(&mut self, deck: Option<Deck>) -> Result<(), ControllerError> {
        if !self.state.can_start_game() {
            return Err(ControllerError::InvalidState(self.state));
        }

        let inputs = self.view.get_inputs();
        let max = self.model.options().max_bots;
        if inputs.amount_of_bots > max {
            return Err(ConfigError::TooManyBots {
                requested: inputs.amount_of_bots,
                max,
            }
            .into());
        }
        self.bot_delay = inputs.bot_delay_enabled;

        self.view.show_frame(Frame::Game)?;
        match deck {
            Some(deck) => self.model.init_game_with_deck(inputs.amount_of_bots, deck)?,
            None => self.model.init_game(inputs.amount_of_bots)?,
        }
        self.state = ControllerState::Playing;
        info!(
            "Starting game with {} bot(s), bot delay {}",
            inputs.amount_of_bots,
            if self.bot_delay { "on" } else { "off" }
        );

        self.refresh();
        self.game_loop()
    }

    /// The player draws a card.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is being played, it is not the player's
    /// turn, or the deck runs out.
    pub fn on_hit(&mut self) -> Result<(), ControllerError> {
        let result = self.ensure_player_turn().and_then(|()| {
            self.model.current_entity_hit()?;
            self.game_loop()
        });
        self.surface(result)
    }

    /// The player stands.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is being played, it is not the player's
    /// turn, or the deck runs out while the bots play.
    pub fn on_stand(&mut self) -> Result<(), ControllerError> {
        let result = self.ensure_player_turn().and_then(|()| {
            self.model.current_entity_stand()?;
            self.game_loop()
        });
        self.surface(result)
    }

    /// Asks the view to confirm quitting. Returns `true` if confirmed.
    pub fn quit_program(&mut self) -> bool {
        if self.view.request_quit() {
            info!("Quitting");
            self.state = ControllerState::Terminated;
            true
        } else {
            false
        }
    }

    /// Goes back to the startup frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the controller has terminated or the view has no
    /// startup frame.
    pub fn goto_start_frame(&mut self) -> Result<(), ControllerError> {
        if self.state == ControllerState::Terminated {
            return Err(ControllerError::InvalidState(self.state));
        }
        self.launch()
    }

    fn ensure_player_turn(&self) -> Result<(), ControllerError> {
        if self.state != ControllerState::Playing {
            return Err(ControllerError::InvalidState(self.state));
        }
        if self.model.current_is_bot() {
            return Err(ActionError::NotYourTurn.into());
        }
        Ok(())
    }

    /// Runs turns until the player has to act or the round is over.
    fn game_loop(&mut self) -> Result<(), ControllerError> {
        loop {
            let stood = self
                .model
                .current_entity()
                .is_some_and(|e| e.status() == EntityStatus::Stood);

            match self.model.get_player_win_status() {
                WinStatus::Win if stood => {
                    self.model.current_entity_set_status(EntityStatus::Won)?;
                    return self.end_game();
                }
                WinStatus::Bust => {
                    self.model.current_entity_set_status(EntityStatus::Bust)?;
                }
                WinStatus::Win | WinStatus::Undecided => {}
            }

            if !self.model.is_game_playable() {
                return self.end_game();
            }
            self.model.next_entity();

            if !self.model.current_is_bot() {
                self.refresh();
                return Ok(());
            }

            if self.bot_delay {
                self.refresh();
                let pause = self.model.options().bot_delay;
                self.delay.pause(pause);
            }

            // next_entity only lands on active seats, so a busted bot is
            // never asked for a decision.
            match self.model.get_bot_decision()? {
                Decision::Hit => self.model.current_entity_hit()?,
                Decision::Stand => self.model.current_entity_stand()?,
            }
        }
    }

    fn end_game(&mut self) -> Result<(), ControllerError> {
        let winners = self.model.resolve_round();
        self.state = ControllerState::RoundEnd;
        if winners.is_empty() {
            info!("Round over, everybody busted");
        } else {
            info!("Round over, winning seats {winners:?}");
        }

        self.view.show_frame(Frame::End)?;
        self.view
            .update_frame(FrameUpdate::EndGame(self.model.get_end_game_stats()));
        Ok(())
    }

    fn refresh(&mut self) {
        self.view
            .update_frame(FrameUpdate::Table(self.model.get_update_commands()));
    }

    /// Reports fatal errors to the view. Running out of cards aborts the
    /// round.
    fn surface<T>(&mut self, result: Result<T, ControllerError>) -> Result<T, ControllerError> {
        if let Err(err) = &result {
            error!("{err}");
            if err.is_deck_exhausted() {
                self.state = ControllerState::RoundEnd;
                self.view.show_error("Deck exhausted", &err.to_string());
            } else if matches!(err, ControllerError::Frame(_)) {
                self.view.show_error("Missing frame", &err.to_string());
            } else if matches!(err, ControllerError::Config(_)) {
                self.view.show_error("Invalid settings", &err.to_string());
            } else {
                debug!("Rejected in {:?} state", self.state);
            }
        }
        result
    }
}
