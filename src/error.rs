//! Error types for game operations.

use thiserror::Error;

use crate::controller::ControllerState;
use crate::entity::EntityStatus;

/// Errors raised by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Every card has been drawn.
    #[error("the deck is empty")]
    Empty,
}

/// Errors that can occur during entity actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No game is in progress.
    #[error("no game in progress")]
    NoGame,
    /// The current entity can no longer act.
    #[error("entity is not active")]
    EntityNotActive,
    /// A bot decision was requested for a human.
    #[error("current entity is not a bot")]
    NotABot,
    /// A human action was requested on a bot's turn.
    #[error("not the player's turn")]
    NotYourTurn,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

impl From<DeckError> for ActionError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Empty => Self::NoCards,
        }
    }
}

/// Errors raised by illegal status transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatusError {
    /// The entity cannot move between these statuses.
    #[error("cannot move from {from:?} to {to:?}")]
    InvalidTransition {
        /// Status before the attempted move.
        from: EntityStatus,
        /// Requested status.
        to: EntityStatus,
    },
}

/// Errors raised by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrameError {
    /// No frame is registered under this name.
    #[error("failed to load frame [{0}]")]
    Unknown(&'static str),
}

/// Errors in startup configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// More bots were requested than the table seats.
    #[error("{requested} bots requested, at most {max} allowed")]
    TooManyBots {
        /// Number of bots asked for.
        requested: u8,
        /// Configured maximum.
        max: u8,
    },
}

/// Errors surfaced by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ControllerError {
    /// The entry point is not valid in the current controller state.
    #[error("action not allowed in {0:?} state")]
    InvalidState(ControllerState),
    /// A game action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// Dealing ran out of cards.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// A status transition was rejected.
    #[error(transparent)]
    Status(#[from] StatusError),
    /// The view could not show a frame.
    #[error(transparent)]
    Frame(#[from] FrameError),
    /// Startup inputs were rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ControllerError {
    /// Returns whether the error came from running out of cards.
    #[must_use]
    pub const fn is_deck_exhausted(&self) -> bool {
        matches!(self, Self::Deck(DeckError::Empty) | Self::Action(ActionError::NoCards))
    }
}
