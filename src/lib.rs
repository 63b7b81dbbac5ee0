//! A blackjack table engine with optional `no_std` support.
//!
//! One human player sits at seat 0 and plays against any number of
//! rule-based bots. The crate is split into a pure rule engine
//! ([`GameModel`]), a turn-sequencing state machine ([`Controller`]) and a
//! presentation boundary ([`View`]) that front ends implement.
//!
//! # Example
//!
//! ```
//! use bjtable::{GameModel, GameOptions};
//!
//! let mut model = GameModel::new(GameOptions::default().with_seed(42));
//! model.init_game(2).unwrap();
//! assert_eq!(model.entities().len(), 3);
//! assert!(model.is_game_playable());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod controller;
pub mod deck;
pub mod entity;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use controller::{BOT_DELAY_MS, Controller, ControllerState};
pub use deck::Deck;
pub use entity::{BotPolicy, Decision, Entity, EntityKind, EntityStatus};
pub use error::{ActionError, ConfigError, ControllerError, DeckError, FrameError, StatusError};
pub use game::GameModel;
pub use hand::Hand;
pub use options::GameOptions;
pub use result::{EndGameStats, EntitySummary, WinStatus};
#[cfg(feature = "std")]
pub use view::ThreadSleep;
pub use view::{Delay, Frame, FrameUpdate, NoDelay, StartupInputs, UpdateCommand, View};
