//! Presentation boundary.
//!
//! The controller never renders anything itself. It tells a [`View`] which
//! frame to show, hands it declarative [`FrameUpdate`]s, and asks it for the
//! startup inputs and quit confirmation. Pauses before bot turns go through
//! the [`Delay`] capability so the turn loop can run without a clock.

extern crate alloc;

use alloc::vec::Vec;
use core::time::Duration;

use crate::error::FrameError;
use crate::result::{EndGameStats, EntitySummary};

/// Screens a front end can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frame {
    /// Bot count and delay selection.
    Startup,
    /// The table while a round is played.
    Game,
    /// Final standings.
    End,
}

impl Frame {
    /// Every frame, in the order a round visits them.
    pub const ALL: [Self; 3] = [Self::Startup, Self::Game, Self::End];

    /// Stable name used to register and look up frames.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Startup => "Startup_frame",
            Self::Game => "Game_frame",
            Self::End => "End_frame",
        }
    }
}

/// A single instruction for redrawing the game frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateCommand {
    /// Redraw one seat.
    ShowEntity(EntitySummary),
    /// Highlight the seat whose turn it is, if any.
    SetCurrent(Option<usize>),
    /// Show how many cards are left in the deck.
    SetCardsRemaining(usize),
}

/// Content pushed to the frame being shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameUpdate {
    /// Table state during play.
    Table(Vec<UpdateCommand>),
    /// Standings after the round.
    EndGame(EndGameStats),
}

/// Values collected on the startup frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StartupInputs {
    /// Number of bots to seat next to the player.
    pub amount_of_bots: u8,
    /// Whether to pause before each bot action.
    pub bot_delay_enabled: bool,
}

/// A front end the controller can drive.
pub trait View {
    /// Switches to `frame`.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::Unknown`] if the view has no such frame.
    fn show_frame(&mut self, frame: Frame) -> Result<(), FrameError>;

    /// Redraws the current frame.
    fn update_frame(&mut self, update: FrameUpdate);

    /// Reads the startup inputs.
    fn get_inputs(&mut self) -> StartupInputs;

    /// Asks the user to confirm leaving the program.
    fn request_quit(&mut self) -> bool;

    /// Reports a fatal error to the user.
    fn show_error(&mut self, title: &str, text: &str);
}

/// Capability to pause before a bot acts.
pub trait Delay {
    /// Waits for `duration`.
    fn pause(&mut self, duration: Duration);
}

/// Delay that returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn pause(&mut self, _duration: Duration) {}
}

/// Delay that blocks the calling thread.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

#[cfg(feature = "std")]
impl Delay for ThreadSleep {
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
