//! Controller state types.

/// Phase of the turn-sequencing state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControllerState {
    /// Waiting on the startup frame.
    #[default]
    Startup,
    /// A round is being played.
    Playing,
    /// The round is over and the end frame is shown.
    RoundEnd,
    /// The user confirmed leaving the program.
    Terminated,
}

impl ControllerState {
    /// Returns whether a new game can be started from this state.
    #[must_use]
    pub const fn can_start_game(self) -> bool {
        matches!(self, Self::Startup | Self::RoundEnd)
    }
}
