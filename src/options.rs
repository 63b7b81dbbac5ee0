//! Game configuration options.

use core::time::Duration;

use crate::entity::{BotPolicy, DEFAULT_HIT_BELOW};

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::GameOptions;
///
/// let options = GameOptions::default()
///     .with_seed(7)
///     .with_bot_hit_below(16)
///     .with_max_bots(3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Seed for the deck shuffler.
    pub seed: u64,
    /// Totals below this value make a bot hit.
    pub bot_hit_below: u8,
    /// Pause before each bot action when the delay toggle is on.
    pub bot_delay: Duration,
    /// Maximum number of bots accepted at startup.
    pub max_bots: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            seed: 0,
            bot_hit_below: DEFAULT_HIT_BELOW,
            bot_delay: Duration::from_millis(crate::controller::BOT_DELAY_MS),
            max_bots: 7,
        }
    }
}

impl GameOptions {
    /// Sets the shuffle seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_seed(99);
    /// assert_eq!(options.seed, 99);
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the total below which bots hit.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_bot_hit_below(15);
    /// assert_eq!(options.bot_hit_below, 15);
    /// ```
    #[must_use]
    pub const fn with_bot_hit_below(mut self, threshold: u8) -> Self {
        self.bot_hit_below = threshold;
        self
    }

    /// Sets the pause before each bot action.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_bot_delay(Duration::from_millis(250));
    /// assert_eq!(options.bot_delay, Duration::from_millis(250));
    /// ```
    #[must_use]
    pub const fn with_bot_delay(mut self, delay: Duration) -> Self {
        self.bot_delay = delay;
        self
    }

    /// Sets the maximum number of bots.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_bots(2);
    /// assert_eq!(options.max_bots, 2);
    /// ```
    #[must_use]
    pub const fn with_max_bots(mut self, max_bots: u8) -> Self {
        self.max_bots = max_bots;
        self
    }

    /// Returns the policy every bot plays with.
    #[must_use]
    pub const fn bot_policy(&self) -> BotPolicy {
        BotPolicy::new(self.bot_hit_below)
    }
}
