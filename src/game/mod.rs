//! Game model: the deck, the seats and whose turn it is.

use alloc::vec::Vec;

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::entity::Entity;
use crate::error::DeckError;
use crate::options::GameOptions;

mod actions;
mod snapshot;

/// Number of cards each seat receives before play starts.
pub const INITIAL_CARDS: usize = 2;

/// A blackjack table with one human player and a number of bots.
///
/// The model owns the deck, the entities in seat order and the index of the
/// entity whose turn it is. The human always sits at seat 0.
#[derive(Debug, Clone)]
pub struct GameModel {
    /// Cards left to draw this game.
    deck: Deck,
    /// Table options.
    options: GameOptions,
    /// Seats in turn order.
    entities: Vec<Entity>,
    /// Seat whose turn it is. Equal to `entities.len()` once everybody is done.
    current: usize,
    /// Shuffler shared by every game played on this model.
    rng: ChaCha8Rng,
}

impl GameModel {
    /// Creates an empty table. Call [`GameModel::init_game`] to start playing.
    #[must_use]
    pub fn new(options: GameOptions) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(options.seed);

        Self {
            deck: Deck::default(),
            options,
            entities: Vec::new(),
            current: 0,
            rng,
        }
    }

    /// Starts a new game with a freshly shuffled deck.
    ///
    /// Seats the player and `n_bots` bots, deals two cards to everyone and
    /// gives the first turn to the player.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck cannot cover the initial deal.
    pub fn init_game(&mut self, n_bots: u8) -> Result<(), DeckError> {
        let deck = Deck::shuffled_with(&mut self.rng);
        self.init_game_with_deck(n_bots, deck)
    }

    /// Starts a new game drawing from `deck`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck cannot cover the initial deal.
    pub fn init_game_with_deck(&mut self, n_bots: u8, deck: Deck) -> Result<(), DeckError> {
        let policy = self.options.bot_policy();

        self.deck = deck;
        self.current = 0;
        self.entities = Vec::with_capacity(usize::from(n_bots) + 1);
        self.entities.push(Entity::human(0));
        for seat in 1..=usize::from(n_bots) {
            self.entities.push(Entity::bot(seat, policy));
        }

        for _ in 0..INITIAL_CARDS {
            for entity in &mut self.entities {
                entity.hit(self.deck.draw_one()?);
            }
        }

        info!(
            "Game started with {} bot(s), {} cards left",
            n_bots,
            self.deck.remaining()
        );
        debug!("Bots hit below {}", policy.hit_below);
        Ok(())
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns every entity in seat order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Returns the seat whose turn it is.
    ///
    /// Equal to the number of entities once nobody is left to act.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Returns the entity whose turn it is, if any.
    #[must_use]
    pub fn current_entity(&self) -> Option<&Entity> {
        self.entities.get(self.current)
    }

    /// Returns whether the entity whose turn it is is a bot.
    #[must_use]
    pub fn current_is_bot(&self) -> bool {
        self.current_entity().is_some_and(Entity::is_bot)
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    fn current_entity_mut(&mut self) -> Option<&mut Entity> {
        self.entities.get_mut(self.current)
    }
}
