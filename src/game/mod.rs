//! Game engine and round management.

use core::sync::atomic::{AtomicU32, Ordering};

use alloc::string::String;
use alloc::vec::Vec;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ConfigError;
use crate::options::{CardCount, GameOptions};
use crate::score::{RoundStats, ScoreReport};
use crate::settings::{MemoryStore, Settings, Store};
use crate::timer::VirtualScheduler;

mod input;
mod resolve;
pub mod state;

pub use state::{Selection, Transition, TurnState};

use state::Turn;

/// A memory game engine that owns the board, the turn state and the
/// player's settings.
///
/// The game is driven by [`Game::click`] and by timers delivered through
/// [`Game::fire`]. Use [`GameOptions`] to configure the deck size, the
/// animation delays and the symbol catalog.
pub struct Game<S: Store = MemoryStore> {
    /// Options for the current and following rounds.
    options: Mutex<GameOptions>,
    /// Cards on the board.
    deck: Mutex<Deck>,
    /// Round serial, bumped by every new round.
    round: AtomicU32,
    /// Selection and lock state.
    turn: Mutex<Turn>,
    /// Counters for the current round.
    stats: Mutex<RoundStats>,
    /// Persisted settings.
    settings: Mutex<Settings<S>>,
    /// Score of the last finished round.
    last_score: Mutex<Option<ScoreReport>>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl<S: Store> Game<S> {
    /// Creates a game and deals the first round.
    ///
    /// # Example
    ///
    /// ```
    /// use memrs::{Game, GameOptions, MemoryStore, Settings};
    ///
    /// let game = Game::new(GameOptions::default(), Settings::new(MemoryStore::new()), 42).unwrap();
    /// assert_eq!(game.cards().len(), 48);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CatalogTooSmall`] if the catalog cannot supply
    /// the configured number of pairs.
    pub fn new(options: GameOptions, settings: Settings<S>, seed: u64) -> Result<Self, ConfigError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::build(options.card_count, &options.catalog, &mut rng)?;

        info!(
            "round 1 dealt: {} cards for player {:?}",
            deck.len(),
            settings.player_name()
        );

        Ok(Self {
            options: Mutex::new(options),
            deck: Mutex::new(deck),
            round: AtomicU32::new(1),
            turn: Mutex::new(Turn::default()),
            stats: Mutex::new(RoundStats::default()),
            settings: Mutex::new(settings),
            last_score: Mutex::new(None),
            rng: Mutex::new(rng),
        })
    }

    /// Creates a game using the card count stored in `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CatalogTooSmall`] if the default catalog cannot
    /// supply the stored number of pairs.
    pub fn from_settings(settings: Settings<S>, seed: u64) -> Result<Self, ConfigError> {
        let options = GameOptions::from_settings(&settings);
        Self::new(options, settings, seed)
    }

    /// Deals a fresh round, discarding the current one.
    ///
    /// Stats and selection are reset. Timers scheduled for earlier rounds are
    /// ignored when they fire. Returns the new round serial.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CatalogTooSmall`] if the catalog cannot supply
    /// the configured number of pairs.
    pub fn new_round(&self) -> Result<u32, ConfigError> {
        let (card_count, deck) = {
            let options = self.options.lock();
            let mut rng = self.rng.lock();
            let deck = Deck::build(options.card_count, &options.catalog, &mut *rng)?;
            (options.card_count, deck)
        };

        let mut turn = self.turn.lock();
        let round = self.round.fetch_add(1, Ordering::SeqCst) + 1;
        *self.deck.lock() = deck;
        *turn = Turn::default();
        *self.stats.lock() = RoundStats::default();

        info!("round {round} dealt: {} cards", card_count.get());
        Ok(round)
    }

    /// Saves the player name and card count, then deals a new round with them.
    ///
    /// Returns the new round serial.
    ///
    /// # Errors
    ///
    /// Returns an error if `card_count` is not an allowed size, the catalog is
    /// too small for it, or the store rejects a write. Nothing is changed when
    /// validation fails.
    ///
    /// The two writes are not atomic. The card count is stored first, so a
    /// failed name write can leave the new count in the store; the running
    /// game keeps its board, options and player until both writes succeed.
    pub fn save_settings(&self, player_name: &str, card_count: usize) -> Result<u32, ConfigError> {
        let card_count = CardCount::new(card_count)?;
        self.options.lock().catalog.ensure_supports(card_count)?;

        {
            let mut settings = self.settings.lock();
            settings.set_card_count(card_count)?;
            settings.set_player_name(player_name)?;
        }
        self.options.lock().card_count = card_count;

        self.new_round()
    }

    /// Runs every timer due within the next `elapsed_ms` of virtual time.
    ///
    /// Timers scheduled while firing are run too if they fall inside the
    /// window. Returns the transitions in the order they happened.
    pub fn advance(&self, scheduler: &mut VirtualScheduler, elapsed_ms: u64) -> Vec<Transition> {
        let until = scheduler.now() + elapsed_ms;
        let mut transitions = Vec::new();
        while let Some(timer) = scheduler.pop_due(until) {
            transitions.push(self.fire(timer, scheduler));
        }
        scheduler.settle_at(until);
        transitions
    }

    /// Returns the current round serial.
    pub fn round(&self) -> u32 {
        self.round.load(Ordering::SeqCst)
    }

    /// Returns a copy of the board.
    pub fn cards(&self) -> Vec<Card> {
        self.deck.lock().cards().to_vec()
    }

    /// Returns the card at `index`.
    pub fn card(&self, index: usize) -> Option<Card> {
        self.deck.lock().get(index).copied()
    }

    /// Returns the options in effect, including the saved card count.
    pub fn options(&self) -> GameOptions {
        self.options.lock().clone()
    }

    /// Returns the number of cards dealt by the current and following rounds.
    pub fn card_count(&self) -> CardCount {
        self.options.lock().card_count
    }

    /// Returns the number of pairs still on the board.
    pub fn pairs_remaining(&self) -> usize {
        let pairs = self.deck.lock().pairs();
        pairs.saturating_sub(self.stats.lock().matched_pairs as usize)
    }

    /// Returns the counters for the current round.
    pub fn stats(&self) -> RoundStats {
        *self.stats.lock()
    }

    /// Returns the current turn state.
    pub fn turn_state(&self) -> TurnState {
        self.turn.lock().state()
    }

    /// Returns whether input is currently dropped.
    pub fn is_locked(&self) -> bool {
        self.turn.lock().locked
    }

    /// Returns the held cards.
    pub fn selection(&self) -> Selection {
        self.turn.lock().selection
    }

    /// Returns the stored player name.
    pub fn player_name(&self) -> String {
        self.settings.lock().player_name()
    }

    /// Returns the stored best score for the current player.
    pub fn best_score(&self) -> u8 {
        let settings = self.settings.lock();
        let name = settings.player_name();
        settings.best_score(&name)
    }

    /// Returns the score of the last finished round, if any.
    pub fn last_score(&self) -> Option<ScoreReport> {
        *self.last_score.lock()
    }

    /// Consumes the game and returns its settings.
    pub fn into_settings(self) -> Settings<S> {
        self.settings.into_inner()
    }
}
