//! A memory-matching card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals a shuffled board of paired
//! cards, runs the two-card turn state machine, and scores finished rounds
//! against a best score kept in a [`Store`].
//!
//! # Example
//!
//! ```
//! use memrs::{CardCount, Game, GameOptions, MemoryStore, Settings, Transition, VirtualScheduler};
//!
//! let options = GameOptions::default().with_card_count(CardCount::new(8).unwrap());
//! let game = Game::new(options, Settings::new(MemoryStore::new()), 42).unwrap();
//! let mut timers = VirtualScheduler::new();
//!
//! assert_eq!(game.click(0, &mut timers), Transition::Revealing { index: 0 });
//! assert_eq!(game.advance(&mut timers, 240), vec![Transition::Selected { index: 0 }]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod score;
pub mod settings;
mod sync;
pub mod timer;

// Re-export main types
pub use card::{Card, Face, MatchState, Symbol};
pub use deck::{Catalog, DEFAULT_CATALOG_SIZE, Deck, shuffle};
pub use error::{ConfigError, StoreError};
pub use game::{Game, Selection, Transition, TurnState};
pub use options::{CardCount, GameOptions};
pub use score::{RoundStats, ScoreReport};
pub use settings::{MemoryStore, Settings, Store};
pub use timer::{Scheduler, Timer, TimerKind, VirtualScheduler};
