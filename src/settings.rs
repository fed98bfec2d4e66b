//! Persisted player settings and best scores.
//!
//! Settings live in a string-keyed [`Store`]. The key layout matches the
//! browser build so existing `localStorage` entries keep working:
//!
//! | key                   | value                                  |
//! |-----------------------|----------------------------------------|
//! | `myGame_player`       | player name                            |
//! | `myGame_numCards`     | card count                             |
//! | `mg_highScore_<name>` | best accuracy, `guest` for empty names |

use alloc::format;
use alloc::string::{String, ToString};

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::StoreError;
use crate::options::CardCount;

/// Key holding the player name.
pub const PLAYER_KEY: &str = "myGame_player";
/// Key holding the card count.
pub const CARD_COUNT_KEY: &str = "myGame_numCards";
/// Profile name used when the player name is empty.
pub const GUEST_PROFILE: &str = "guest";

const HIGH_SCORE_PREFIX: &str = "mg_highScore_";

/// Returns the key holding the best score for `player_name`.
#[must_use]
pub fn high_score_key(player_name: &str) -> String {
    let profile = if player_name.is_empty() {
        GUEST_PROFILE
    } else {
        player_name
    };
    format!("{HIGH_SCORE_PREFIX}{profile}")
}

/// A string key-value store.
pub trait Store {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory [`Store`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Typed access to player settings over a [`Store`].
#[derive(Debug, Clone, Default)]
pub struct Settings<S> {
    store: S,
}

impl<S: Store> Settings<S> {
    /// Wraps a store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the settings and returns the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Returns the stored player name, empty if none.
    pub fn player_name(&self) -> String {
        self.store.get(PLAYER_KEY).unwrap_or_default()
    }

    /// Stores the player name, trimmed.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    pub fn set_player_name(&mut self, name: &str) -> Result<(), StoreError> {
        self.store.set(PLAYER_KEY, name.trim())
    }

    /// Returns the stored card count, or [`CardCount::DEFAULT`] if absent or invalid.
    pub fn card_count(&self) -> CardCount {
        CardCount::parse_or_default(self.store.get(CARD_COUNT_KEY).as_deref())
    }

    /// Stores the card count.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    pub fn set_card_count(&mut self, count: CardCount) -> Result<(), StoreError> {
        self.store.set(CARD_COUNT_KEY, &count.get().to_string())
    }

    /// Returns the best score for `player_name`, 0 if none is stored.
    pub fn best_score(&self, player_name: &str) -> u8 {
        self.store
            .get(&high_score_key(player_name))
            .and_then(|raw| raw.trim().parse::<u8>().ok())
            .map_or(0, |score| score.min(100))
    }

    /// Stores the best score for `player_name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    pub fn set_best_score(&mut self, player_name: &str, score: u8) -> Result<(), StoreError> {
        self.store
            .set(&high_score_key(player_name), &score.to_string())
    }
}
