//! Game configuration options.

use crate::deck::Catalog;
use crate::error::ConfigError;
use crate::settings::{Settings, Store};

/// Number of cards on the board.
///
/// Only the sizes in [`CardCount::ALLOWED`] can be constructed.
///
/// ```
/// use memrs::CardCount;
///
/// let count = CardCount::new(16).unwrap();
/// assert_eq!(count.pairs(), 8);
/// assert!(CardCount::new(10).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardCount(u8);

impl CardCount {
    /// Allowed deck sizes.
    pub const ALLOWED: [usize; 6] = [8, 16, 24, 32, 40, 48];

    /// Deck size used when none is stored or the stored value is invalid.
    pub const DEFAULT: Self = Self(48);

    /// Creates a card count.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCardCount`] if `count` is not one of
    /// [`CardCount::ALLOWED`].
    pub const fn new(count: usize) -> Result<Self, ConfigError> {
        match count {
            8 | 16 | 24 | 32 | 40 | 48 => Ok(Self(count as u8)),
            _ => Err(ConfigError::InvalidCardCount(count)),
        }
    }

    /// Parses a stored value, falling back to [`CardCount::DEFAULT`].
    #[must_use]
    pub fn parse_or_default(value: Option<&str>) -> Self {
        value
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .and_then(|count| Self::new(count).ok())
            .unwrap_or_default()
    }

    /// Returns the number of cards.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// Returns the number of pairs.
    #[must_use]
    pub const fn pairs(self) -> usize {
        self.get() / 2
    }
}

impl Default for CardCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for CardCount {
    type Error = ConfigError;

    fn try_from(count: usize) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

/// Configuration options for a memory game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use memrs::{CardCount, GameOptions};
///
/// let options = GameOptions::default()
///     .with_card_count(CardCount::new(16).unwrap())
///     .with_settle_delay_ms(500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of cards dealt per round.
    pub card_count: CardCount,
    /// Duration of a single card flip, during which input is locked.
    pub reveal_delay_ms: u32,
    /// Pause after the second card of a pair is revealed, before it is resolved.
    pub settle_delay_ms: u32,
    /// Faces to draw pairs from.
    pub catalog: Catalog,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            card_count: CardCount::DEFAULT,
            reveal_delay_ms: 240,
            settle_delay_ms: 1000,
            catalog: Catalog::default(),
        }
    }
}

impl GameOptions {
    /// Creates default options using the card count stored in `settings`.
    #[must_use]
    pub fn from_settings<S: Store>(settings: &Settings<S>) -> Self {
        Self::default().with_card_count(settings.card_count())
    }

    /// Sets the number of cards.
    ///
    /// # Example
    ///
    /// ```
    /// use memrs::{CardCount, GameOptions};
    ///
    /// let options = GameOptions::default().with_card_count(CardCount::new(8).unwrap());
    /// assert_eq!(options.card_count.get(), 8);
    /// ```
    #[must_use]
    pub fn with_card_count(mut self, card_count: CardCount) -> Self {
        self.card_count = card_count;
        self
    }

    /// Sets the flip duration.
    ///
    /// # Example
    ///
    /// ```
    /// use memrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_reveal_delay_ms(0);
    /// assert_eq!(options.reveal_delay_ms, 0);
    /// ```
    #[must_use]
    pub fn with_reveal_delay_ms(mut self, delay: u32) -> Self {
        self.reveal_delay_ms = delay;
        self
    }

    /// Sets the settle delay.
    ///
    /// # Example
    ///
    /// ```
    /// use memrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_settle_delay_ms(250);
    /// assert_eq!(options.settle_delay_ms, 250);
    /// ```
    #[must_use]
    pub fn with_settle_delay_ms(mut self, delay: u32) -> Self {
        self.settle_delay_ms = delay;
        self
    }

    /// Sets the symbol catalog.
    ///
    /// # Example
    ///
    /// ```
    /// use memrs::{Catalog, GameOptions};
    ///
    /// let options = GameOptions::default().with_catalog(Catalog::numbered(4));
    /// assert_eq!(options.catalog.len(), 4);
    /// ```
    #[must_use]
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }
}
