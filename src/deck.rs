//! Symbol catalogs, shuffling and deck building.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, Symbol};
use crate::error::ConfigError;
use crate::options::CardCount;

/// Number of faces in the default catalog.
pub const DEFAULT_CATALOG_SIZE: usize = 24;

/// Shuffles `items` in place.
///
/// Every ordering is equally likely given a uniform `rng`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// The faces a deck can be built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    symbols: Vec<Symbol>,
}

impl Catalog {
    /// Creates a catalog of `count` symbols numbered from zero.
    #[must_use]
    pub fn numbered(count: u16) -> Self {
        Self {
            symbols: (0..count).map(Symbol::new).collect(),
        }
    }

    /// Creates a catalog from explicit symbols.
    ///
    /// Duplicate symbols are dropped so every pair in a deck stays distinct.
    #[must_use]
    pub fn from_symbols(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        let mut unique: Vec<Symbol> = Vec::new();
        for symbol in symbols {
            if !unique.contains(&symbol) {
                unique.push(symbol);
            }
        }
        Self { symbols: unique }
    }

    /// Returns the symbols.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Returns the number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Checks that the catalog can supply the pairs for `count` cards.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CatalogTooSmall`] if it cannot.
    pub fn ensure_supports(&self, count: CardCount) -> Result<(), ConfigError> {
        if count.pairs() > self.len() {
            return Err(ConfigError::CatalogTooSmall {
                required: count.pairs(),
                available: self.len(),
            });
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::numbered(DEFAULT_CATALOG_SIZE as u16)
    }
}

/// The cards of one round, in board order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a shuffled deck of `count` cards.
    ///
    /// Which symbols appear is decided by one shuffle of the catalog; where
    /// they land is decided by a second, independent shuffle.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CatalogTooSmall`] if the catalog has fewer than
    /// `count.pairs()` symbols.
    pub fn build<R: Rng + ?Sized>(
        count: CardCount,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        catalog.ensure_supports(count)?;

        let mut chosen = catalog.symbols.clone();
        shuffle(&mut chosen, rng);
        chosen.truncate(count.pairs());

        let mut faces = Vec::with_capacity(count.get());
        faces.extend_from_slice(&chosen);
        faces.extend_from_slice(&chosen);
        shuffle(&mut faces, rng);

        let cards = faces
            .into_iter()
            .enumerate()
            .map(|(index, symbol)| Card::new(symbol, index))
            .collect();

        Ok(Self { cards })
    }

    /// Returns the cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn pairs(&self) -> usize {
        self.cards.len() / 2
    }
}
