//! Error types for round setup and settings persistence.

use thiserror::Error;

/// Errors that can occur when writing to a settings store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backing store is not available (e.g. storage disabled in the browser).
    #[error("settings store is unavailable")]
    Unavailable,
    /// The backing store rejected the write (e.g. quota exceeded).
    #[error("settings store rejected the write")]
    WriteFailed,
}

/// Errors that prevent a round from being set up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Card count is not one of the allowed deck sizes.
    #[error("invalid card count {0}; expected one of 8, 16, 24, 32, 40, 48")]
    InvalidCardCount(usize),
    /// The symbol catalog cannot supply enough distinct pairs.
    #[error("catalog has {available} symbols but {required} pairs are required")]
    CatalogTooSmall {
        /// Number of distinct symbols the deck needs.
        required: usize,
        /// Number of symbols in the catalog.
        available: usize,
    },
    /// Saving settings failed.
    #[error("failed to save settings: {0}")]
    Store(#[from] StoreError),
}
