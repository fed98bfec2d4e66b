//! Card faces and placed card instances.

/// Identifier of a card face.
///
/// Symbols are opaque to the engine; a renderer maps them to images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(pub u16);

impl Symbol {
    /// Creates a new symbol.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn id(self) -> u16 {
        self.0
    }
}

/// Whether a card has been paired off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchState {
    /// Still in play.
    #[default]
    Unmatched,
    /// Paired with its twin and removed from play.
    Matched,
}

/// What a renderer should currently show for a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Face {
    /// Card back.
    #[default]
    Down,
    /// Front image.
    Up,
    /// Neutral "cleared" marker shown after a match.
    Cleared,
}

/// A card placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The face symbol.
    pub symbol: Symbol,
    /// Position on the board.
    pub index: usize,
    state: MatchState,
    face: Face,
}

impl Card {
    /// Creates a face-down, unmatched card.
    #[must_use]
    pub const fn new(symbol: Symbol, index: usize) -> Self {
        Self {
            symbol,
            index,
            state: MatchState::Unmatched,
            face: Face::Down,
        }
    }

    /// Returns the match state.
    #[must_use]
    pub const fn state(&self) -> MatchState {
        self.state
    }

    /// Returns the face currently shown.
    #[must_use]
    pub const fn face(&self) -> Face {
        self.face
    }

    /// Returns whether the card has been matched.
    #[must_use]
    pub const fn is_matched(&self) -> bool {
        matches!(self.state, MatchState::Matched)
    }

    /// Returns whether the card can be picked: unmatched and face down.
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        matches!(self.state, MatchState::Unmatched) && matches!(self.face, Face::Down)
    }

    pub(crate) const fn turn_up(&mut self) {
        self.face = Face::Up;
    }

    pub(crate) const fn turn_down(&mut self) {
        self.face = Face::Down;
    }

    pub(crate) const fn clear(&mut self) {
        self.state = MatchState::Matched;
        self.face = Face::Cleared;
    }
}
