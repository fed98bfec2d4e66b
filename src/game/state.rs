//! Turn state types.

use crate::score::ScoreReport;

/// Turn state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// No card is held.
    Idle,
    /// One face-up card is held.
    OneSelected,
    /// Two cards are held and waiting for the settle delay.
    TwoSelected,
    /// Every pair has been matched.
    RoundComplete,
}

/// The face-up cards not yet resolved, by board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// First card of the pair.
    pub first: Option<usize>,
    /// Second card of the pair.
    pub second: Option<usize>,
}

impl Selection {
    /// Returns whether `index` is held.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.first == Some(index) || self.second == Some(index)
    }

    /// Returns the number of held cards.
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.first.is_some()) + usize::from(self.second.is_some())
    }

    /// Returns whether no card is held.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.first.is_none() && self.second.is_none()
    }

    pub(super) const fn clear(&mut self) {
        self.first = None;
        self.second = None;
    }
}

/// What a click or timer did, for the renderer to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed.
    Ignored,
    /// The card started flipping face up; input is locked until it lands.
    Revealing {
        /// Card position.
        index: usize,
    },
    /// The card finished flipping and is held as the first of a pair.
    Selected {
        /// Card position.
        index: usize,
    },
    /// The second card landed; input stays locked for the settle delay.
    PairSelected {
        /// First card position.
        first: usize,
        /// Second card position.
        second: usize,
    },
    /// The pair matched and both cards were cleared.
    Matched {
        /// First card position.
        first: usize,
        /// Second card position.
        second: usize,
    },
    /// The pair did not match and both cards were turned back down.
    Mismatched {
        /// First card position.
        first: usize,
        /// Second card position.
        second: usize,
    },
    /// The last pair matched and the round was scored.
    RoundComplete {
        /// First card position.
        first: usize,
        /// Second card position.
        second: usize,
        /// Final score.
        score: ScoreReport,
    },
}

impl Transition {
    /// Returns whether the input was dropped.
    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub(super) struct Turn {
    pub(super) selection: Selection,
    pub(super) revealing: Option<usize>,
    pub(super) locked: bool,
    pub(super) complete: bool,
}

impl Turn {
    pub(super) const fn state(&self) -> TurnState {
        if self.complete {
            TurnState::RoundComplete
        } else if self.selection.second.is_some() {
            TurnState::TwoSelected
        } else if self.selection.first.is_some() {
            TurnState::OneSelected
        } else {
            TurnState::Idle
        }
    }
}
