//! Round statistics and accuracy scoring.

/// Counters for the round in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundStats {
    /// Completed two-card selections.
    pub attempts: u32,
    /// Selections that turned out to be a pair.
    pub correct: u32,
    /// Pairs removed from the board.
    pub matched_pairs: u32,
}

impl RoundStats {
    /// Returns the accuracy for these counters.
    #[must_use]
    pub fn accuracy(&self) -> u8 {
        accuracy(self.correct, self.attempts)
    }
}

#[cfg(feature = "std")]
fn round_percent(value: f64) -> u8 {
    value.round() as u8
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_percent(value: f64) -> u8 {
    libm::round(value) as u8
}

/// Returns `round(100 * correct / attempts)`, or 0 when there were no attempts.
///
/// ```
/// assert_eq!(memrs::score::accuracy(3, 4), 75);
/// assert_eq!(memrs::score::accuracy(0, 0), 0);
/// ```
#[must_use]
pub fn accuracy(correct: u32, attempts: u32) -> u8 {
    if attempts == 0 {
        return 0;
    }
    let correct = correct.min(attempts);
    round_percent(f64::from(correct) * 100.0 / f64::from(attempts))
}

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreReport {
    /// Final counters.
    pub stats: RoundStats,
    /// Accuracy for this round, in percent.
    pub accuracy: u8,
    /// Best score stored before this round.
    pub previous_best: u8,
    /// Best score after this round.
    pub best: u8,
}

impl ScoreReport {
    /// Scores `stats` against the player's previous best.
    #[must_use]
    pub fn new(stats: RoundStats, previous_best: u8) -> Self {
        let accuracy = stats.accuracy();
        Self {
            stats,
            accuracy,
            previous_best,
            best: previous_best.max(accuracy),
        }
    }

    /// Returns whether this round set a new best.
    #[must_use]
    pub const fn is_new_best(&self) -> bool {
        self.accuracy > self.previous_best
    }
}
