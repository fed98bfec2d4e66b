use log::{debug, info, warn};

use crate::score::{RoundStats, ScoreReport};
use crate::settings::Store;

use super::{Game, Transition};

impl<S: Store> Game<S> {
    /// Resolves the held pair once the settle delay has elapsed.
    ///
    /// A pair with the same symbol is cleared from the board; anything else
    /// is turned back face down. Either way the selection is emptied and the
    /// board unlocks. Clearing the last pair completes and scores the round.
    /// A settle timer from an earlier round is ignored.
    pub(super) fn resolve(&self, round: u32) -> Transition {
        let mut turn = self.turn.lock();
        if round != self.round() {
            debug!("stale settle timer from round {round} ignored");
            return Transition::Ignored;
        }
        let (Some(first), Some(second)) = (turn.selection.first, turn.selection.second) else {
            debug!("settle timer ignored: no pair held");
            return Transition::Ignored;
        };

        let mut deck = self.deck.lock();
        let symbols = (
            deck.get(first).map(|card| card.symbol),
            deck.get(second).map(|card| card.symbol),
        );
        let is_match = matches!(symbols, (Some(a), Some(b)) if a == b);

        for index in [first, second] {
            if let Some(card) = deck.get_mut(index) {
                if is_match {
                    card.clear();
                } else {
                    card.turn_down();
                }
            }
        }
        let pairs = deck.pairs();
        drop(deck);

        turn.selection.clear();
        turn.locked = false;

        if !is_match {
            debug!("mismatch: {first} and {second}");
            return Transition::Mismatched { first, second };
        }

        let stats = {
            let mut stats = self.stats.lock();
            stats.correct += 1;
            stats.matched_pairs += 1;
            *stats
        };
        debug!("matched: {first} and {second}");

        if stats.matched_pairs as usize != pairs {
            return Transition::Matched { first, second };
        }

        turn.complete = true;
        drop(turn);

        let score = self.finalize(stats);
        Transition::RoundComplete {
            first,
            second,
            score,
        }
    }

    /// Scores the finished round and stores the player's new best.
    fn finalize(&self, stats: RoundStats) -> ScoreReport {
        let mut settings = self.settings.lock();
        let name = settings.player_name();
        let report = ScoreReport::new(stats, settings.best_score(&name));

        if let Err(err) = settings.set_best_score(&name, report.best) {
            warn!("failed to store best score for {name:?}: {err}");
        }
        drop(settings);

        *self.last_score.lock() = Some(report);

        info!(
            "round {} complete: accuracy {}% over {} attempts, best {}%",
            self.round(),
            report.accuracy,
            stats.attempts,
            report.best
        );
        report
    }
}
