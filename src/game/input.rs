use log::debug;

use crate::settings::Store;
use crate::timer::{Scheduler, Timer, TimerKind};

use super::{Game, Transition};

impl<S: Store> Game<S> {
    /// Handles a click on the card at `index`.
    ///
    /// A face-down, unmatched card starts flipping face up and the board
    /// locks until its reveal timer fires. Everything else is dropped: clicks
    /// while locked, on matched or face-up cards, on the held card, outside
    /// the board, or after the round is complete.
    pub fn click<T: Scheduler + ?Sized>(&self, index: usize, scheduler: &mut T) -> Transition {
        let delay = self.options.lock().reveal_delay_ms;

        // The serial only moves while the turn lock is held.
        let mut turn = self.turn.lock();
        let round = self.round();

        if turn.locked || turn.complete {
            debug!("click on {index} ignored: board locked");
            return Transition::Ignored;
        }

        if turn.selection.contains(index) {
            debug!("click on {index} ignored: card already held");
            return Transition::Ignored;
        }

        let mut deck = self.deck.lock();
        let Some(card) = deck.get_mut(index) else {
            debug!("click on {index} ignored: no such card");
            return Transition::Ignored;
        };

        if !card.is_selectable() {
            debug!("click on {index} ignored: card is {:?}", card.face());
            return Transition::Ignored;
        }

        card.turn_up();
        drop(deck);

        turn.locked = true;
        turn.revealing = Some(index);
        drop(turn);

        scheduler.schedule(
            delay,
            Timer {
                round,
                kind: TimerKind::RevealDone { index },
            },
        );

        debug!("revealing card {index}");
        Transition::Revealing { index }
    }

    /// Delivers a timer that was handed to a [`Scheduler`].
    ///
    /// Timers from an earlier round, or that no longer match the turn state,
    /// are ignored.
    pub fn fire<T: Scheduler + ?Sized>(&self, timer: Timer, scheduler: &mut T) -> Transition {
        match timer.kind {
            TimerKind::RevealDone { index } => self.finish_reveal(index, timer.round, scheduler),
            TimerKind::Settle => self.resolve(timer.round),
        }
    }

    fn finish_reveal<T: Scheduler + ?Sized>(
        &self,
        index: usize,
        round: u32,
        scheduler: &mut T,
    ) -> Transition {
        let delay = self.options.lock().settle_delay_ms;

        let mut turn = self.turn.lock();
        if round != self.round() {
            debug!("stale reveal timer for {index} from round {round} ignored");
            return Transition::Ignored;
        }
        if turn.revealing != Some(index) {
            debug!("reveal timer for {index} ignored: not revealing");
            return Transition::Ignored;
        }

        turn.revealing = None;
        turn.locked = false;

        let Some(first) = turn.selection.first else {
            turn.selection.first = Some(index);
            return Transition::Selected { index };
        };

        turn.selection.second = Some(index);
        turn.locked = true;
        self.stats.lock().attempts += 1;
        drop(turn);

        scheduler.schedule(
            delay,
            Timer {
                round,
                kind: TimerKind::Settle,
            },
        );

        debug!("pair selected: {first} and {index}");
        Transition::PairSelected {
            first,
            second: index,
        }
    }
}
