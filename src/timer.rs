//! Timer scheduling for flip animations and the settle delay.
//!
//! The engine never sleeps. When a transition needs a delay it hands a
//! [`Timer`] to a [`Scheduler`]; the host delivers it back through
//! [`Game::fire`](crate::Game::fire) once the delay has elapsed. Browsers
//! back this with `setTimeout`; tests use [`VirtualScheduler`].

use alloc::vec::Vec;

/// What a timer completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// The flip of the card at `index` finished.
    RevealDone {
        /// Card position.
        index: usize,
    },
    /// The settle delay after a pair was revealed elapsed.
    Settle,
}

/// A pending timer, tagged with the round it was scheduled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timer {
    /// Round serial, see [`Game::round`](crate::Game::round).
    pub round: u32,
    /// What the timer completes.
    pub kind: TimerKind,
}

/// Accepts timers to deliver later.
pub trait Scheduler {
    /// Schedules `timer` to fire after `delay_ms`.
    fn schedule(&mut self, delay_ms: u32, timer: Timer);
}

impl Scheduler for Vec<(u32, Timer)> {
    fn schedule(&mut self, delay_ms: u32, timer: Timer) {
        self.push((delay_ms, timer));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    due: u64,
    seq: u64,
    timer: Timer,
}

/// A scheduler driven by virtual time.
///
/// Timers fire in due order; timers due at the same instant fire in the order
/// they were scheduled.
#[derive(Debug, Clone, Default)]
pub struct VirtualScheduler {
    now: u64,
    next_seq: u64,
    queue: Vec<Entry>,
}

impl VirtualScheduler {
    /// Creates a scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current virtual time in milliseconds.
    #[must_use]
    pub const fn now(&self) -> u64 {
        self.now
    }

    /// Returns the number of timers not yet fired.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether no timers are pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Removes and returns the earliest timer due at or before `until`,
    /// moving the clock to its due time.
    pub fn pop_due(&mut self, until: u64) -> Option<Timer> {
        let position = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= until)
            .min_by_key(|(_, entry)| (entry.due, entry.seq))
            .map(|(position, _)| position)?;

        let entry = self.queue.swap_remove(position);
        self.now = self.now.max(entry.due);
        Some(entry.timer)
    }

    /// Moves the clock forward to `until` without firing anything.
    pub const fn settle_at(&mut self, until: u64) {
        if until > self.now {
            self.now = until;
        }
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule(&mut self, delay_ms: u32, timer: Timer) {
        let entry = Entry {
            due: self.now + u64::from(delay_ms),
            seq: self.next_seq,
            timer,
        };
        self.next_seq += 1;
        self.queue.push(entry);
    }
}
