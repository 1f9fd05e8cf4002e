//! Per-actuator timer set.
//!
//! Four cancelable delayed actions, one slot each. The set is owned by the
//! actuator's worker task: arming, cancelling and firing all go through
//! `&mut self`, so a cancel can never race a firing and nothing armed before
//! a cancel fires after it.
//!
//! ```text
//!   slot          deadline    seq
//!   Open          t0          7
//!   Close         t0 + on     9
//!   SetParameters t0          6
//!   IntervalTick  t0 + iv     10
//! ```
//!
//! Due actions fire in deadline order; equal deadlines fire in the order they
//! were armed.

use embassy_time::Instant;

/// The four delayed actions an effect can arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TimerAction {
    Open = 0,
    Close = 1,
    SetParameters = 2,
    IntervalTick = 3,
}

impl TimerAction {
    pub const COUNT: usize = 4;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Open,
        Self::Close,
        Self::SetParameters,
        Self::IntervalTick,
    ];

    const fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy)]
struct Arming {
    deadline: Instant,
    seq: u32,
}

/// One deadline slot per [`TimerAction`].
#[derive(Debug)]
pub struct TimerSet {
    slots: [Option<Arming>; TimerAction::COUNT],
    next_seq: u32,
}

impl TimerSet {
    pub const fn new() -> Self {
        Self {
            slots: [None; TimerAction::COUNT],
            next_seq: 0,
        }
    }

    /// Arm `action` to fire at `deadline`. Re-arming replaces the previous
    /// deadline (latest wins).
    pub fn schedule(&mut self, action: TimerAction, deadline: Instant) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.slots[action.index()] = Some(Arming { deadline, seq });
    }

    /// Disarm `action`. Returns whether it was armed; cancelling an idle
    /// slot is a no-op.
    pub fn cancel(&mut self, action: TimerAction) -> bool {
        self.slots[action.index()].take().is_some()
    }

    pub fn cancel_all(&mut self) {
        self.slots = [None; TimerAction::COUNT];
    }

    pub fn is_armed(&self, action: TimerAction) -> bool {
        self.slots[action.index()].is_some()
    }

    pub fn deadline(&self, action: TimerAction) -> Option<Instant> {
        self.slots[action.index()].map(|a| a.deadline)
    }

    /// Number of armed actions.
    pub fn armed_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Earliest armed deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.slots.iter().flatten().map(|a| a.deadline).min()
    }

    /// Disarm and return the earliest action due at `now`, with the deadline
    /// it was armed for.
    pub fn pop_due(&mut self, now: Instant) -> Option<(TimerAction, Instant)> {
        let action = TimerAction::ALL
            .into_iter()
            .filter_map(|action| {
                self.slots[action.index()]
                    .filter(|a| a.deadline <= now)
                    .map(|a| (action, a))
            })
            // Age relative to `next_seq` keeps arming order across seq wrap-around.
            .min_by_key(|(_, a)| (a.deadline, a.seq.wrapping_sub(self.next_seq)))
            .map(|(action, _)| action)?;

        self.slots[action.index()]
            .take()
            .map(|a| (action, a.deadline))
    }
}

impl Default for TimerSet {
    fn default() -> Self {
        Self::new()
    }
}
