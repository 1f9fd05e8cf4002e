//! Effect scheduler: the per-actuator state machine.
//!
//! Turns accepted [`EffectCommand`]s into timed driver calls through the
//! actuator's [`TimerSet`]. Time is passed in explicitly, so the machine is
//! independently testable without a running clock; the worker loop in
//! [`ActuatorScheduler`](crate::app::service::ActuatorScheduler) feeds it
//! `Instant::now()`.
//!
//! ```text
//!                 ┌──────── new command (always preempts) ────────┐
//!                 ▼                                               │
//!  ┌──────┐  Continuous   ┌──────────────────┐  Close             │
//!  │ Idle │──────────────▶│ ContinuousActive │───────────▶ Idle   │
//!  └──────┘               └──────────────────┘                    │
//!     │      Blinking     ┌──────────────────┐  IntervalTick ─┐   │
//!     └──────────────────▶│  BlinkingActive  │◀───────────────┘   │
//!                         └──────────────────┘                    │
//!                           │ countdown ≤ 0, last Close ──▶ Idle  │
//!                           └─────────────────────────────────────┘
//! ```
//!
//! One blink cycle (IntervalTick at `t`):
//!
//! ```text
//!   t: SetParameters, Open      t+on: Close      t+interval: IntervalTick
//! ```

use embassy_time::{Duration, Instant};
use log::{debug, info, warn};

use crate::app::commands::{EffectCommand, EffectKind};
use crate::app::ports::ActuatorDriver;
use crate::effect::timers::{TimerAction, TimerSet};
use crate::effect::timing;
use crate::error::DriverError;

// ═══════════════════════════════════════════════════════════════
//  State
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectState {
    Idle,
    ContinuousActive,
    BlinkingActive,
}

/// Effect state machine for one actuator.
pub struct EffectScheduler<P> {
    state: EffectState,
    /// Last accepted command; dropped when the effect ends.
    active: Option<EffectCommand<P>>,
    /// Seconds of blinking left. Signed: the last interval may overshoot.
    remaining_secs: i16,
    timers: TimerSet,
}

impl<P> EffectScheduler<P> {
    pub fn new() -> Self {
        Self {
            state: EffectState::Idle,
            active: None,
            remaining_secs: 0,
            timers: TimerSet::new(),
        }
    }

    pub fn state(&self) -> EffectState {
        self.state
    }

    pub fn remaining_secs(&self) -> i16 {
        self.remaining_secs
    }

    pub fn active(&self) -> Option<&EffectCommand<P>> {
        self.active.as_ref()
    }

    pub fn timers(&self) -> &TimerSet {
        &self.timers
    }

    /// When the worker must next call [`run_due`](Self::run_due).
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Cancel the running effect's pending Close and IntervalTick.
    pub fn preempt(&mut self) {
        let close = self.timers.cancel(TimerAction::Close);
        let tick = self.timers.cancel(TimerAction::IntervalTick);
        if close || tick {
            debug!("effect preempted (close={}, tick={})", close, tick);
        }
    }

    /// Take ownership of a new command and start its effect at `now`.
    ///
    /// Preemption is unconditional: whatever was running loses its pending
    /// Close and IntervalTick before the new effect is applied.
    pub fn accept(&mut self, command: EffectCommand<P>, now: Instant) {
        self.preempt();

        let effect = *command.effect();
        self.active = Some(command);

        match effect.kind() {
            EffectKind::Continuous => {
                info!("effect: continuous for {}s (0 = forever)", effect.duration_secs());
                self.state = EffectState::ContinuousActive;
                self.timers.schedule(TimerAction::SetParameters, now);
                self.timers.schedule(TimerAction::Open, now);
                if !effect.runs_forever() {
                    let hold = Duration::from_secs(u64::from(effect.duration_secs()));
                    self.timers.schedule(TimerAction::Close, now + hold);
                }
            }
            EffectKind::Blinking => {
                info!(
                    "effect: blinking every {}s at {}% for {}s (0 = forever)",
                    effect.interval_secs(),
                    effect.duty(),
                    effect.duration_secs()
                );
                self.state = EffectState::BlinkingActive;
                self.remaining_secs = i16::from(effect.duration_secs());
                self.timers.schedule(TimerAction::IntervalTick, now);
            }
        }
    }

    /// Fire every action due at `now`, including zero-delay actions armed by
    /// earlier firings in the same pass. Returns the number fired.
    pub fn run_due<D>(&mut self, now: Instant, driver: &mut D) -> usize
    where
        D: ActuatorDriver<Params = P> + ?Sized,
    {
        let mut fired = 0;
        while let Some((action, deadline)) = self.timers.pop_due(now) {
            self.fire(action, deadline, driver);
            fired += 1;
        }
        fired
    }

    // ── Actions ───────────────────────────────────────────────

    fn fire<D>(&mut self, action: TimerAction, at: Instant, driver: &mut D)
    where
        D: ActuatorDriver<Params = P> + ?Sized,
    {
        debug!("timer {:?} fired", action);
        match action {
            TimerAction::Open => report(action, driver.turn_on()),
            TimerAction::SetParameters => {
                if let Some(cmd) = &self.active {
                    report(action, driver.set_parameters(cmd.parameters()));
                }
            }
            TimerAction::Close => {
                report(action, driver.turn_off());
                self.on_close();
            }
            TimerAction::IntervalTick => self.interval_tick(at),
        }
    }

    fn on_close(&mut self) {
        let finished = match self.state {
            EffectState::ContinuousActive => true,
            // Only the Close of the final cycle ends a blink.
            EffectState::BlinkingActive => !self.timers.is_armed(TimerAction::IntervalTick),
            EffectState::Idle => false,
        };
        if finished {
            info!("effect finished");
            self.state = EffectState::Idle;
            self.active = None;
        }
    }

    /// Start one blink cycle at `at` and decide whether another follows.
    ///
    /// A forever blink re-arms unconditionally and a bounded one re-arms while
    /// the signed countdown stays above zero, with one exception: an
    /// `interval` of 0 never re-arms, whatever the duration. Re-arming at zero
    /// delay would keep `run_due` firing without end, so such a blink runs a
    /// single cycle and returns to `Idle`.
    fn interval_tick(&mut self, at: Instant) {
        let Some(effect) = self.active.as_ref().map(|cmd| *cmd.effect()) else {
            return;
        };

        self.timers.schedule(TimerAction::SetParameters, at);
        self.timers.schedule(TimerAction::Open, at);

        let split = timing::split(effect.interval_secs(), effect.duty());
        self.timers.schedule(TimerAction::Close, at + split.on);

        let interval = effect.interval_secs();
        if interval == 0 {
            // A zero-delay re-arm would spin forever.
            warn!("blink interval is 0s, running a single cycle");
            self.remaining_secs = 0;
            return;
        }

        let rearm = if effect.runs_forever() {
            true
        } else {
            self.remaining_secs -= i16::from(interval);
            if self.remaining_secs > 0 {
                true
            } else {
                self.remaining_secs = 0;
                false
            }
        };

        if rearm {
            let next = at + Duration::from_secs(u64::from(interval));
            self.timers.schedule(TimerAction::IntervalTick, next);
        } else {
            debug!("blink countdown elapsed, last cycle");
        }
    }
}

impl<P> Default for EffectScheduler<P> {
    fn default() -> Self {
        Self::new()
    }
}

fn report(action: TimerAction, result: Result<(), DriverError>) {
    if let Err(e) = result {
        warn!("actuator {:?} failed: {} (effect continues)", action, e);
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
