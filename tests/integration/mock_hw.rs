//! Mock hardware adapters for integration tests.
//!
//! Records every actuator call with a millisecond timestamp so tests can
//! assert on the full command history without touching real PWM registers.

use actuator_effects::ActuatorDriver;
use actuator_effects::DriverError;
use actuator_effects::scheduler::EffectScheduler;
use embassy_time::Instant;
use std::sync::{Arc, Mutex};

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Call<P> {
    On,
    Off,
    Set(P),
}

// ── StepRecorder (synthetic time) ─────────────────────────────

/// Recorder whose clock is set by the test via [`run_until`].
pub struct StepRecorder<P> {
    pub now_ms: u64,
    pub calls: Vec<(u64, Call<P>)>,
}

#[allow(dead_code)]
impl<P: PartialEq> StepRecorder<P> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            calls: Vec::new(),
        }
    }

    /// Timestamps of every call equal to `call`.
    pub fn times_of(&self, call: &Call<P>) -> Vec<u64> {
        self.calls
            .iter()
            .filter(|(_, c)| c == call)
            .map(|(t, _)| *t)
            .collect()
    }
}

impl<P: Clone> ActuatorDriver for StepRecorder<P> {
    type Params = P;

    fn turn_on(&mut self) -> Result<(), DriverError> {
        self.calls.push((self.now_ms, Call::On));
        Ok(())
    }

    fn turn_off(&mut self) -> Result<(), DriverError> {
        self.calls.push((self.now_ms, Call::Off));
        Ok(())
    }

    fn set_parameters(&mut self, params: &P) -> Result<(), DriverError> {
        self.calls.push((self.now_ms, Call::Set(params.clone())));
        Ok(())
    }
}

/// Advance a scheduler deadline by deadline up to `until_ms`.
pub fn run_until<P: Clone>(
    sched: &mut EffectScheduler<P>,
    rec: &mut StepRecorder<P>,
    until_ms: u64,
) {
    let until = Instant::from_millis(until_ms);
    while let Some(at) = sched.next_deadline() {
        if at > until {
            break;
        }
        rec.now_ms = at.as_millis();
        sched.run_due(at, rec);
    }
}

// ── SharedRecorder (real time, cross-thread) ──────────────────

/// Recorder that can be moved into a worker thread while the test keeps a
/// handle to the history. Timestamps are milliseconds since construction.
#[derive(Clone)]
pub struct SharedRecorder<P> {
    start: Instant,
    calls: Arc<Mutex<Vec<(u64, Call<P>)>>>,
}

#[allow(dead_code)]
impl<P: Clone + PartialEq> SharedRecorder<P> {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis()
    }

    pub fn snapshot(&self) -> Vec<(u64, Call<P>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: &Call<P>) -> usize {
        self.snapshot().iter().filter(|(_, c)| c == call).count()
    }

    /// Output state implied by the last on/off call.
    pub fn is_on(&self) -> bool {
        self.snapshot()
            .iter()
            .rev()
            .find_map(|(_, c)| match c {
                Call::On => Some(true),
                Call::Off => Some(false),
                Call::Set(_) => None,
            })
            .unwrap_or(false)
    }

    fn push(&self, call: Call<P>) {
        let t = self.elapsed_ms();
        self.calls.lock().unwrap().push((t, call));
    }
}

impl<P: Clone + PartialEq> ActuatorDriver for SharedRecorder<P> {
    type Params = P;

    fn turn_on(&mut self) -> Result<(), DriverError> {
        self.push(Call::On);
        Ok(())
    }

    fn turn_off(&mut self) -> Result<(), DriverError> {
        self.push(Call::Off);
        Ok(())
    }

    fn set_parameters(&mut self, params: &P) -> Result<(), DriverError> {
        self.push(Call::Set(params.clone()));
        Ok(())
    }
}
