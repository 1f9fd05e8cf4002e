//! Fuzz target: effect intake and scheduling
//!
//! Decodes arbitrary bytes into a stream of effect requests separated by
//! time gaps, validates each one and drives the accepted commands through
//! an `EffectScheduler`. Asserts that nothing panics, that invalid duty
//! cycles never validate, and that an accepted effect always leaves the
//! actuator in a consistent state.
//!
//! cargo fuzz run fuzz_effect_requests

#![no_main]

use actuator_effects::effect::params::Tone;
use actuator_effects::effect::timers::TimerAction;
use actuator_effects::scheduler::{EffectScheduler, EffectState};
use actuator_effects::{
    ActuatorDriver, DriverError, EffectCommand, EffectKind, EffectRequest, ValidationError,
};
use embassy_time::Instant;
use libfuzzer_sys::fuzz_target;

#[derive(Default)]
struct Sink {
    on: bool,
}

impl ActuatorDriver for Sink {
    type Params = Tone;

    fn turn_on(&mut self) -> Result<(), DriverError> {
        self.on = true;
        Ok(())
    }

    fn turn_off(&mut self) -> Result<(), DriverError> {
        self.on = false;
        Ok(())
    }

    fn set_parameters(&mut self, _params: &Tone) -> Result<(), DriverError> {
        Ok(())
    }
}

fn decode(chunk: &[u8]) -> (EffectRequest, Tone, u64) {
    let kind = if chunk[0] & 1 == 0 {
        EffectKind::Continuous
    } else {
        EffectKind::Blinking
    };
    let optional = |flag: u8, value: u8| (chunk[0] & flag != 0).then_some(value);

    let request = EffectRequest {
        kind,
        duty: optional(0b0010, chunk[1]),
        interval_secs: optional(0b0100, chunk[2]),
        duration_secs: chunk[3],
    };
    let tone = Tone::new(u32::from(u16::from_le_bytes([chunk[4], chunk[5]])), chunk[6]);
    let gap_ms = u64::from(chunk[7]) * 100;
    (request, tone, gap_ms)
}

fuzz_target!(|data: &[u8]| {
    let mut sched: EffectScheduler<Tone> = EffectScheduler::new();
    let mut sink = Sink::default();
    let mut now_ms = 0u64;

    for chunk in data.chunks_exact(8) {
        let (request, tone, gap_ms) = decode(chunk);

        // Let the running effect play out for the gap, bounded in steps.
        now_ms += gap_ms;
        let until = Instant::from_millis(now_ms);
        for _ in 0..1_000 {
            match sched.next_deadline() {
                Some(at) if at <= until => {
                    sched.run_due(at, &mut sink);
                }
                _ => break,
            }
        }

        match EffectCommand::new(tone, request) {
            Ok(cmd) => {
                assert!(cmd.effect().duty() < 100);
                sched.accept(cmd, until);
                assert_ne!(sched.state(), EffectState::Idle);
                assert!(!(request.kind == EffectKind::Continuous
                    && sched.timers().is_armed(TimerAction::IntervalTick)));
            }
            Err(ValidationError::DutyOutOfRange(duty)) => assert!(duty >= 100),
            Err(_) => {}
        }
    }

    // Final drain must terminate for bounded effects and never panic.
    sched.run_due(Instant::from_millis(now_ms), &mut sink);
    if sched.state() == EffectState::Idle {
        assert!(!sched.timers().is_armed(TimerAction::IntervalTick));
    }
});
