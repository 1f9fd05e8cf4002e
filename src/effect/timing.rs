//! Duty-cycle timing.
//!
//! Turns a blink interval (whole seconds) and a duty percentage into the
//! on and off spans of one cycle. Long intervals are computed in whole
//! seconds; short ones in milliseconds, because integer seconds would
//! collapse e.g. 2 s × 30 % to nothing.

use embassy_time::Duration;

/// Intervals up to and including this many seconds use millisecond arithmetic.
pub const FINE_RESOLUTION_MAX_SECS: u8 = 5;

/// On/off spans of one blink cycle. `on + off` always equals the interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DutySplit {
    pub on: Duration,
    pub off: Duration,
}

/// Split `interval_secs` according to `duty_pct` (0–99).
///
/// Never returns a zero `on` span when both inputs are non-zero: a
/// whole-second result that truncates to zero falls back to milliseconds.
pub fn split(interval_secs: u8, duty_pct: u8) -> DutySplit {
    let interval = Duration::from_secs(u64::from(interval_secs));

    let on = if interval_secs > FINE_RESOLUTION_MAX_SECS {
        let on_secs = u64::from(interval_secs) * u64::from(duty_pct) / 100;
        if on_secs == 0 && duty_pct > 0 {
            fine_on(interval_secs, duty_pct)
        } else {
            Duration::from_secs(on_secs)
        }
    } else {
        fine_on(interval_secs, duty_pct)
    };

    DutySplit {
        on,
        off: interval.checked_sub(on).unwrap_or(Duration::from_ticks(0)),
    }
}

fn fine_on(interval_secs: u8, duty_pct: u8) -> Duration {
    Duration::from_millis(u64::from(interval_secs) * 1000 * u64::from(duty_pct) / 100)
}
