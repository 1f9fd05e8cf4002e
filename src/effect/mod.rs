//! Effect building blocks shared by every actuator type.
//!
//! - [`params`]: concrete payloads (RGB colour, buzzer tone).
//! - [`timing`]: duty-cycle arithmetic turning (interval, duty) into on/off spans.
//! - [`timers`]: the per-actuator set of cancelable delayed actions.

pub mod params;
pub mod timers;
pub mod timing;
