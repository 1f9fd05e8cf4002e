//! Actuator effect controller.
//!
//! Drives timed effects on output channels such as an RGB LED or a piezo
//! buzzer: "stay on for N seconds" or "blink at a duty cycle every N
//! seconds, for M seconds or forever". Each actuator owns an independent
//! [`ActuatorScheduler`](app::service::ActuatorScheduler); at most one effect
//! runs per actuator and a new command always preempts the running one.
//!
//! ```text
//!  caller ──▶ ActuatorScheduler (channel) ──▶ worker ──▶ EffectScheduler ──▶ ActuatorDriver
//! ```

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod effect;
pub mod error;
pub mod runtime;
pub mod scheduler;

pub mod adapters;
pub mod drivers;

pub use app::commands::{EffectCommand, EffectKind, EffectRequest};
pub use app::ports::{ActuatorDriver, EffectParameters};
pub use app::service::ActuatorScheduler;
pub use error::{DriverError, Error, ValidationError};
