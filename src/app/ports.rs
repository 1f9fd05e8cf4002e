//! Port traits: the boundary between the effect core and actuator hardware.
//!
//! ```text
//!   EffectScheduler ──▶ ActuatorDriver ──▶ PWM / GPIO adapter
//! ```
//!
//! Driven adapters (RGB LED, buzzer, simulation) implement
//! [`ActuatorDriver`]. The scheduler consumes it via generics, so the effect
//! core never touches hardware directly and never interprets the payload it
//! forwards through [`ActuatorDriver::set_parameters`].

use crate::error::{DriverError, ValidationError};

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: effect core → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the scheduler calls this to drive one actuator.
///
/// Calls happen from the actuator's worker task and must be fast and
/// non-blocking (direct register or peripheral writes). A returned error is
/// logged by the caller; the effect keeps its timing schedule.
pub trait ActuatorDriver {
    /// Actuator-specific payload, e.g. a colour or a tone.
    type Params;

    /// Energise the output with the last applied parameters.
    fn turn_on(&mut self) -> Result<(), DriverError>;

    /// De-energise the output.
    fn turn_off(&mut self) -> Result<(), DriverError>;

    /// Latch new parameters.
    fn set_parameters(&mut self, params: &Self::Params) -> Result<(), DriverError>;
}

impl<D: ActuatorDriver + ?Sized> ActuatorDriver for &mut D {
    type Params = D::Params;

    fn turn_on(&mut self) -> Result<(), DriverError> {
        (**self).turn_on()
    }

    fn turn_off(&mut self) -> Result<(), DriverError> {
        (**self).turn_off()
    }

    fn set_parameters(&mut self, params: &Self::Params) -> Result<(), DriverError> {
        (**self).set_parameters(params)
    }
}

// ───────────────────────────────────────────────────────────────
// Payload validation
// ───────────────────────────────────────────────────────────────

/// Payloads carried by an [`EffectCommand`](super::commands::EffectCommand).
///
/// Checked once at intake, before the command is queued. Payloads with no
/// constrained fields keep the default.
pub trait EffectParameters {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
