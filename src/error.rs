//! Unified error types for the effect controller.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! caller-facing surface uniform. All variants are `Copy` so they can be
//! returned from `submit` paths without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The command was malformed and never reached the channel.
    Validation(ValidationError),
    /// The actuator's command queue is saturated; the caller may retry or drop.
    ChannelFull,
    /// The actuator port failed to apply a state change.
    Driver(DriverError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "validation: {e}"),
            Self::ChannelFull => write!(f, "command channel full"),
            Self::Driver(e) => write!(f, "driver: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

/// Rejections raised at intake, synchronously to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Duty cycle must be below 100 %.
    DutyOutOfRange(u8),
    /// A blinking effect was requested without an interval.
    MissingInterval,
    /// A blinking effect was requested without a duty cycle.
    MissingDuty,
    /// An actuator payload field is outside its range.
    ParameterOutOfRange(&'static str),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DutyOutOfRange(duty) => write!(f, "duty {duty}% out of range (0-99)"),
            Self::MissingInterval => write!(f, "blinking effect requires an interval"),
            Self::MissingDuty => write!(f, "blinking effect requires a duty cycle"),
            Self::ParameterOutOfRange(field) => write!(f, "{field} out of range"),
        }
    }
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

// ---------------------------------------------------------------------------
// Driver errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverError {
    /// PWM duty-cycle write failed.
    PwmWriteFailed,
    /// GPIO set failed.
    GpioWriteFailed,
    /// The tone generator refused the requested frequency.
    ToneRejected,
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PwmWriteFailed => write!(f, "PWM write failed"),
            Self::GpioWriteFailed => write!(f, "GPIO write failed"),
            Self::ToneRejected => write!(f, "tone frequency rejected"),
        }
    }
}

impl From<DriverError> for Error {
    fn from(e: DriverError) -> Self {
        Self::Driver(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
