//! Inbound effect commands.
//!
//! Callers (shell handlers, application logic, an uplink) describe what an
//! actuator should do with an [`EffectRequest`]. Validation turns it into
//! an [`Effect`], and together with the actuator payload it becomes the
//! immutable [`EffectCommand`] that travels through the command channel.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

use super::ports::EffectParameters;

/// Duty cycles are percentages strictly below this bound.
pub const DUTY_LIMIT: u8 = 100;

/// Shape of an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Stay on for `duration` seconds (0 = until preempted).
    Continuous,
    /// Cycle on/off every `interval` seconds at `duty` percent.
    Blinking,
}

/// Raw effect parameters as supplied by a caller.
///
/// `duty` and `interval_secs` are optional so that a missing argument can be
/// told apart from an explicit zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectRequest {
    pub kind: EffectKind,
    pub duty: Option<u8>,
    pub interval_secs: Option<u8>,
    /// Total run time in seconds; 0 runs forever.
    pub duration_secs: u8,
}

impl EffectRequest {
    pub fn continuous(duration_secs: u8) -> Self {
        Self {
            kind: EffectKind::Continuous,
            duty: None,
            interval_secs: None,
            duration_secs,
        }
    }

    pub fn blinking(interval_secs: u8, duty: u8, duration_secs: u8) -> Self {
        Self {
            kind: EffectKind::Blinking,
            duty: Some(duty),
            interval_secs: Some(interval_secs),
            duration_secs,
        }
    }

    /// Check the request and produce a validated [`Effect`].
    pub fn validate(&self) -> Result<Effect, ValidationError> {
        if let Some(duty) = self.duty {
            if duty >= DUTY_LIMIT {
                return Err(ValidationError::DutyOutOfRange(duty));
            }
        }

        let (interval_secs, duty) = match self.kind {
            EffectKind::Continuous => (self.interval_secs.unwrap_or(0), self.duty.unwrap_or(0)),
            EffectKind::Blinking => (
                self.interval_secs.ok_or(ValidationError::MissingInterval)?,
                self.duty.ok_or(ValidationError::MissingDuty)?,
            ),
        };

        Ok(Effect {
            kind: self.kind,
            duty,
            interval_secs,
            duration_secs: self.duration_secs,
        })
    }
}

/// Validated effect timing. Only obtainable through [`EffectRequest::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Effect {
    kind: EffectKind,
    duty: u8,
    interval_secs: u8,
    duration_secs: u8,
}

impl Effect {
    pub fn kind(&self) -> EffectKind {
        self.kind
    }

    /// On-fraction of each interval, 0-99 %.
    pub fn duty(&self) -> u8 {
        self.duty
    }

    pub fn interval_secs(&self) -> u8 {
        self.interval_secs
    }

    pub fn duration_secs(&self) -> u8 {
        self.duration_secs
    }

    /// A zero duration never self-terminates.
    pub fn runs_forever(&self) -> bool {
        self.duration_secs == 0
    }
}

/// An immutable command for one actuator: what to show and how to time it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectCommand<P> {
    parameters: P,
    effect: Effect,
}

impl<P: EffectParameters> EffectCommand<P> {
    /// Validate the payload and the effect request together.
    pub fn new(parameters: P, request: EffectRequest) -> Result<Self, ValidationError> {
        parameters.validate()?;
        let effect = request.validate()?;
        Ok(Self { parameters, effect })
    }
}

impl<P> EffectCommand<P> {
    pub fn parameters(&self) -> &P {
        &self.parameters
    }

    pub fn effect(&self) -> &Effect {
        &self.effect
    }
}
