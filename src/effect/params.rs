//! Actuator payloads.
//!
//! The scheduler forwards these untouched to the driver; only intake looks
//! inside them, through [`EffectParameters::validate`].

use serde::{Deserialize, Serialize};

use crate::app::ports::EffectParameters;
use crate::error::ValidationError;

/// Colour for an RGB LED, one 0–255 intensity per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbColor {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl EffectParameters for RgbColor {}

pub const COLOUR_OFF: RgbColor = RgbColor::new(0, 0, 0);
pub const COLOUR_RED: RgbColor = RgbColor::new(255, 0, 0);
pub const COLOUR_GREEN: RgbColor = RgbColor::new(0, 255, 0);
pub const COLOUR_BLUE: RgbColor = RgbColor::new(0, 0, 255);

/// Highest frequency the buzzer accepts.
pub const TONE_FREQUENCY_MAX_HZ: u32 = 10_000;

/// Highest buzzer intensity (percent).
pub const TONE_INTENSITY_MAX: u8 = 100;

/// Tone for a piezo buzzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tone {
    pub frequency_hz: u32,
    /// Loudness, 0–100.
    pub intensity: u8,
}

impl Tone {
    pub const fn new(frequency_hz: u32, intensity: u8) -> Self {
        Self {
            frequency_hz,
            intensity,
        }
    }
}

impl EffectParameters for Tone {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.frequency_hz > TONE_FREQUENCY_MAX_HZ {
            return Err(ValidationError::ParameterOutOfRange("tone frequency"));
        }
        if self.intensity > TONE_INTENSITY_MAX {
            return Err(ValidationError::ParameterOutOfRange("tone intensity"));
        }
        Ok(())
    }
}
