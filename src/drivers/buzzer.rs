//! Piezo buzzer driver.
//!
//! Loudness comes from the PWM duty (a square wave peaks at 50 %, so
//! intensity 0–100 maps onto 0–50 % duty); pitch comes from a
//! [`ToneGenerator`], since `embedded-hal` has no frequency trait.
//!
//! ## Safety contract
//!
//! Frequency and intensity ranges are enforced at intake
//! ([`Tone`]'s validation). This driver is a dumb actuator.

use embedded_hal::pwm::SetDutyCycle;

use crate::app::ports::ActuatorDriver;
use crate::effect::params::{TONE_INTENSITY_MAX, Tone};
use crate::error::DriverError;

/// Sets the PWM carrier frequency of the buzzer output.
pub trait ToneGenerator {
    fn set_frequency_hz(&mut self, hz: u32) -> Result<(), DriverError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuzzerState {
    Silent,
    Sounding { frequency_hz: u32, intensity: u8 },
}

pub struct Buzzer<C, T> {
    channel: C,
    tone_gen: T,
    tone: Tone,
    sounding: bool,
}

impl<C: SetDutyCycle, T: ToneGenerator> Buzzer<C, T> {
    pub fn new(channel: C, tone_gen: T, initial: Tone) -> Self {
        Self {
            channel,
            tone_gen,
            tone: initial,
            sounding: false,
        }
    }

    pub fn state(&self) -> BuzzerState {
        if self.sounding {
            BuzzerState::Sounding {
                frequency_hz: self.tone.frequency_hz,
                intensity: self.tone.intensity,
            }
        } else {
            BuzzerState::Silent
        }
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    fn set_duty_hw(&mut self, intensity: u8) -> Result<(), DriverError> {
        let intensity = intensity.min(TONE_INTENSITY_MAX);
        self.channel
            .set_duty_cycle_fraction(u16::from(intensity), u16::from(TONE_INTENSITY_MAX) * 2)
            .map_err(|_| DriverError::PwmWriteFailed)
    }
}

impl<C: SetDutyCycle, T: ToneGenerator> ActuatorDriver for Buzzer<C, T> {
    type Params = Tone;

    fn turn_on(&mut self) -> Result<(), DriverError> {
        self.set_duty_hw(self.tone.intensity)?;
        self.sounding = true;
        Ok(())
    }

    fn turn_off(&mut self) -> Result<(), DriverError> {
        self.sounding = false;
        self.channel
            .set_duty_cycle_fully_off()
            .map_err(|_| DriverError::PwmWriteFailed)
    }

    fn set_parameters(&mut self, params: &Tone) -> Result<(), DriverError> {
        self.tone_gen.set_frequency_hz(params.frequency_hz)?;
        self.tone = *params;
        if self.sounding {
            self.set_duty_hw(self.tone.intensity)?;
        }
        Ok(())
    }
}
