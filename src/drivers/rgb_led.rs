//! RGB LED driver.
//!
//! Three PWM channels drive discrete R/G/B LEDs (or a common-cathode RGB
//! LED). Each colour component maps to a `component / 255` duty fraction.
//!
//! "Off" drives every channel fully off without forgetting the latched
//! colour, so the next `turn_on` restores it.

use embedded_hal::pwm::SetDutyCycle;

use crate::app::ports::ActuatorDriver;
use crate::effect::params::{COLOUR_OFF, RgbColor};
use crate::error::DriverError;

pub struct RgbLed<R, G, B> {
    red: R,
    green: G,
    blue: B,
    colour: RgbColor,
    lit: bool,
}

impl<R, G, B> RgbLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    pub fn new(red: R, green: G, blue: B) -> Self {
        Self {
            red,
            green,
            blue,
            colour: COLOUR_OFF,
            lit: false,
        }
    }

    pub fn colour(&self) -> RgbColor {
        self.colour
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }

    fn write(&mut self, colour: RgbColor) -> Result<(), DriverError> {
        write_component(&mut self.red, colour.red)?;
        write_component(&mut self.green, colour.green)?;
        write_component(&mut self.blue, colour.blue)
    }

    /// Hand back the PWM channels.
    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }
}

fn write_component(channel: &mut impl SetDutyCycle, value: u8) -> Result<(), DriverError> {
    channel
        .set_duty_cycle_fraction(u16::from(value), u16::from(u8::MAX))
        .map_err(|_| DriverError::PwmWriteFailed)
}

impl<R, G, B> ActuatorDriver for RgbLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    type Params = RgbColor;

    fn turn_on(&mut self) -> Result<(), DriverError> {
        self.write(self.colour)?;
        self.lit = true;
        Ok(())
    }

    fn turn_off(&mut self) -> Result<(), DriverError> {
        self.lit = false;
        self.write(COLOUR_OFF)
    }

    fn set_parameters(&mut self, params: &RgbColor) -> Result<(), DriverError> {
        self.colour = *params;
        if self.lit {
            self.write(self.colour)?;
        }
        Ok(())
    }
}
