//! On/off RGB LED driver for boards without PWM on the LED pins.
//!
//! Each colour component is reduced to a single bit: a channel is driven
//! high when its component is at least [`GPIO_ON_THRESHOLD`]. Pins are
//! active-high.

use embedded_hal::digital::OutputPin;

use crate::app::ports::ActuatorDriver;
use crate::effect::params::{COLOUR_OFF, RgbColor};
use crate::error::DriverError;

/// Lowest component value that lights a GPIO channel.
pub const GPIO_ON_THRESHOLD: u8 = 128;

pub struct GpioRgbLed<R, G, B> {
    red: R,
    green: G,
    blue: B,
    colour: RgbColor,
    lit: bool,
}

impl<R, G, B> GpioRgbLed<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
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
        write_pin(&mut self.red, colour.red)?;
        write_pin(&mut self.green, colour.green)?;
        write_pin(&mut self.blue, colour.blue)
    }

    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }
}

fn write_pin(pin: &mut impl OutputPin, value: u8) -> Result<(), DriverError> {
    let result = if value >= GPIO_ON_THRESHOLD {
        pin.set_high()
    } else {
        pin.set_low()
    };
    result.map_err(|_| DriverError::GpioWriteFailed)
}

impl<R, G, B> ActuatorDriver for GpioRgbLed<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
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
