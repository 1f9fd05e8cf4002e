//! Log-based actuator adapter.
//!
//! Implements [`ActuatorDriver`] in memory and writes every call to the
//! logger. Used on host/simulation targets where no PWM peripheral exists;
//! a board adapter implements the same trait.

use core::fmt::Debug;

use log::info;

use crate::app::ports::ActuatorDriver;
use crate::error::DriverError;

/// Adapter that logs every port call and remembers the resulting state.
pub struct LogActuator<P> {
    label: &'static str,
    on: bool,
    parameters: Option<P>,
}

impl<P> LogActuator<P> {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            on: false,
            parameters: None,
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn parameters(&self) -> Option<&P> {
        self.parameters.as_ref()
    }
}

impl<P: Clone + Debug> ActuatorDriver for LogActuator<P> {
    type Params = P;

    fn turn_on(&mut self) -> Result<(), DriverError> {
        info!("ACT | {} on", self.label);
        self.on = true;
        Ok(())
    }

    fn turn_off(&mut self) -> Result<(), DriverError> {
        info!("ACT | {} off", self.label);
        self.on = false;
        Ok(())
    }

    fn set_parameters(&mut self, params: &P) -> Result<(), DriverError> {
        info!("ACT | {} params={:?}", self.label, params);
        self.parameters = Some(params.clone());
        Ok(())
    }
}
