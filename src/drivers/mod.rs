//! Actuator drivers implementing [`ActuatorDriver`](crate::app::ports::ActuatorDriver).

pub mod buzzer;
pub mod gpio_led;
pub mod rgb_led;
