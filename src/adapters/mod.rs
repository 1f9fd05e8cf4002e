//! Adapters: outer-ring implementations of the port traits.

pub mod log_actuator;
