//! Application core: effect intake, zero I/O.
//!
//! Callers build [`commands::EffectCommand`]s and hand them to an
//! [`service::ActuatorScheduler`]. All interaction with hardware happens
//! through the port traits in [`ports`], keeping this layer testable without
//! real peripherals.

pub mod commands;
pub mod ports;
pub mod service;
