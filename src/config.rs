//! System configuration parameters
//!
//! Start-up state of the effect workers. Nothing here is persisted; every
//! boot starts from these values and the actuators' `Idle` state.

use heapless::String;
use serde::{Deserialize, Serialize};

use crate::app::ports::EffectParameters;
use crate::effect::params::{COLOUR_BLUE, RgbColor, Tone};
use crate::error::{Error, Result};

/// Largest worker stack accepted (KiB).
pub const WORKER_STACK_MAX_KB: usize = 1024;

/// Thread name used when none is configured.
pub const DEFAULT_WORKER_NAME: &str = "effects";

const WORKER_NAME_CAPACITY: usize = 16;
const _: () = assert!(DEFAULT_WORKER_NAME.len() <= WORKER_NAME_CAPACITY);

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- RGB LED ---
    /// Colour shown continuously once the workers start; `None` leaves the LED off.
    pub boot_colour: Option<RgbColor>,

    // --- Buzzer ---
    /// Tone programmed at start-up. The buzzer stays silent until commanded.
    pub boot_tone: Tone,

    // --- Worker thread ---
    /// Name of the thread hosting the effect workers.
    pub worker_name: String<WORKER_NAME_CAPACITY>,
    /// Stack size of that thread (KiB).
    pub worker_stack_kb: usize,
}

impl SystemConfig {
    pub fn validate(&self) -> Result<()> {
        self.boot_tone.validate().map_err(|_| Error::Config("boot tone out of range"))?;
        if self.worker_stack_kb == 0 {
            return Err(Error::Config("worker stack must be non-zero"));
        }
        if self.worker_stack_kb > WORKER_STACK_MAX_KB {
            return Err(Error::Config("worker stack too large"));
        }
        if self.worker_name.is_empty() {
            return Err(Error::Config("worker name must be set"));
        }
        Ok(())
    }

    /// Worker stack in bytes.
    pub fn worker_stack_bytes(&self) -> Result<usize> {
        self.worker_stack_kb
            .checked_mul(1024)
            .ok_or(Error::Config("worker stack too large"))
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            boot_colour: Some(COLOUR_BLUE),
            boot_tone: Tone::new(440, 100),
            // Capacity checked at compile time above.
            worker_name: String::try_from(DEFAULT_WORKER_NAME).unwrap_or_default(),
            worker_stack_kb: 16,
        }
    }
}
