//! Effect worker runtime: hosts every actuator's worker loop.
//!
//! Runs in a dedicated thread using `edge-executor` for cooperative
//! scheduling. Each worker waits on its own command channel and timer
//! deadline, so one thread serves all actuators without busy-polling.
//!
//! ```text
//!  ┌──────────────────────────────────────────────────────┐
//!  │  Effect thread                                       │
//!  │  ┌────────────────────────────────────────────────┐  │
//!  │  │  futures_lite::block_on                        │  │
//!  │  │  ┌──────────────────────────────────────────┐  │  │
//!  │  │  │  edge_executor::LocalExecutor            │  │  │
//!  │  │  │   ┌──────────────┐  ┌────────────────┐   │  │  │
//!  │  │  │   │ RGB worker   │  │ Buzzer worker  │   │  │  │
//!  │  │  │   │ cmd | timer  │  │ cmd | timer    │   │  │  │
//!  │  │  │   └──────────────┘  └────────────────┘   │  │  │
//!  │  │  └──────────────────────────────────────────┘  │  │
//!  │  └────────────────────────────────────────────────┘  │
//!  └──────────────────────────────────────────────────────┘
//! ```

use anyhow::{Context, Result};
use log::{info, warn};

use crate::app::commands::{EffectCommand, EffectRequest};
use crate::app::ports::ActuatorDriver;
use crate::app::service::ActuatorScheduler;
use crate::config::SystemConfig;
use crate::effect::params::{RgbColor, Tone};
use crate::error::Error;

/// Maximum tasks on the effect executor.
const EXECUTOR_TASKS: usize = 4;

/// Bring up the board's effect workers.
///
/// Checks the configuration and builds the boot command first, so nothing is
/// queued or programmed when the configuration is rejected. Then programs the
/// boot tone into the buzzer (it stays silent), spawns the thread running
/// both worker loops, and finally queues the boot colour as a
/// forever-continuous effect. The workers never return; neither does the
/// thread.
pub fn spawn_workers<R, B>(
    rgb: &'static ActuatorScheduler<RgbColor>,
    rgb_driver: R,
    buzzer: &'static ActuatorScheduler<Tone>,
    mut buzzer_driver: B,
    config: &SystemConfig,
) -> Result<std::thread::JoinHandle<()>>
where
    R: ActuatorDriver<Params = RgbColor> + Send + 'static,
    B: ActuatorDriver<Params = Tone> + Send + 'static,
{
    config.validate().context("invalid effect configuration")?;
    let stack_bytes = config
        .worker_stack_bytes()
        .context("invalid effect configuration")?;
    let boot_command = config
        .boot_colour
        .map(|colour| EffectCommand::new(colour, EffectRequest::continuous(0)))
        .transpose()
        .map_err(Error::from)
        .context("invalid boot colour")?;

    if let Err(e) = buzzer_driver.set_parameters(&config.boot_tone) {
        warn!("{}: boot tone not applied: {}", buzzer.label(), e);
    }

    let name = config.worker_name.as_str().to_owned();
    info!("Spawning '{}' (stack={}KB)", name, config.worker_stack_kb);

    let handle = std::thread::Builder::new()
        .name(name)
        .stack_size(stack_bytes)
        .spawn(move || run_workers(rgb, rgb_driver, buzzer, buzzer_driver))
        .context("effect worker thread creation failed")?;

    // The workers are up; a full queue only costs the boot colour.
    if let Some(command) = boot_command {
        if let Err(e) = rgb.submit(command) {
            warn!("{}: boot colour not queued: {}", rgb.label(), e);
        }
    }

    Ok(handle)
}

fn run_workers<R, B>(
    rgb: &'static ActuatorScheduler<RgbColor>,
    rgb_driver: R,
    buzzer: &'static ActuatorScheduler<Tone>,
    buzzer_driver: B,
) where
    R: ActuatorDriver<Params = RgbColor>,
    B: ActuatorDriver<Params = Tone>,
{
    let executor: edge_executor::LocalExecutor<'_, EXECUTOR_TASKS> =
        edge_executor::LocalExecutor::new();

    executor.spawn(rgb.run(rgb_driver)).detach();
    executor.spawn(buzzer.run(buzzer_driver)).detach();

    info!(
        "Effect workers started ({}, {})",
        rgb.label(),
        buzzer.label()
    );

    futures_lite::future::block_on(executor.run(core::future::pending::<()>()));
}
