//! Actuator scheduler service: command intake and the worker loop.
//!
//! One [`ActuatorScheduler`] exists per actuator. Callers submit commands
//! without ever blocking; a single worker task owns the
//! [`EffectScheduler`] and its timer set, so timer firings and command
//! handling are serialized on one execution context.
//!
//! ```text
//!  shell / app ──try_send──▶ ┌──────────────┐  receive   ┌──────────────┐
//!  shell / app ──try_send──▶ │  Channel<N>  │──────────▶│  run(driver) │──▶ ActuatorDriver
//!                            └──────────────┘            │  timers ⏱    │
//!                                                        └──────────────┘
//! ```

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, TrySendError};
use embassy_time::{Instant, with_deadline};
use log::{info, warn};

use crate::error::{Error, Result};
use crate::scheduler::EffectScheduler;

use super::commands::{EffectCommand, EffectRequest};
use super::ports::{ActuatorDriver, EffectParameters};

/// Default command queue depth per actuator.
pub const COMMAND_QUEUE_DEPTH: usize = 5;

/// Command channel and worker entry point for one actuator.
///
/// `new` is `const`, so instances can live in `static`s and be shared by
/// every producer.
pub struct ActuatorScheduler<P, const N: usize = COMMAND_QUEUE_DEPTH> {
    label: &'static str,
    commands: Channel<CriticalSectionRawMutex, EffectCommand<P>, N>,
}

impl<P, const N: usize> ActuatorScheduler<P, N> {
    pub const fn new(label: &'static str) -> Self {
        Self {
            label,
            commands: Channel::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Commands queued and not yet taken by the worker.
    pub fn pending(&self) -> usize {
        self.commands.len()
    }

    /// Queue a validated command. Never blocks.
    pub fn submit(&self, command: EffectCommand<P>) -> Result<()> {
        match self.commands.try_send(command) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => {
                warn!("{}: command channel full, dropping command", self.label);
                Err(Error::ChannelFull)
            }
        }
    }

    /// Worker loop. Never returns.
    ///
    /// Fires due timer actions, then waits for the next command no longer
    /// than the next armed deadline. A received command preempts the running
    /// effect before it is applied.
    pub async fn run<D>(&self, mut driver: D)
    where
        D: ActuatorDriver<Params = P>,
    {
        let mut scheduler: EffectScheduler<P> = EffectScheduler::new();
        info!("{}: effect worker started (queue depth {})", self.label, N);

        loop {
            scheduler.run_due(Instant::now(), &mut driver);

            let command = match scheduler.next_deadline() {
                Some(deadline) => match with_deadline(deadline, self.commands.receive()).await {
                    Ok(command) => command,
                    Err(_) => continue,
                },
                None => self.commands.receive().await,
            };

            info!("{}: command received", self.label);
            scheduler.accept(command, Instant::now());
        }
    }
}

impl<P: EffectParameters, const N: usize> ActuatorScheduler<P, N> {
    /// Validate and queue an effect. Validation failures are reported
    /// synchronously and never reach the channel.
    pub fn submit_effect(&self, parameters: P, request: EffectRequest) -> Result<()> {
        let command = EffectCommand::new(parameters, request).inspect_err(|e| {
            warn!("{}: rejected effect: {}", self.label, e);
        })?;
        self.submit(command)
    }
}
