//! Periodic timer feeding decay and calendar ticks to the simulation worker.
//!
//! The ticker holds no state of its own; whether a tick has any effect is
//! decided by the simulation worker (ticks are ignored unless the pet is
//! active).

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

use super::{Command, Tick};

/// Background task that sends [`Tick`]s on two fixed intervals.
pub struct TickerWorker {
    command_tx: mpsc::Sender<Command>,
    decay_interval: Duration,
    day_interval: Duration,
    shutdown_rx: watch::Receiver<bool>,
}

impl TickerWorker {
    pub fn new(
        command_tx: mpsc::Sender<Command>,
        decay_interval: Duration,
        day_interval: Duration,
        shutdown_rx: watch::Receiver<bool>,
    ) -> Self {
        Self {
            command_tx,
            decay_interval,
            day_interval,
            shutdown_rx,
        }
    }

    /// Runs until shutdown is signalled or the command channel closes.
    pub async fn run(mut self) {
        // First tick fires one full interval after start.
        let now = Instant::now();
        let mut decay = time::interval_at(now + self.decay_interval, self.decay_interval);
        let mut day = time::interval_at(now + self.day_interval, self.day_interval);
        decay.set_missed_tick_behavior(MissedTickBehavior::Delay);
        day.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            let tick = tokio::select! {
                _ = decay.tick() => Tick::Decay,
                _ = day.tick() => Tick::Day,
                changed = self.shutdown_rx.changed() => {
                    if changed.is_err() || *self.shutdown_rx.borrow() {
                        break;
                    }
                    continue;
                }
            };

            if self.command_tx.send(Command::Tick(tick)).await.is_err() {
                debug!(target: "runtime::ticker", "Command channel closed");
                break;
            }
        }

        debug!(target: "runtime::ticker", "TickerWorker stopped");
    }
}
