//! Simulation worker that owns the authoritative [`PetState`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle) and the
//! ticker, runs them through [`PetEngine`], saves the record after every
//! mutation and publishes events to the EventBus.

mod interactions;

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn};

use pet_content::ShopCatalog;
use pet_core::{
    CareAction, EngineError, Message, Notification, Operation, PetEngine, PetError, PetFields,
    PetState,
};

use crate::api::{Result, RuntimeError};
use crate::events::{ClockEvent, Event, EventBus, StateEvent};
use crate::repository::StateRepository;

/// Periodic tick kinds delivered by the ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Lower hunger, happiness and cleanliness.
    Decay,
    /// Move the calendar forward one day.
    Day,
}

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Run a single engine operation.
    Execute {
        operation: Operation,
        reply: oneshot::Sender<Result<PetFields>>,
    },
    /// Care button press: stat change, experience, level check.
    Care {
        action: CareAction,
        reply: oneshot::Sender<Result<PetFields>>,
    },
    /// Buy a shop item and apply its effects.
    Purchase {
        item_id: String,
        reply: oneshot::Sender<Result<PetFields>>,
    },
    /// Append the user's side of a chat.
    UserMessage {
        message: Message,
        reply: oneshot::Sender<Result<PetFields>>,
    },
    /// Append the pet's reply and apply its stat effects.
    PetReply { message: Message },
    /// Periodic tick from the ticker.
    Tick(Tick),
    /// Query the current record (read-only).
    QueryState { reply: oneshot::Sender<PetState> },
    /// Most recent chat messages, oldest first.
    RecentMessages {
        limit: usize,
        reply: oneshot::Sender<Vec<Message>>,
    },
}

impl Command {
    fn label(&self) -> &'static str {
        match self {
            Command::Execute { operation, .. } => operation.as_str(),
            Command::Care { .. } => "care",
            Command::Purchase { .. } => "purchase",
            Command::UserMessage { .. } => "user_message",
            Command::PetReply { .. } => "pet_reply",
            Command::Tick(Tick::Decay) => "decay_tick",
            Command::Tick(Tick::Day) => "day_tick",
            Command::QueryState { .. } => "query_state",
            Command::RecentMessages { .. } => "recent_messages",
        }
    }
}

/// Background task that processes pet commands one at a time.
///
/// The worker is the only owner of the record; every engine call happens
/// inside [`SimulationWorker::handle_command`], so operations never
/// interleave.
pub struct SimulationWorker {
    state: PetState,
    catalog: Arc<ShopCatalog>,
    repository: Arc<dyn StateRepository>,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    decay_amount: i32,
    shutdown_rx: watch::Receiver<bool>,
}

impl SimulationWorker {
    /// Creates a new simulation worker.
    pub fn new(
        state: PetState,
        catalog: Arc<ShopCatalog>,
        repository: Arc<dyn StateRepository>,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        decay_amount: i32,
        shutdown_rx: watch::Receiver<bool>,
    ) -> Self {
        info!(
            phase = %state.phase(),
            pet = %state.pet.name,
            messages = state.messages.len(),
            "SimulationWorker initialized"
        );

        Self {
            state,
            catalog,
            repository,
            command_rx,
            event_bus,
            decay_amount,
            shutdown_rx,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    self.handle_command(cmd);
                }
                Ok(()) = self.shutdown_rx.changed() => {
                    if *self.shutdown_rx.borrow() {
                        debug!(target: "runtime::worker", "Shutdown signal received");
                        break;
                    }
                }
                else => break,
            }
        }
        debug!(target: "runtime::worker", "SimulationWorker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        let label = cmd.label();
        match cmd {
            Command::Execute { operation, reply } => {
                let result = self.apply(label, |engine| engine.execute(&operation));
                Self::respond(label, reply, result);
            }
            Command::Care { action, reply } => {
                let result = self.require_active().and_then(|()| {
                    self.apply(label, |engine| interactions::care(engine, action))
                });
                Self::respond(label, reply, result);
            }
            Command::Purchase { item_id, reply } => {
                let result = self.require_active().and_then(|()| {
                    let catalog = Arc::clone(&self.catalog);
                    self.apply(label, |engine| {
                        interactions::purchase(engine, &catalog, &item_id)
                    })
                });
                Self::respond(label, reply, result);
            }
            Command::UserMessage { message, reply } => {
                let result = self.require_active().and_then(|()| {
                    self.apply(label, |engine| Ok(engine.add_message(message)))
                });
                Self::respond(label, reply, result);
            }
            Command::PetReply { message } => {
                if let Err(error) =
                    self.apply(label, |engine| Ok(interactions::pet_reply(engine, message)))
                {
                    warn!(target: "runtime::worker", %error, "Pet reply failed");
                }
            }
            Command::Tick(tick) => self.handle_tick(label, tick),
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
            Command::RecentMessages { limit, reply } => {
                let messages = self.state.recent_messages(limit).to_vec();
                if reply.send(messages).is_err() {
                    debug!("RecentMessages reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn handle_tick(&mut self, label: &'static str, tick: Tick) {
        if !self.state.is_active() {
            debug!(
                target: "runtime::worker",
                ?tick,
                phase = %self.state.phase(),
                "Ignoring tick outside active phase"
            );
            return;
        }

        let amount = self.decay_amount;
        let result = self.apply(label, |engine| {
            Ok(match tick {
                Tick::Decay => interactions::decay(engine, amount),
                Tick::Day => engine.advance_day(),
            })
        });

        if result.is_ok() {
            let event = match tick {
                Tick::Decay => ClockEvent::Decayed { amount },
                Tick::Day => ClockEvent::DayAdvanced {
                    day: self.state.pet.days,
                },
            };
            self.event_bus.publish(Event::Clock(event));
        }
    }

    fn require_active(&self) -> Result<()> {
        if self.state.is_active() {
            Ok(())
        } else {
            Err(RuntimeError::NotActive {
                phase: self.state.phase(),
            })
        }
    }

    /// Runs `op` against the record, publishes the notifications it raised
    /// and commits the change if anything was mutated.
    ///
    /// Notifications are published even when `op` fails (a refused spend
    /// still tells the user why).
    fn apply<F>(&mut self, label: &'static str, op: F) -> Result<PetFields>
    where
        F: FnOnce(&mut PetEngine<'_>) -> std::result::Result<PetFields, EngineError>,
    {
        let mut notifications: Vec<Notification> = Vec::new();
        let result = {
            let mut engine = PetEngine::new(&mut self.state, &mut notifications);
            op(&mut engine)
        };

        for notification in notifications {
            debug!(target: "runtime::worker", ?notification, "Notification raised");
            self.event_bus.publish(Event::Notification(notification));
        }

        match result {
            Ok(fields) => {
                if fields.is_mutation() {
                    self.commit(label, fields);
                }
                Ok(fields)
            }
            Err(error) => {
                debug!(
                    target: "runtime::worker",
                    command = label,
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    %error,
                    "Command rejected"
                );
                Err(error.into())
            }
        }
    }

    /// Persists the whole record and announces the change.
    ///
    /// Save failures are logged and play continues on the in-memory record.
    /// Any change to the chat log is also announced as `MessageAdded`,
    /// whichever command appended it.
    fn commit(&mut self, label: &'static str, fields: PetFields) {
        if let Err(error) = self.repository.save(&self.state) {
            warn!(
                target: "runtime::worker",
                command = label,
                %error,
                "Failed to persist pet record; continuing in memory"
            );
        }

        self.event_bus.publish(Event::State(StateEvent::Updated {
            cause: label.to_string(),
            fields,
            pet: Box::new(self.state.pet.clone()),
        }));

        if fields.contains(PetFields::MESSAGES)
            && let Some(message) = self.state.messages.last()
        {
            self.event_bus.publish(Event::State(StateEvent::MessageAdded {
                message: message.clone(),
            }));
        }
    }

    fn respond(
        label: &'static str,
        reply: oneshot::Sender<Result<PetFields>>,
        result: Result<PetFields>,
    ) {
        if reply.send(result).is_err() {
            debug!("{label} reply channel closed (caller dropped)");
        }
    }
}
