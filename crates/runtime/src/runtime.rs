//! High-level runtime orchestrator.
//!
//! The runtime owns background workers, wires up command/event channels, and
//! exposes a builder-based API for clients to drive the pet.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use pet_content::ShopCatalog;
use pet_core::{PetConfig, PetState};

use crate::api::{PhraseResponseProvider, ResponseProvider, Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::repository::{InMemoryStateRepo, StateRepository};
use crate::workers::{Command, SimulationWorker, TickerWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub pet_config: PetConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Time between decay ticks.
    pub decay_interval: Duration,
    /// Time between calendar days.
    pub day_interval: Duration,
    /// Amount hunger, happiness and cleanliness lose per decay tick.
    pub decay_amount: i32,
    /// Pause before the pet answers a chat message.
    pub chat_delay: Duration,
    /// Spawn the ticker worker (default: true)
    pub enable_ticker: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            pet_config: PetConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
            decay_interval: Duration::from_secs(60),
            day_interval: Duration::from_secs(300),
            decay_amount: 5,
            chat_delay: Duration::from_secs(1),
            enable_ticker: true,
        }
    }
}

/// Main runtime that orchestrates the pet simulation
///
/// Design: Runtime owns workers and coordinates execution.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    shutdown_tx: watch::Sender<bool>,
    sim_worker_handle: JoinHandle<()>,
    ticker_handle: Option<JoinHandle<()>>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Stop the ticker and the simulation worker and wait for both.
    ///
    /// Commands still queued when the signal arrives are dropped; their
    /// callers see `ReplyChannelClosed`.
    pub async fn shutdown(self) -> Result<()> {
        // Receivers only disappear once both workers have exited.
        let _ = self.shutdown_tx.send(true);
        drop(self.handle);

        if let Some(ticker) = self.ticker_handle {
            ticker.await.map_err(RuntimeError::WorkerJoin)?;
        }

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        info!("Runtime shut down");
        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<PetState>,
    repository: Option<Arc<dyn StateRepository>>,
    catalog: Option<ShopCatalog>,
    responder: Option<Arc<dyn ResponseProvider>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            repository: None,
            catalog: None,
            responder: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide initial pet record, bypassing the repository on start.
    pub fn initial_state(mut self, state: PetState) -> Self {
        self.state = Some(state);
        self
    }

    /// Set the persistence port (default: in-memory, nothing survives exit)
    pub fn repository(mut self, repository: impl StateRepository + 'static) -> Self {
        self.repository = Some(Arc::new(repository));
        self
    }

    /// Share an existing persistence port
    pub fn shared_repository(mut self, repository: Arc<dyn StateRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Replace the built-in shop catalog
    pub fn catalog(mut self, catalog: ShopCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Replace the default phrase-pool chat responder
    pub fn responder(mut self, responder: impl ResponseProvider + 'static) -> Self {
        self.responder = Some(Arc::new(responder));
        self
    }

    /// Disable or enable the periodic ticker
    pub fn enable_ticker(mut self, enable: bool) -> Self {
        self.config.enable_ticker = enable;
        self
    }

    /// Resolve the starting record: explicit state, then the repository,
    /// then a fresh record.
    ///
    /// An unreadable record is logged and replaced by a fresh one.
    fn initial_record(&mut self, repository: &dyn StateRepository) -> PetState {
        if let Some(state) = self.state.take() {
            return state;
        }

        match repository.load() {
            Ok(Some(state)) => {
                info!(pet = %state.pet.name, "Restored saved pet record");
                state
            }
            Ok(None) => PetState::new(&self.config.pet_config),
            Err(error) => {
                warn!(%error, "Failed to load pet record; starting fresh");
                PetState::new(&self.config.pet_config)
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.config.enable_ticker {
            if self.config.decay_interval.is_zero() {
                return Err(RuntimeError::InvalidConfig("decay_interval must be non-zero"));
            }
            if self.config.day_interval.is_zero() {
                return Err(RuntimeError::InvalidConfig("day_interval must be non-zero"));
            }
        }
        Ok(())
    }

    /// Build the runtime and spawn its workers
    ///
    /// Fails with `InvalidConfig` when the ticker is enabled with a zero
    /// interval.
    pub async fn build(mut self) -> Result<Runtime> {
        self.validate()?;

        let repository: Arc<dyn StateRepository> = match self.repository.take() {
            Some(repository) => repository,
            None => Arc::new(InMemoryStateRepo::new()),
        };
        let initial_state = self.initial_record(repository.as_ref());

        let catalog = Arc::new(self.catalog.take().unwrap_or_default());
        let responder: Arc<dyn ResponseProvider> = match self.responder.take() {
            Some(responder) => responder,
            None => Arc::new(PhraseResponseProvider::default()),
        };

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(
            command_tx.clone(),
            event_bus.clone(),
            Arc::clone(&catalog),
            responder,
            self.config.chat_delay,
        );

        let sim_worker = SimulationWorker::new(
            initial_state,
            catalog,
            repository,
            command_rx,
            event_bus,
            self.config.decay_amount,
            shutdown_rx.clone(),
        );
        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        let ticker_handle = if self.config.enable_ticker {
            let ticker = TickerWorker::new(
                command_tx,
                self.config.decay_interval,
                self.config.day_interval,
                shutdown_rx,
            );
            Some(tokio::spawn(async move {
                ticker.run().await;
            }))
        } else {
            None
        };

        Ok(Runtime {
            handle,
            shutdown_tx,
            sim_worker_handle,
            ticker_handle,
        })
    }
}
