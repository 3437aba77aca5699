//! Runtime orchestration for the virtual pet.
//!
//! This crate wires the pet rules, static content, persistence and worker
//! tasks into a cohesive runtime API. Consumers embed [`Runtime`] to own the
//! pet, subscribe to events, and interact with it through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`repository`] persists the pet record
//! - [`chat`] builds chat messages
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod chat;
pub mod events;
pub mod repository;
pub mod runtime;

mod workers;

pub use api::{PhraseResponseProvider, ResponseProvider, Result, RuntimeError, RuntimeHandle};
pub use events::{ClockEvent, Event, EventBus, StateEvent, Topic};
pub use repository::{FileStateRepository, InMemoryStateRepo, RepositoryError, StateRepository};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
