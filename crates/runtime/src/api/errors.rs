//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, configuration and the pet rules
//! so clients can bubble them up with consistent context.

use thiserror::Error;
use tokio::sync::oneshot;

use pet_core::{EngineError, SessionPhase};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("runtime worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("invalid runtime configuration: {0}")]
    InvalidConfig(&'static str),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("interaction requires an active pet (current phase: {phase})")]
    NotActive { phase: SessionPhase },

    #[error("chat message must not be empty")]
    EmptyMessage,
}

impl RuntimeError {
    /// Returns the engine error if this failure came from the pet rules.
    pub fn as_engine(&self) -> Option<&EngineError> {
        match self {
            Self::Engine(err) => Some(err),
            _ => None,
        }
    }
}
