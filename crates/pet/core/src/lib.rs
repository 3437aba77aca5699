//! Authoritative rules for the virtual pet simulation.
//!
//! `pet-core` defines the pet record, its bounded stats, the progression and
//! economy rules, and the notifications raised when thresholds are crossed.
//! All mutation flows through [`engine::PetEngine`]; the crate performs no
//! I/O, so scheduling, persistence and presentation live in the runtime.
pub mod config;
pub mod engine;
pub mod error;
pub mod notification;
pub mod state;

pub use config::PetConfig;
pub use engine::{EngineError, Operation, PetEngine};
pub use error::{ErrorSeverity, PetError};
pub use notification::{CareAction, Notification, NotificationSink};
pub use state::{
    Message, Mood, Pet, PetColor, PetFields, PetKind, PetState, Sender, SessionPhase, StatKind,
    Vitals,
};
