//! Topic-based event bus for runtime events.
//!
//! Events are published to specific topics, and consumers subscribe only to
//! the topics they need (a frontend usually wants notifications, a renderer
//! wants state changes).

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{ClockEvent, StateEvent};
