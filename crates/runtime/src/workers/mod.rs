//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker owns the pet record and executes every command,
//! while the ticker feeds it periodic decay and calendar ticks.

mod simulation;
mod ticker;

pub use simulation::{Command, SimulationWorker, Tick};
pub use ticker::TickerWorker;
