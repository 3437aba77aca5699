//! Terminal client for the virtual pet.
//!
//! # Architecture
//!
//! ```text
//! main (composition root)
//!   ├─→ ClientConfig   (environment)
//!   ├─→ logging        (file log under the cache dir)
//!   ├─→ Runtime        (pet state, workers, persistence)
//!   └─→ Frontend       (line-oriented terminal UI, talks via RuntimeHandle)
//! ```

pub mod command;
pub mod config;
pub mod dirs;
pub mod frontend;
pub mod logging;
pub mod render;

pub use command::Command;
pub use config::{ClientConfig, FrontendConfig};
pub use frontend::{Frontend, TerminalFrontend};
