// Waitline Core - Domain Logic & Ports
// NO transport dependencies (hexagonal layout)

pub mod application;
pub mod domain;
pub mod port;

pub use domain::error::{QueueError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
