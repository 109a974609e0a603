// Domain Error Types

use crate::domain::client::Position;
use thiserror::Error;

/// All failures a queue operation can report. Every kind is recoverable by
/// the caller re-issuing a corrected request; none is fatal to the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    #[error("no client at position {0}")]
    NotFound(Position),

    #[error("queue is empty")]
    EmptyQueue,

    #[error("invalid name: {0}")]
    InvalidName(String),

    #[error("invalid service type: expected \"N\" or \"P\", got {0:?}")]
    InvalidServiceType(String),
}

pub type Result<T> = std::result::Result<T, QueueError>;
