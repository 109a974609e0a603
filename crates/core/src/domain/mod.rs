// Domain Layer - Pure business logic and entities

pub mod client;
pub mod error;
pub mod store;

// Re-exports
pub use client::{Client, Position, QueueEntry, ServiceType};
pub use error::QueueError;
pub use store::PositionStore;
