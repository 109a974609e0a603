// Queue Service - the operations the transport layer calls

pub mod join;

#[cfg(test)]
mod join_test;

pub use join::JoinRequest;

use crate::domain::error::Result;
use crate::domain::{Position, PositionStore, QueueEntry, QueueError};
use crate::port::Clock;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// The sole interface over the position store.
///
/// Mutations (`join`, `advance`, `remove`) take the write guard, so
/// scan-and-renumber passes never interleave; `list` and `get` take read
/// guards and may run concurrently with each other.
pub struct QueueService {
    store: RwLock<PositionStore>,
    clock: Arc<dyn Clock>,
}

impl QueueService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            store: RwLock::new(PositionStore::new()),
            clock,
        }
    }

    /// Everyone still waiting, in serving order. Always succeeds.
    pub async fn list(&self) -> Vec<QueueEntry> {
        self.store.read().await.list_active()
    }

    /// The client at `position`, served or not.
    pub async fn get(&self, position: Position) -> Result<QueueEntry> {
        self.store
            .read()
            .await
            .find_by_position(position)
            .map(QueueEntry::from)
            .ok_or(QueueError::NotFound(position))
    }

    /// Put a new client at the back of the line and report their position.
    pub async fn join(&self, req: JoinRequest) -> Result<Position> {
        let client = join::build_client(req, self.clock.as_ref())?;
        let mut store = self.store.write().await;
        let position = store.insert(client);
        info!(position, "client joined the queue");
        Ok(position)
    }

    /// Serve the front of the line and move everyone else up one place.
    pub async fn advance(&self) -> Result<()> {
        let mut store = self.store.write().await;
        store.advance()?;
        info!("queue advanced");
        Ok(())
    }

    /// Drop the client at `position` and close the gap behind them.
    pub async fn remove(&self, position: Position) -> Result<()> {
        let mut store = self.store.write().await;
        let removed = store.remove_by_position(position)?;
        info!(position, name = %removed.name, "client removed from the queue");
        Ok(())
    }
}
