// Position Store - the position-management engine
//
// Sole owner of the client collection and the only code allowed to assign
// or change `position` values. Positions of unserved clients are meant to
// form a dense 1..N range; every mutation below renumbers to keep that so.

use crate::domain::client::{Client, Position, QueueEntry};
use crate::domain::error::{QueueError, Result};

/// Ordered collection of every client created in this process lifetime.
/// Served clients are not purged; they stay in the same collection with
/// their last position retained.
#[derive(Debug, Default)]
pub struct PositionStore {
    clients: Vec<Client>,
}

impl PositionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held, served ones included.
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Append a client at the back of the line and return its position.
    ///
    /// The next position is one past the highest position currently held by
    /// ANY record, served ones included. Whatever position the caller left
    /// on the record is discarded.
    pub fn insert(&mut self, mut client: Client) -> Position {
        let next = self
            .clients
            .iter()
            .map(|c| c.position)
            .max()
            .unwrap_or(0)
            + 1;
        client.position = next;
        self.clients.push(client);
        next
    }

    /// All unserved clients, ascending by position. Empty queue is an empty
    /// vec, not an error.
    pub fn list_active(&self) -> Vec<QueueEntry> {
        let mut active: Vec<QueueEntry> = self
            .clients
            .iter()
            .filter(|c| !c.attended)
            .map(QueueEntry::from)
            .collect();
        active.sort_by_key(|entry| entry.position);
        active
    }

    /// First record at `position` in store order, served or not.
    pub fn find_by_position(&self, position: Position) -> Option<&Client> {
        self.clients.iter().find(|c| c.position == position)
    }

    /// Serve the front of the line.
    ///
    /// Single pass: every record past position 1 moves up one place; the
    /// record at position 1 is marked attended and keeps its position. The
    /// served record stays in the collection, so its retained position 1
    /// can coexist with the next active client renumbered to 1.
    ///
    /// Fails only when the store holds no records at all; a store of
    /// nothing but served clients still advances.
    pub fn advance(&mut self) -> Result<()> {
        if self.clients.is_empty() {
            return Err(QueueError::EmptyQueue);
        }

        for client in &mut self.clients {
            if client.position > 1 {
                client.position -= 1;
            } else {
                client.attended = true;
            }
        }
        Ok(())
    }

    /// Remove the first record at `position` in store order, served or not,
    /// and move up every remaining record behind it (strictly greater
    /// position, served ones included).
    pub fn remove_by_position(&mut self, position: Position) -> Result<Client> {
        let index = self
            .clients
            .iter()
            .position(|c| c.position == position)
            .ok_or(QueueError::NotFound(position))?;

        let removed = self.clients.remove(index);

        for client in &mut self.clients {
            if client.position > position {
                client.position -= 1;
            }
        }
        Ok(removed)
    }
}
