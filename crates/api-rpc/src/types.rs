//! RPC Request/Response Types
//!
//! Defines the JSON-RPC method parameters and results. Wire naming lives
//! here and only here: the core reports positions as plain integers, the
//! wire spells the field "Posição".

use serde::{Deserialize, Serialize};
use waitline_core::domain::QueueEntry;

/// A client as the wire reports it.
#[derive(Debug, Clone, Serialize)]
pub struct ClientView {
    #[serde(rename = "Posição")]
    pub position: u32,
    pub name: String,
    pub entry_date: String,
}

impl From<&QueueEntry> for ClientView {
    fn from(entry: &QueueEntry) -> Self {
        Self {
            position: entry.position,
            name: entry.name.clone(),
            entry_date: entry.entry_date.clone(),
        }
    }
}

/// queue.list.v1 - List everyone still waiting (no parameters)
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub queue: Vec<ClientView>,
}

/// queue.get.v1 - Look up one client by position
#[derive(Debug, Deserialize)]
pub struct GetRequest {
    pub position: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    pub client: ClientView,
}

/// queue.join.v1 - Join the back of the line
#[derive(Debug, Deserialize)]
pub struct JoinRequest {
    pub name: String,
    pub service_type: String,
    #[serde(default)]
    pub entry_date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JoinResponse {
    #[serde(rename = "Posição")]
    pub position: u32,
}

/// queue.advance.v1 - Serve the front of the line (no parameters)
#[derive(Debug, Clone, Serialize)]
pub struct AdvanceResponse {
    pub advanced: bool,
}

/// queue.remove.v1 - Remove a client by position
#[derive(Debug, Deserialize)]
pub struct RemoveRequest {
    pub position: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RemoveResponse {
    pub position: u32,
    pub removed: bool,
}
