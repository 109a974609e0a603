//! SDK Request/Response Types
//!
//! Mirrors the daemon's wire contract, including the "Posição" spelling of
//! the position field.

use serde::{Deserialize, Serialize};

/// A client as the daemon reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct QueueClient {
    #[serde(rename = "Posição")]
    pub position: u32,
    pub name: String,
    pub entry_date: String,
}

/// queue.list.v1 result
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    pub queue: Vec<QueueClient>,
}

/// queue.get.v1 result
#[derive(Debug, Clone, Deserialize)]
pub struct GetResponse {
    pub client: QueueClient,
}

/// queue.join.v1 - Join the back of the line
#[derive(Debug, Clone, Serialize)]
pub struct JoinRequest {
    /// Client name, at most 20 characters.
    pub name: String,
    /// `"N"` (normal) or `"P"` (priority).
    pub service_type: String,
    /// Omit to let the daemon stamp today's date.
    pub entry_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JoinResponse {
    #[serde(rename = "Posição")]
    pub position: u32,
}

/// queue.advance.v1 result
#[derive(Debug, Clone, Deserialize)]
pub struct AdvanceResponse {
    pub advanced: bool,
}

/// queue.remove.v1 result
#[derive(Debug, Clone, Deserialize)]
pub struct RemoveResponse {
    pub position: u32,
    pub removed: bool,
}
