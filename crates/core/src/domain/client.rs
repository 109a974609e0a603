// Client Domain Model

use crate::domain::error::QueueError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Place in line; 1 = next to be served. Assigned only by the store.
pub type Position = u32;

/// Maximum accepted name length, in characters.
pub const MAX_NAME_LEN: usize = 20;

/// Service type tag.
///
/// Accepted and stored, but no ordering or scheduling rule consults it.
/// Reserved as a capability flag for future priority handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceType {
    #[serde(rename = "N")]
    Normal,
    #[serde(rename = "P")]
    Priority,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Normal => "N",
            ServiceType::Priority => "P",
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = QueueError;

    /// Exactly `"N"` or `"P"`; anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(ServiceType::Normal),
            "P" => Ok(ServiceType::Priority),
            other => Err(QueueError::InvalidServiceType(other.to_string())),
        }
    }
}

/// Client Entity
///
/// One person in the line. `position` is meaningful only after the store
/// has assigned it; `entry_date` is opaque display text stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub position: Position,
    pub name: String,
    pub entry_date: String,
    pub attended: bool,
    pub service_type: ServiceType,
}

impl Client {
    /// Create an unserved client. The position placeholder is overwritten
    /// on insert; callers cannot pick their own place in line.
    pub fn new(
        name: impl Into<String>,
        entry_date: impl Into<String>,
        service_type: ServiceType,
    ) -> Self {
        Self {
            position: 0,
            name: name.into(),
            entry_date: entry_date.into(),
            attended: false,
            service_type,
        }
    }
}

/// Projection of a client as the queue reports it: place in line, name,
/// and date of arrival. Service type and attended flag stay internal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub position: Position,
    pub name: String,
    pub entry_date: String,
}

impl From<&Client> for QueueEntry {
    fn from(client: &Client) -> Self {
        Self {
            position: client.position,
            name: client.name.clone(),
            entry_date: client.entry_date.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_type_round_trips_wire_tags() {
        assert_eq!("N".parse::<ServiceType>().unwrap(), ServiceType::Normal);
        assert_eq!("P".parse::<ServiceType>().unwrap(), ServiceType::Priority);
        assert_eq!(ServiceType::Normal.to_string(), "N");
        assert_eq!(ServiceType::Priority.to_string(), "P");
    }

    #[test]
    fn service_type_rejects_unknown_tags() {
        for tag in ["X", "n", "p", "NP", ""] {
            let err = tag.parse::<ServiceType>().unwrap_err();
            assert_eq!(err, QueueError::InvalidServiceType(tag.to_string()));
        }
    }

    #[test]
    fn new_client_is_unserved() {
        let client = Client::new("Ana", "01/01/2025", ServiceType::Normal);
        assert!(!client.attended);
        assert_eq!(client.position, 0);
        assert_eq!(client.entry_date, "01/01/2025");
    }

    #[test]
    fn client_serializes_service_type_as_tag() {
        let client = Client::new("Ana", "01/01/2025", ServiceType::Priority);
        let json = serde_json::to_value(&client).expect("serialize");
        assert_eq!(json["service_type"], "P");
    }
}
