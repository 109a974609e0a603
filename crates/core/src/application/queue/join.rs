// Join Use Case

use crate::domain::client::{Client, ServiceType, MAX_NAME_LEN};
use crate::domain::error::{QueueError, Result};
use crate::port::Clock;
use serde::{Deserialize, Serialize};

/// Join request as the transport hands it over.
///
/// `service_type` arrives as the raw wire tag so the rejection message can
/// echo exactly what the caller sent. `entry_date` is optional; when absent
/// the service stamps the current date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinRequest {
    pub name: String,
    pub service_type: String,

    #[serde(default)]
    pub entry_date: Option<String>,
}

/// Validate a join request and return the parsed service type.
///
/// The name must be present and at most 20 characters; character count,
/// not byte length, so accented names are measured as typed.
pub(crate) fn validate_request(req: &JoinRequest) -> Result<ServiceType> {
    if req.name.is_empty() {
        return Err(QueueError::InvalidName("name is required".to_string()));
    }
    if req.name.chars().count() > MAX_NAME_LEN {
        return Err(QueueError::InvalidName(format!(
            "name must be at most {} characters",
            MAX_NAME_LEN
        )));
    }
    req.service_type.parse()
}

/// Turn a validated request into an unserved client record, stamping the
/// entry date from the clock when the caller did not supply one.
pub(crate) fn build_client(req: JoinRequest, clock: &dyn Clock) -> Result<Client> {
    let service_type = validate_request(&req)?;
    let entry_date = req.entry_date.unwrap_or_else(|| clock.today());
    Ok(Client::new(req.name, entry_date, service_type))
}
