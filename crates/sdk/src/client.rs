//! Waitline Client Implementation

use crate::error::{Result, SdkError};
use crate::types::{
    AdvanceResponse, GetResponse, JoinRequest, JoinResponse, ListResponse, RemoveResponse,
};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::ObjectParams;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use std::time::Duration;

/// Waitline queue engine client
///
/// # Example
///
/// ```no_run
/// use waitline_sdk::WaitlineClient;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = WaitlineClient::connect("http://127.0.0.1:9641")?;
/// # Ok(())
/// # }
/// ```
pub struct WaitlineClient {
    client: HttpClient,
}

impl WaitlineClient {
    /// Connect to the Waitline daemon
    ///
    /// # Arguments
    ///
    /// * `url` - RPC endpoint URL (e.g., `http://127.0.0.1:9641`)
    pub fn connect(url: impl AsRef<str>) -> Result<Self> {
        let client = HttpClientBuilder::default()
            .request_timeout(Duration::from_secs(30))
            .build(url.as_ref())
            .map_err(|e| SdkError::Connection(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }

    /// Everyone still waiting, in serving order.
    pub async fn list(&self) -> Result<ListResponse> {
        let response = self
            .client
            .request("queue.list.v1", ObjectParams::new())
            .await?;

        Ok(response)
    }

    /// Look up one client by position (served clients included).
    pub async fn get(&self, position: u32) -> Result<GetResponse> {
        let mut params = ObjectParams::new();
        params.insert("position", position)?;

        let response = self.client.request("queue.get.v1", params).await?;

        Ok(response)
    }

    /// Join the back of the line.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use waitline_sdk::{JoinRequest, WaitlineClient};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = WaitlineClient::connect("http://127.0.0.1:9641")?;
    /// let response = client.join(JoinRequest {
    ///     name: "Ana".to_string(),
    ///     service_type: "N".to_string(),
    ///     entry_date: None,
    /// }).await?;
    ///
    /// println!("Position: {}", response.position);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn join(&self, request: JoinRequest) -> Result<JoinResponse> {
        let mut params = ObjectParams::new();
        params.insert("name", request.name)?;
        params.insert("service_type", request.service_type)?;
        params.insert("entry_date", request.entry_date)?;

        let response = self.client.request("queue.join.v1", params).await?;

        Ok(response)
    }

    /// Serve the front of the line.
    pub async fn advance(&self) -> Result<AdvanceResponse> {
        let response = self
            .client
            .request("queue.advance.v1", ObjectParams::new())
            .await?;

        Ok(response)
    }

    /// Remove a client by position and close the gap behind them.
    pub async fn remove(&self, position: u32) -> Result<RemoveResponse> {
        let mut params = ObjectParams::new();
        params.insert("position", position)?;

        let response = self.client.request("queue.remove.v1", params).await?;

        Ok(response)
    }
}
