//! RPC Method Handlers
//!
//! Implements each JSON-RPC method as a thin delegation to the queue
//! service. Nothing here touches positions or renumbering.

use crate::error::{throttled_error, to_rpc_error};
use crate::rate_limiter::RateLimiter;
use crate::types::{
    AdvanceResponse, ClientView, GetRequest, GetResponse, JoinRequest, JoinResponse, ListResponse,
    RemoveRequest, RemoveResponse,
};
use jsonrpsee::types::ErrorObjectOwned;
use std::sync::Arc;
use waitline_core::application::queue::join;
use waitline_core::application::QueueService;

/// RPC Handler with injected dependencies
pub struct RpcHandler {
    service: Arc<QueueService>,
    rate_limiter: Arc<RateLimiter>,
}

impl RpcHandler {
    pub fn new(service: Arc<QueueService>) -> Self {
        // Default: 200 burst, 100 req/sec (configurable via env)
        let max_burst: u32 = std::env::var("WAITLINE_RATE_LIMIT_BURST")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(200);

        let rate_per_sec: u32 = std::env::var("WAITLINE_RATE_LIMIT_RATE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        Self {
            service,
            rate_limiter: Arc::new(RateLimiter::new(max_burst, rate_per_sec)),
        }
    }

    /// Mutating methods pass through the limiter; reads do not.
    async fn check_rate_limit(&self) -> Result<(), ErrorObjectOwned> {
        if self.rate_limiter.check().await {
            Ok(())
        } else {
            Err(throttled_error())
        }
    }

    /// queue.list.v1
    pub async fn list(&self) -> Result<ListResponse, ErrorObjectOwned> {
        let entries = self.service.list().await;

        Ok(ListResponse {
            queue: entries.iter().map(ClientView::from).collect(),
        })
    }

    /// queue.get.v1
    pub async fn get(&self, params: GetRequest) -> Result<GetResponse, ErrorObjectOwned> {
        let entry = self
            .service
            .get(params.position)
            .await
            .map_err(to_rpc_error)?;

        Ok(GetResponse {
            client: ClientView::from(&entry),
        })
    }

    /// queue.join.v1
    pub async fn join(&self, params: JoinRequest) -> Result<JoinResponse, ErrorObjectOwned> {
        self.check_rate_limit().await?;

        let req = join::JoinRequest {
            name: params.name,
            service_type: params.service_type,
            entry_date: params.entry_date,
        };

        let position = self.service.join(req).await.map_err(to_rpc_error)?;

        Ok(JoinResponse { position })
    }

    /// queue.advance.v1
    pub async fn advance(&self) -> Result<AdvanceResponse, ErrorObjectOwned> {
        self.check_rate_limit().await?;

        self.service.advance().await.map_err(to_rpc_error)?;

        Ok(AdvanceResponse { advanced: true })
    }

    /// queue.remove.v1
    pub async fn remove(&self, params: RemoveRequest) -> Result<RemoveResponse, ErrorObjectOwned> {
        self.check_rate_limit().await?;

        self.service
            .remove(params.position)
            .await
            .map_err(to_rpc_error)?;

        Ok(RemoveResponse {
            position: params.position,
            removed: true,
        })
    }
}
