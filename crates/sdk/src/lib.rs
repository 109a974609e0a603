//! Waitline SDK - Rust Client Library
//!
//! Provides a convenient client for interacting with the Waitline queue
//! engine daemon.
//!
//! # Example
//!
//! ```no_run
//! use waitline_sdk::{JoinRequest, WaitlineClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect to daemon
//!     let client = WaitlineClient::connect("http://127.0.0.1:9641")?;
//!
//!     // Join the queue
//!     let response = client.join(JoinRequest {
//!         name: "Ana".to_string(),
//!         service_type: "N".to_string(),
//!         entry_date: None,
//!     }).await?;
//!
//!     println!("Joined at position {}", response.position);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::WaitlineClient;
pub use error::{Result, SdkError};
pub use types::{
    AdvanceResponse, GetResponse, JoinRequest, JoinResponse, ListResponse, QueueClient,
    RemoveResponse,
};
