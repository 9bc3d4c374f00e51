//! # Sentria Client
//!
//! Async client for the Sentria decision-scoring API.
//!
//! Callers build domain records (sessions, cases, customers, transactions)
//! from [`sentria_domain`] and submit them through [`ApiClient`]. The client
//! manages multiple concurrently-active credential sets, signs token
//! requests with a time-bound digest, and caches the resulting short-lived
//! bearer tokens per tenant with expiry-aware refresh.
//!
//! ## Usage
//!
//! ```no_run
//! use sentria_client::{ApiClient, ClientConfig, Region};
//! use sentria_domain::Case;
//!
//! # async fn example() -> sentria_domain::Result<()> {
//! let client = ApiClient::new(ClientConfig::new(Region::Us))?;
//! client.register_credentials("acme", "password", "shared-secret", "public-key");
//!
//! let case = Case { case_number: Some("ORDER-42".to_string()), ..Default::default() };
//! let created = client.post_case(&case, "acme").await?;
//! let decision = client.get_decision(created.id.as_deref().unwrap_or_default(), "acme").await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod http;

// Re-export commonly used items
pub use api::ApiClient;
pub use config::{BaseUrl, ClientConfig, Region};
pub use sentria_domain::{Result, SentriaError};
