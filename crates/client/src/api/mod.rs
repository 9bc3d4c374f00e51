//! The public API surface.
//!
//! [`ApiClient`] owns the credential store and the dispatcher; each resource
//! family lives in its own module as a set of thin methods that format a URI
//! and delegate to the dispatcher. Every method takes a trailing tenant
//! `username`; single-tenant setups pass `""` to use the first-registered
//! credential.

mod authentication;
mod cases;
mod customers;
mod decisions;
mod payments;
mod sessions;
mod statuses;
mod transactions;

use std::sync::Arc;

use sentria_domain::Result;

use crate::auth::credentials::CredentialStore;
use crate::config::ClientConfig;
use crate::http::dispatcher::Dispatcher;

/// Client for the decision-scoring API.
///
/// Construct once per process with [`ApiClient::new`], register one
/// credential set per tenant, then call the resource methods. The client is
/// safe to share across tasks behind an `Arc`.
pub struct ApiClient {
    credentials: Arc<CredentialStore>,
    dispatcher: Dispatcher,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let credentials = Arc::new(CredentialStore::default());
        let dispatcher = Dispatcher::new(&config, credentials.clone())?;
        Ok(Self { credentials, dispatcher })
    }

    /// Register or replace the credential set for `username`. Registrations
    /// for other tenants are untouched.
    pub fn register_credentials(
        &self,
        username: &str,
        password: &str,
        secret: &str,
        public_key: &str,
    ) {
        self.credentials.upsert(username, password, secret, public_key);
    }
}
