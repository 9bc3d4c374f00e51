//! Token issuance and expiry-aware reuse.
//!
//! The issuer sits between the credential store and the transport: given a
//! tenant username it either hands back a cached token that is still fresh
//! or signs a new token request and caches the result.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use sentria_domain::{Result, SentriaError};

use crate::auth::credentials::{Credential, CredentialStore};
use crate::auth::digest::{auth_digest, format_signature_timestamp};
use crate::auth::token_cache::{CachedToken, TokenCache};
use crate::http::transport::Transport;

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct TokenRequest {
    user_name: String,
    password_hash: String,
    user_name_hash: String,
    time_stamp: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(rename = "APIToken")]
    api_token: String,
    #[serde(rename = "ExpireAt")]
    expire_at: DateTime<Utc>,
    #[serde(rename = "CredentialType", default)]
    credential_type: i32,
}

/// Issues bearer tokens for registered tenants, reusing cached ones while
/// they are fresh.
pub struct TokenIssuer {
    transport: Arc<Transport>,
    credentials: Arc<CredentialStore>,
    tokens: Arc<TokenCache>,
    regenerate_per_request: bool,
}

impl TokenIssuer {
    pub fn new(
        transport: Arc<Transport>,
        credentials: Arc<CredentialStore>,
        tokens: Arc<TokenCache>,
        regenerate_per_request: bool,
    ) -> Self {
        Self { transport, credentials, tokens, regenerate_per_request }
    }

    /// Return a token that is valid right now for `username`, issuing a new
    /// one if the cache is empty, stale, or per-request regeneration is on.
    pub async fn valid_token(
        &self,
        base_url: &str,
        timeout: Duration,
        username: &str,
    ) -> Result<String> {
        let credential = self.resolve(username)?;

        if !self.regenerate_per_request {
            if let Some(cached) = self.tokens.get(&credential.username) {
                if !cached.is_stale(Utc::now()) {
                    debug!(username = %credential.username, "reusing cached token");
                    return Ok(cached.token);
                }
                debug!(username = %credential.username, "cached token is stale");
            }
        }

        let issued = self.issue_for(&credential, base_url, timeout).await?;
        Ok(issued.token)
    }

    /// Unconditionally request a fresh token for `username` and cache it.
    pub async fn issue(
        &self,
        base_url: &str,
        timeout: Duration,
        username: &str,
    ) -> Result<CachedToken> {
        let credential = self.resolve(username)?;
        self.issue_for(&credential, base_url, timeout).await
    }

    fn resolve(&self, username: &str) -> Result<Credential> {
        let credential = self.credentials.get(username).ok_or_else(|| {
            SentriaError::AuthConfiguration(format!(
                "no credentials registered for username {username:?}"
            ))
        })?;

        if !credential.is_complete() {
            return Err(SentriaError::AuthConfiguration(format!(
                "credentials for username {:?} are missing a username, password or secret",
                credential.username
            )));
        }

        Ok(credential)
    }

    async fn issue_for(
        &self,
        credential: &Credential,
        base_url: &str,
        timeout: Duration,
    ) -> Result<CachedToken> {
        let timestamp = format_signature_timestamp(Utc::now());

        let request = TokenRequest {
            user_name: credential.username.clone(),
            password_hash: auth_digest(&credential.secret, &credential.password, &timestamp),
            user_name_hash: auth_digest(&credential.secret, &credential.username, &timestamp),
            time_stamp: timestamp,
        };

        let body = serde_json::to_string(&request)
            .map_err(|err| SentriaError::Decode(format!("failed to encode token request: {err}")))?;

        // The token endpoint itself takes no auth header.
        let response: TokenResponse = self
            .transport
            .exchange(
                Method::POST,
                &format!("{base_url}/token"),
                Some(body),
                HeaderMap::new(),
                timeout,
            )
            .await?;

        let token = CachedToken {
            token: response.api_token,
            expires_at: response.expire_at,
            credential_type: response.credential_type,
        };

        info!(
            username = %credential.username,
            expires_at = %token.expires_at,
            "issued new API token"
        );

        // Concurrent issuances for the same tenant are last-write-wins; both
        // tokens are valid server-side so either outcome is usable.
        self.tokens.put(&credential.username, token.clone());
        Ok(token)
    }
}
