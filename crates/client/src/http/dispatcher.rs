//! Authenticated request dispatch.
//!
//! Every resource operation funnels through [`Dispatcher::call`], which
//! selects the auth scheme from the request path: session endpoints are
//! authenticated with the tenant's public key (`X-PublicKey`), everything
//! else with an issued bearer token (`X-Authorization: {username} {token}`).

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use sentria_domain::{Result, SentriaError};

use crate::auth::credentials::CredentialStore;
use crate::auth::issuer::TokenIssuer;
use crate::auth::token_cache::TokenCache;
use crate::config::ClientConfig;
use crate::http::transport::Transport;

const X_AUTHORIZATION: HeaderName = HeaderName::from_static("x-authorization");
const X_PUBLIC_KEY: HeaderName = HeaderName::from_static("x-publickey");

pub struct Dispatcher {
    transport: Arc<Transport>,
    credentials: Arc<CredentialStore>,
    issuer: TokenIssuer,
    base_url: String,
    timeout: Duration,
}

impl Dispatcher {
    pub fn new(config: &ClientConfig, credentials: Arc<CredentialStore>) -> Result<Self> {
        let transport = Arc::new(Transport::new()?);
        let tokens = Arc::new(TokenCache::default());
        let issuer = TokenIssuer::new(
            transport.clone(),
            credentials.clone(),
            tokens,
            config.regenerate_token_per_request,
        );

        Ok(Self {
            transport,
            credentials,
            issuer,
            base_url: config.base_url.as_str().to_string(),
            timeout: config.request_timeout,
        })
    }

    /// Execute one authenticated API call.
    ///
    /// `uri` is the path relative to the configured base URL. `body` is
    /// serialized as JSON and ignored for GET requests. With `needs_auth`
    /// unset the request carries no auth header at all.
    pub async fn call<T, B>(
        &self,
        uri: &str,
        method: Method,
        body: Option<&B>,
        needs_auth: bool,
        username: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut headers = HeaderMap::new();
        if needs_auth {
            let (name, value) = self.auth_header(uri, username).await?;
            headers.insert(name, value);
        }

        let body = match body {
            Some(payload) if method != Method::GET => Some(
                serde_json::to_string(payload).map_err(|err| {
                    SentriaError::Decode(format!("failed to encode request body: {err}"))
                })?,
            ),
            _ => None,
        };

        let url = format!("{}{uri}", self.base_url);
        self.transport.exchange(method, &url, body, headers, self.timeout).await
    }

    async fn auth_header(&self, uri: &str, username: &str) -> Result<(HeaderName, HeaderValue)> {
        let credential = self.credentials.get(username).ok_or_else(|| {
            SentriaError::AuthConfiguration(format!(
                "no credentials registered for username {username:?}"
            ))
        })?;

        // Session creation is authenticated by public key alone; every other
        // endpoint requires an issued token.
        if uri.contains("/session") {
            if credential.public_key.is_empty() {
                return Err(SentriaError::AuthConfiguration(format!(
                    "credentials for username {:?} have no public key for session calls",
                    credential.username
                )));
            }
            let value = header_value(&credential.public_key)?;
            return Ok((X_PUBLIC_KEY, value));
        }

        let token = self.issuer.valid_token(&self.base_url, self.timeout, username).await?;
        let value = header_value(&format!("{} {token}", credential.username))?;
        Ok((X_AUTHORIZATION, value))
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| {
        SentriaError::AuthConfiguration("credential contains non-ASCII header characters".into())
    })
}
