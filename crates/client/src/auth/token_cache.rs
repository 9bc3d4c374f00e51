//! Per-tenant bearer-token cache.
//!
//! Holds at most one token per tenant username. There is no background
//! eviction: staleness is detected lazily when a consumer asks for a token.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

/// A bearer token issued by the remote service, with its absolute expiry and
/// the opaque credential-type tag carried through from the token response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub credential_type: i32,
}

impl CachedToken {
    /// A token is stale when its string is empty or its expiry is at or
    /// before `now`.
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        self.token.is_empty() || self.expires_at <= now
    }
}

/// Thread-safe map of tenant username to the most recently issued token.
/// A new issuance overwrites the previous entry atomically.
#[derive(Default)]
pub struct TokenCache {
    entries: Mutex<HashMap<String, CachedToken>>,
}

impl TokenCache {
    /// Returns a copy of the cached token for `username`, stale or not.
    pub fn get(&self, username: &str) -> Option<CachedToken> {
        self.lock().get(username).cloned()
    }

    /// Insert or replace the token cached for `username`.
    pub fn put(&self, username: &str, token: CachedToken) {
        self.lock().insert(username.to_string(), token);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, CachedToken>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(value: &str, expires_in_secs: i64) -> CachedToken {
        CachedToken {
            token: value.to_string(),
            expires_at: Utc::now() + chrono::Duration::seconds(expires_in_secs),
            credential_type: 0,
        }
    }

    #[test]
    fn put_then_get_returns_the_token() {
        let cache = TokenCache::default();
        cache.put("acme", token("tok-1", 3600));

        let cached = cache.get("acme").unwrap();
        assert_eq!(cached.token, "tok-1");
    }

    #[test]
    fn put_replaces_the_previous_entry() {
        let cache = TokenCache::default();
        cache.put("acme", token("tok-1", 3600));
        cache.put("acme", token("tok-2", 3600));

        assert_eq!(cache.get("acme").unwrap().token, "tok-2");
    }

    #[test]
    fn missing_username_returns_none() {
        let cache = TokenCache::default();
        assert!(cache.get("acme").is_none());
    }

    #[test]
    fn tenants_do_not_share_entries() {
        let cache = TokenCache::default();
        cache.put("a", token("tok-a", 3600));

        assert!(cache.get("b").is_none());
        assert_eq!(cache.get("a").unwrap().token, "tok-a");
    }

    #[test]
    fn staleness_covers_expiry_and_empty_token() {
        let now = Utc::now();

        assert!(token("tok", -1).is_stale(now));
        assert!(token("", 3600).is_stale(now));
        assert!(!token("tok", 3600).is_stale(now));

        // Expiry exactly at `now` counts as stale.
        let at_now = CachedToken { token: "tok".to_string(), expires_at: now, credential_type: 0 };
        assert!(at_now.is_stale(now));
    }
}
