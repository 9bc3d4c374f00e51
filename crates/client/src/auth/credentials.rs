//! Per-tenant credential registry.

use std::fmt;
use std::sync::Mutex;

use tracing::debug;

/// One tenant's API credential set.
///
/// `public_key` is used only for session-creation calls and may be empty for
/// accounts that never create sessions. No field is validated at storage
/// time; validation happens at the point of use.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
    pub secret: String,
    pub public_key: String,
}

impl Credential {
    /// Token issuance needs all three of username, password and secret.
    pub(crate) fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty() && !self.secret.is_empty()
    }
}

// password and secret must never appear in logs
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("secret", &"<redacted>")
            .field("public_key", &self.public_key)
            .finish()
    }
}

/// Thread-safe registry holding one [`Credential`] per tenant username.
///
/// Insertion order is preserved so that an empty-username lookup can fall
/// back to the first-registered credential (single-tenant convenience; the
/// notion of "first" is only meaningful when exactly one credential is
/// registered). Readers always receive a copy, never the stored instance.
#[derive(Default)]
pub struct CredentialStore {
    entries: Mutex<Vec<Credential>>,
}

impl CredentialStore {
    /// Insert or replace the credential registered under `username`.
    /// Existing registrations for other tenants are untouched.
    pub fn upsert(&self, username: &str, password: &str, secret: &str, public_key: &str) {
        let credential = Credential {
            username: username.to_string(),
            password: password.to_string(),
            secret: secret.to_string(),
            public_key: public_key.to_string(),
        };

        let mut entries = self.lock();
        match entries.iter_mut().find(|c| c.username == username) {
            Some(existing) => *existing = credential,
            None => entries.push(credential),
        }
        debug!(username, "credential registered");
    }

    /// Look up the credential for `username`, returning a defensive copy.
    ///
    /// An empty `username` falls back to the first-registered credential if
    /// any exist. A non-empty unknown username is a miss.
    pub fn get(&self, username: &str) -> Option<Credential> {
        let entries = self.lock();
        if let Some(found) = entries.iter().find(|c| c.username == username) {
            return Some(found.clone());
        }
        if username.is_empty() {
            return entries.first().cloned();
        }
        None
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Credential>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
