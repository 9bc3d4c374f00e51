//! Credential and authentication-token management.
//!
//! Supports multiple concurrently-active credential sets (one per tenant
//! username) from a single process. Tokens are obtained by signing a token
//! request with a time-bound digest ([`digest`]), cached per tenant
//! ([`token_cache`]) and refreshed lazily when a consumer asks for a token
//! that is missing or expired ([`issuer`]).

pub mod credentials;
pub mod digest;
pub mod issuer;
pub mod token_cache;

pub use credentials::{Credential, CredentialStore};
pub use digest::{auth_digest, format_signature_timestamp};
pub use issuer::TokenIssuer;
pub use token_cache::{CachedToken, TokenCache};
