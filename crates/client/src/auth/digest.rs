//! Time-bound request-signing digest.
//!
//! The token endpoint authenticates a request by two digests, one over the
//! tenant username and one over the password, both bound to the same shared
//! secret and timestamp. The server recomputes them, so both the digest
//! construction and the timestamp's textual form must match byte-for-byte.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Millisecond-precision UTC format shared by the signature input and the
/// `TimeStamp` field of the token request (`yyyy-MM-ddTHH:mm:ss.fffZ`).
pub const SIGNATURE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Render `timestamp` in the exact textual form the server validates.
pub fn format_signature_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format(SIGNATURE_TIMESTAMP_FORMAT).to_string()
}

/// Compute the double-SHA-256 signature over `subject`.
///
/// ```text
/// inner = hex(sha256(timestamp + "." + subject))
/// outer = hex(sha256(inner + "." + secret))
/// ```
///
/// Literal `"` characters are stripped from `secret` and `subject` first,
/// guarding against callers that pass JSON-escaped strings. The result is
/// always a 64-character lowercase hex string.
pub fn auth_digest(secret: &str, subject: &str, timestamp: &str) -> String {
    let secret = strip_quotes(secret);
    let subject = strip_quotes(subject);

    let inner = sha256_hex(&format!("{timestamp}.{subject}"));
    sha256_hex(&format!("{inner}.{secret}"))
}

fn strip_quotes(value: &str) -> String {
    value.replace('"', "")
}

fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}
