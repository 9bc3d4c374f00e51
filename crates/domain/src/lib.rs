//! # Sentria Domain
//!
//! Entity types and error definitions for the Sentria decision-scoring API.
//!
//! This crate contains:
//! - The wire-level entity types (sessions, cases, customers, transactions)
//! - The library-wide error taxonomy and `Result` alias
//!
//! ## Architecture
//! - No dependency on the client crate
//! - No I/O; pure data types matching the remote JSON contract

pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
