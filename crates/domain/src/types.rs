//! Entity types exchanged with the Sentria API.
//!
//! Field names follow the remote JSON contract (PascalCase). Server-assigned
//! fields (ids, timestamps) are declared like any other field so they round
//! trip on decode; there is no runtime introspection of mutability. The
//! service omits fields it has no value for, so every struct decodes missing
//! fields to their defaults.

pub mod case;
pub mod customer;
pub mod decision;
pub mod kba;
pub mod otp;
pub mod session;
pub mod transaction;

pub use case::*;
pub use customer::*;
pub use decision::*;
pub use kba::*;
pub use otp::*;
pub use session::*;
pub use transaction::*;
