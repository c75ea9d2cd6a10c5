//! Error types for the signing client.
//!
//! Every fallible operation returns `Result<T, Report<IntersightError>>`
//! so callers get the full error-stack context chain. Validation errors
//! are raised before any network I/O happens.

use derive_more::{Display, Error};

#[derive(Debug, Display, Error)]
pub enum IntersightError {
    /// A request field is malformed or missing.
    #[display("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Credentials or client configuration are unusable.
    #[display("Configuration error: {message}")]
    Configuration { message: String },

    /// A name-to-moid lookup returned no results.
    #[display("Object with name \"{name}\" not found")]
    NotFound { name: String },

    /// Network, TLS, or HTTP level failure from the transport.
    #[display("Transport error: {message}")]
    Transport { message: String },
}
