//! Signing client for the Intersight REST API.
//!
//! Outbound calls are authenticated with an asymmetric-key HTTP
//! signature scheme (`rsa-sha256`): the request metadata is rendered
//! into a deterministic canonical string, signed with the caller's RSA
//! private key, and carried in a `Signature`-style `Authorization`
//! header alongside a SHA-256 body digest.
//!
//! # Modules
//!
//! - [`auth`]: `Authorization` header assembly
//! - [`canonical`]: canonical signing-string construction
//! - [`client`]: the orchestrating [`IntersightClient`]
//! - [`digest`]: SHA-256 body digests
//! - [`error`]: error types
//! - [`request`]: logical request types
//! - [`resolver`]: request-shape resolution and validation
//! - [`settings`]: configuration loading
//! - [`signer`]: RSA PKCS#1 v1.5 signing
//! - [`transport`]: the HTTP transport seam

pub mod auth;
pub mod canonical;
pub mod client;
pub mod constants;
pub mod digest;
pub mod error;
pub mod request;
pub mod resolver;
pub mod settings;
pub mod signer;
pub mod transport;

pub use client::{IntersightClient, SigningContext};
pub use error::IntersightError;
pub use request::{ApiRequest, Method};
pub use settings::Settings;
pub use transport::{HttpTransport, WireRequest, WireResponse};
