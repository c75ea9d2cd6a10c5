//! SHA-256 body digest computation.
//!
//! The digest commits the exact wire-body bytes into the signature via
//! the `Digest` header. Callers must pass final bytes; nothing here
//! re-serializes or normalizes.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use sha2::{Digest as _, Sha256};

/// Raw SHA-256 hash of a byte payload.
pub fn sha256(payload: &[u8]) -> [u8; 32] {
    Sha256::digest(payload).into()
}

/// `Digest` header value: `SHA-256=<base64(hash)>`.
pub fn digest_header_value(payload: &[u8]) -> String {
    format!("SHA-256={}", STANDARD.encode(sha256(payload)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_digest_known_vector() {
        // SHA-256 of the empty string, as carried on GET requests.
        assert_eq!(
            digest_header_value(b""),
            "SHA-256=47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU="
        );
    }

    #[test]
    fn test_empty_json_object_digest_known_vector() {
        assert_eq!(
            digest_header_value(b"{}"),
            "SHA-256=RBNvo1WzZ4oRRq0W9+hknpT7T8If536DEMBg9hyq/4o="
        );
    }

    #[test]
    fn test_digest_is_idempotent() {
        let body = br#"{"Name":"test"}"#;
        assert_eq!(digest_header_value(body), digest_header_value(body));
        assert_eq!(sha256(body), sha256(body));
    }

    #[test]
    fn test_single_byte_change_alters_digest() {
        assert_ne!(
            digest_header_value(br#"{"Name":"test"}"#),
            digest_header_value(br#"{"Name":"tesu"}"#)
        );
    }
}
