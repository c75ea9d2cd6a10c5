//! Canonical signing-string construction.
//!
//! The canonical string is the exact byte sequence that gets signed:
//! the `(request-target)` pseudo-header followed by the signed headers,
//! ordered lexicographically by lowercase name regardless of insertion
//! order. The `Authorization` header must list the same names in the
//! same order or server-side verification fails.

use crate::request::Method;

/// An ordered set of headers that participate in the signature.
///
/// Insertion order is preserved for the wire request; signing always
/// uses the sorted order. The protocol pins the set to
/// `{Date, Host, Digest}`, but arbitrary sets are supported.
#[derive(Debug, Clone, Default)]
pub struct SignableHeaders {
    entries: Vec<(String, String)>,
}

impl SignableHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Headers in insertion order, for composing the wire request.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Headers sorted case-insensitively by name, the order used for
    /// signing.
    fn sorted(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
            .collect();
        entries.sort_by_key(|(name, _)| name.to_lowercase());
        entries
    }

    /// Lowercase header names in signing order. This exact list is
    /// embedded in the `Authorization` header.
    pub fn signed_names(&self) -> Vec<String> {
        self.sorted()
            .into_iter()
            .map(|(name, _)| name.to_lowercase())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Render the canonical string for a request.
///
/// `target_path` and `query_path` are concatenated verbatim; the whole
/// request target is lowercased, matching what the server reconstructs
/// on its side.
pub fn string_to_sign(
    method: Method,
    target_path: &str,
    query_path: &str,
    headers: &SignableHeaders,
) -> String {
    let request_target = format!("{} {}{}", method.as_str(), target_path, query_path);
    let mut out = format!("(request-target): {}", request_target.to_lowercase());

    for (name, value) in headers.sorted() {
        out.push('\n');
        out.push_str(&name.to_lowercase());
        out.push_str(": ");
        out.push_str(value);
    }

    out
}
