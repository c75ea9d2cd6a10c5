//! Request-shape resolution.
//!
//! Validates a logical request and assembles the concrete wire
//! parameters: effective path (moid suffix), encoded query string, and
//! the exact body bytes the digest will commit to. All failures here
//! are raised before any network I/O.

use error_stack::Report;
use serde_json::Value as JsonValue;

use crate::constants::MOID_BYTE_LENGTH;
use crate::error::IntersightError;
use crate::request::{ApiRequest, Method};

/// Concrete wire parameters for one call.
#[derive(Debug, Clone)]
pub struct ResolvedRequest {
    pub method: Method,
    /// Resource path, with `/<moid>` appended when applicable.
    pub path: String,
    /// Encoded query string including the leading `?`, or empty.
    pub query_path: String,
    /// Exact body bytes for the wire; the digest is computed over
    /// these and nothing else.
    pub body: Vec<u8>,
}

/// Validate the fields of a logical request.
///
/// # Errors
///
/// `InvalidArgument` naming the offending field: non-object body,
/// moid of the wrong byte length, or PATCH/DELETE with neither moid
/// nor name.
pub fn validate(request: &ApiRequest) -> Result<(), Report<IntersightError>> {
    if let Some(body) = &request.body {
        if !body.is_object() {
            return Err(Report::new(IntersightError::InvalidArgument {
                message: "the *body* value must be a JSON object".into(),
            }));
        }
    }

    if let Some(moid) = &request.moid {
        // Strictly byte length, not character count.
        if moid.len() != MOID_BYTE_LENGTH {
            return Err(Report::new(IntersightError::InvalidArgument {
                message: format!(
                    "invalid *moid* value: expected {MOID_BYTE_LENGTH} bytes, got {}",
                    moid.len()
                ),
            }));
        }
    }

    if matches!(request.method, Method::Patch | Method::Delete)
        && request.moid.is_none()
        && request.name.is_none()
    {
        return Err(Report::new(IntersightError::InvalidArgument {
            message: format!(
                "either *moid* or *name* must be set for {} requests",
                request.method
            ),
        }));
    }

    Ok(())
}

/// Whether the call needs a name-to-moid lookup before dispatch.
pub fn needs_moid_lookup(request: &ApiRequest) -> bool {
    matches!(request.method, Method::Patch | Method::Delete) && request.moid.is_none()
}

/// Assemble wire parameters from a validated request and an optional
/// resolved moid.
///
/// # Errors
///
/// `InvalidArgument` when the resolved moid has the wrong byte length
/// (a lookup can return a malformed identifier) or the body cannot be
/// serialized.
pub fn resolve(
    request: &ApiRequest,
    moid: Option<&str>,
) -> Result<ResolvedRequest, Report<IntersightError>> {
    let mut path = request.resource_path.clone();

    if let Some(moid) = moid {
        if moid.len() != MOID_BYTE_LENGTH {
            return Err(Report::new(IntersightError::InvalidArgument {
                message: format!(
                    "invalid *moid* value: expected {MOID_BYTE_LENGTH} bytes, got {}",
                    moid.len()
                ),
            }));
        }
        // POST creates a new object; the identifier never joins its path.
        if request.method != Method::Post {
            path.push('/');
            path.push_str(moid);
        }
    }

    Ok(ResolvedRequest {
        method: request.method,
        path,
        query_path: query_path(&request.query),
        body: body_bytes(request.method, request.body.as_ref())?,
    })
}

/// Form-encode query parameters, preserving insertion order.
fn query_path(query: &[(String, String)]) -> String {
    if query.is_empty() {
        return String::new();
    }

    let encoded: Vec<String> = query
        .iter()
        .map(|(key, value)| {
            format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
        })
        .collect();

    format!("?{}", encoded.join("&"))
}

/// The exact bytes placed on the wire: empty for GET, the serialized
/// body (or `{}`) for every other verb.
fn body_bytes(
    method: Method,
    body: Option<&JsonValue>,
) -> Result<Vec<u8>, Report<IntersightError>> {
    if !method.has_body() {
        return Ok(Vec::new());
    }

    match body {
        Some(value) => serde_json::to_vec(value).map_err(|e| {
            Report::new(IntersightError::InvalidArgument {
                message: format!("failed to serialize *body*: {e}"),
            })
        }),
        None => Ok(b"{}".to_vec()),
    }
}
