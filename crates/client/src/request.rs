//! Logical request types.
//!
//! An [`ApiRequest`] describes a call in API terms (verb, resource
//! path, query, body, moid or name). The resolver turns it into wire
//! parameters; nothing here performs I/O.

use std::fmt;
use std::str::FromStr;

use error_stack::Report;
use serde_json::Value as JsonValue;

use crate::error::IntersightError;

/// HTTP verbs accepted by the API. Anything else is rejected at the
/// parse boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Verbs that carry a JSON body on the wire. GET sends an empty
    /// body and its digest reflects that.
    pub fn has_body(&self) -> bool {
        !matches!(self, Method::Get)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = Report<IntersightError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            other => Err(Report::new(IntersightError::InvalidArgument {
                message: format!("unsupported HTTP method: {other}"),
            })),
        }
    }
}

/// A logical API call, before resolution.
///
/// For PATCH and DELETE exactly one of `moid`/`name` must be set; when
/// only `name` is given the client resolves it to a moid with a nested
/// lookup call. `moid` is validated by byte length (24) at resolution
/// time.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub resource_path: String,
    /// Query parameters in insertion order; rendered form-encoded.
    pub query: Vec<(String, String)>,
    /// JSON object body; `None` serializes as `{}` for bodied verbs.
    pub body: Option<JsonValue>,
    pub moid: Option<String>,
    pub name: Option<String>,
    /// Optional proxy URL for this call only.
    pub proxy: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, resource_path: impl Into<String>) -> Self {
        Self {
            method,
            resource_path: resource_path.into(),
            query: Vec::new(),
            body: None,
            moid: None,
            name: None,
            proxy: None,
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_moid(mut self, moid: impl Into<String>) -> Self {
        self.moid = Some(moid.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_from_str_accepts_known_verbs() {
        assert_eq!("GET".parse::<Method>().expect("should parse"), Method::Get);
        assert_eq!("post".parse::<Method>().expect("should parse"), Method::Post);
        assert_eq!(
            "Patch".parse::<Method>().expect("should parse"),
            Method::Patch
        );
        assert_eq!(
            "DELETE".parse::<Method>().expect("should parse"),
            Method::Delete
        );
    }

    #[test]
    fn test_method_from_str_rejects_unknown_verb() {
        let err = "PUT".parse::<Method>().expect_err("PUT is not supported");
        assert!(err.to_string().contains("unsupported HTTP method"));
    }

    #[test]
    fn test_builder_chain() {
        let req = ApiRequest::new(Method::Post, "/ntp/Policies")
            .with_body(json!({"Name": "test"}))
            .with_query("$top", "1")
            .with_proxy("http://proxy.local:3128");

        assert_eq!(req.method, Method::Post);
        assert_eq!(req.resource_path, "/ntp/Policies");
        assert_eq!(req.query, vec![("$top".to_string(), "1".to_string())]);
        assert!(req.body.is_some());
        assert_eq!(req.proxy.as_deref(), Some("http://proxy.local:3128"));
    }

    #[test]
    fn test_only_get_has_no_body() {
        assert!(!Method::Get.has_body());
        assert!(Method::Post.has_body());
        assert!(Method::Patch.has_body());
        assert!(Method::Delete.has_body());
    }
}
