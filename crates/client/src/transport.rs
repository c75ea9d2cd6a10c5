//! HTTP transport seam.
//!
//! The signing layer composes a fully-formed wire request; dispatching
//! it is behind the [`HttpTransport`] trait so tests can capture
//! requests and production code can swap clients. The default
//! implementation uses ureq.

use error_stack::Report;
use ureq::Agent;

use crate::error::IntersightError;
use crate::request::Method;

/// A fully composed outbound request, ready for the network.
#[derive(Debug, Clone)]
pub struct WireRequest {
    pub method: Method,
    /// Absolute URL including the encoded query string.
    pub url: String,
    /// Headers in send order.
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
    /// Optional proxy URL for this request only.
    pub proxy: Option<String>,
}

/// Raw response as returned by the transport; the signing layer never
/// interprets it beyond the internal moid lookup.
#[derive(Debug, Clone)]
pub struct WireResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl WireResponse {
    /// Body as UTF-8, lossy. Convenience for callers printing results.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Dispatches wire requests. Transport-level failures (connection
/// refused, timeout, TLS) are propagated as `Transport` errors;
/// non-2xx statuses are responses, not errors.
pub trait HttpTransport {
    /// # Errors
    ///
    /// Returns a `Transport` error when the request cannot be sent or
    /// the response body cannot be read.
    fn send(&self, request: WireRequest) -> Result<WireResponse, Report<IntersightError>>;
}

/// Default transport backed by ureq.
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self {
            agent: Self::build_agent(None),
        }
    }

    fn build_agent(proxy: Option<ureq::Proxy>) -> Agent {
        Agent::config_builder()
            // Non-2xx responses are returned to the caller unparsed.
            .http_status_as_error(false)
            .proxy(proxy)
            .build()
            .new_agent()
    }

    fn agent_for(&self, proxy: Option<&str>) -> Result<Agent, Report<IntersightError>> {
        match proxy {
            None => Ok(self.agent.clone()),
            Some(url) => {
                let proxy = ureq::Proxy::new(url).map_err(|e| {
                    Report::new(IntersightError::InvalidArgument {
                        message: format!("invalid *proxy* value: {e}"),
                    })
                })?;
                Ok(Self::build_agent(Some(proxy)))
            }
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for UreqTransport {
    fn send(&self, request: WireRequest) -> Result<WireResponse, Report<IntersightError>> {
        let agent = self.agent_for(request.proxy.as_deref())?;

        let mut builder = http::Request::builder()
            .method(request.method.as_str())
            .uri(request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let http_request = builder.body(request.body).map_err(|e| {
            Report::new(IntersightError::Transport {
                message: format!("failed to build request: {e}"),
            })
        })?;

        let mut response = agent.run(http_request).map_err(|e| {
            Report::new(IntersightError::Transport {
                message: e.to_string(),
            })
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_vec().map_err(|e| {
            Report::new(IntersightError::Transport {
                message: format!("failed to read response body: {e}"),
            })
        })?;

        Ok(WireResponse {
            status,
            headers,
            body,
        })
    }
}
