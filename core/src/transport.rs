//! Default blocking transport over `ureq`.

use std::time::Duration;

use tracing::debug;

use crate::http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};

/// Largest response body `UreqTransport` reads unless told otherwise.
pub const DEFAULT_BODY_LIMIT: u64 = 64 * 1024 * 1024;

/// `HttpTransport` backed by a `ureq` agent.
///
/// The agent is configured with status-as-error disabled so 4xx/5xx
/// responses come back as data and the mapping layer decides what they
/// mean. Response bodies larger than the body limit (`DEFAULT_BODY_LIMIT`
/// unless set with `with_body_limit`) fail with `TransportError`. Cloning shares
/// the agent's connection pool.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    body_limit: u64,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Transport whose requests fail with `TransportError` once `timeout`
    /// has elapsed.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::build(Some(timeout))
    }

    fn build(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self {
            agent,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }

    /// Cap on response body size, in bytes.
    pub fn with_body_limit(mut self, limit: u64) -> Self {
        self.body_limit = limit;
        self
    }

    pub fn body_limit(&self) -> u64 {
        self.body_limit
    }
}

impl std::fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UreqTransport")
            .field("body_limit", &self.body_limit)
            .finish_non_exhaustive()
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for UreqTransport {
    fn exchange(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = request.url.as_str();
        debug!(method = %request.method, url, "sending request");
        let result = match request.method {
            HttpMethod::Get => {
                let mut builder = self.agent.get(url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()
            }
            HttpMethod::Post => {
                let mut builder = self.agent.post(url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                match &request.body {
                    Some(body) => builder.send(body.as_slice()),
                    None => builder.send_empty(),
                }
            }
        };
        let mut response = result.map_err(|e| {
            debug!(method = %request.method, url, error = %e, "transport failed");
            TransportError::new(e)
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .with_config()
            .limit(self.body_limit)
            .read_to_vec()
            .map_err(TransportError::new)?;
        debug!(status, url, bytes = body.len(), "received response");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
