//! HTTP seam. The workflow and admin code only see [`Transport`]; the binary
//! plugs in [`UreqTransport`], tests plug in fakes or point it at a mock server.

use std::time::Duration;

use serde_json::Value;

use crate::error::TransportError;

/// Status and raw body of an HTTP exchange, successful or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Any 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking request primitives used by the client.
///
/// Non-2xx statuses are responses, not errors; only failures that produce no
/// response at all surface as [`TransportError`].
pub trait Transport: Send + Sync {
    /// `POST url` with `Content-Type: application/json`.
    fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse, TransportError>;

    /// `GET url?k=v&…`.
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, TransportError>;
}

/// [`Transport`] backed by a shared `ureq` agent.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// No timeout beyond what the OS imposes.
    pub fn new() -> Self {
        Self {
            agent: builder().build(),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            agent: builder().timeout(timeout).build(),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse, TransportError> {
        let request = self.agent.post(url).set("Content-Type", "application/json");
        into_response(request.send_json(body))
    }

    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, TransportError> {
        let request = query
            .iter()
            .fold(self.agent.get(url), |request, (name, value)| {
                request.query(name, value)
            });
        into_response(request.call())
    }
}

fn builder() -> ureq::AgentBuilder {
    ureq::AgentBuilder::new().user_agent(concat!("summit/", env!("CARGO_PKG_VERSION")))
}

fn into_response(
    result: Result<ureq::Response, ureq::Error>,
) -> Result<HttpResponse, TransportError> {
    let response = match result {
        Ok(response) => response,
        Err(ureq::Error::Status(_, response)) => response,
        Err(ureq::Error::Transport(err)) => return Err(TransportError(err.to_string())),
    };
    let status = response.status();
    let body = response
        .into_string()
        .map_err(|err| TransportError(format!("failed to read response body: {err}")))?;
    Ok(HttpResponse { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_means_2xx_only() {
        let response = |status| HttpResponse {
            status,
            body: String::new(),
        };
        assert!(response(200).is_success());
        assert!(response(201).is_success());
        assert!(response(299).is_success());
        assert!(!response(302).is_success());
        assert!(!response(422).is_success());
        assert!(!response(500).is_success());
    }
}
