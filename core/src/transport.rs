//! Blocking HTTP execution for built requests.
//!
//! # Design
//! ureq's automatic status-code-as-error behavior is disabled so 4xx/5xx
//! responses come back as data rather than `Err` — status interpretation (or
//! the deliberate lack of it) belongs to the client layer. Only transport
//! failures (connect, read) surface as errors here. No timeout is configured
//! beyond ureq's defaults; a hung server blocks the calling thread.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Execute an `HttpRequest` over the network and return the raw response.
pub fn send(req: &HttpRequest) -> Result<HttpResponse, ApiError> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (&req.method, &req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
    }
    .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    Ok(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}
