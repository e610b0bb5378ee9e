//! HTTP requests and responses as plain data.
//!
//! # Design
//! `WaterClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network; `transport::send` performs the actual I/O in
//! between. Keeping the wire shapes as plain data makes the build/parse layer
//! deterministic and testable without a socket.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved across
//! threads and stored freely.

/// HTTP method for a request. The consumption API only ever uses these two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data.
///
/// Built by `WaterClient::build_*` methods and executed by `transport::send`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by `transport::send`, then passed to `WaterClient::parse_*`
/// methods for deserialization. The status code is carried through for
/// callers that want to look at it; the parse methods themselves never do.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
