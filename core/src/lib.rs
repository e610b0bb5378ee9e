//! Synchronous API client for the water consumption service.
//!
//! # Overview
//! Thin client over the service's resource API (users, monthly consumptions).
//! Each operation issues one HTTP request and returns the JSON-decoded
//! response body as-is — no schema validation and no status-code checks, so
//! even a server error body decodes as a success value.
//!
//! # Design
//! - `WaterClient` is stateless — it holds only `base_url`, resolved from the
//!   `API_URL` environment variable (empty means origin-relative) or given
//!   explicitly.
//! - Each operation is split into `build_*` (produces a plain-data request)
//!   and `parse_*` (consumes a plain-data response), with a one-call wrapper
//!   that executes the round-trip via `transport::send`, so the I/O boundary
//!   is explicit and the core stays testable without a socket.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::WaterClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Consumption, Payload, User};
