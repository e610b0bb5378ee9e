//! Endpoint base configuration.
//!
//! The base URL comes from the `API_URL` environment variable, read once per
//! process and cached. When unset it defaults to the empty string, so all
//! request paths are issued relative to the calling origin.

use std::sync::OnceLock;

/// Environment variable holding the API root URL.
pub const API_URL_VAR: &str = "API_URL";

static ENDPOINT_BASE: OnceLock<String> = OnceLock::new();

/// The configured endpoint base, resolved on first call and immutable for
/// the rest of the process lifetime.
pub fn endpoint_base() -> &'static str {
    ENDPOINT_BASE.get_or_init(|| std::env::var(API_URL_VAR).unwrap_or_default())
}
