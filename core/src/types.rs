//! Payload and record types for the consumption API.
//!
//! # Design
//! Request payloads are opaque: the caller supplies a JSON object mapping and
//! the client serializes it verbatim, with no shape validation. Responses are
//! likewise returned as raw `serde_json::Value`. The typed `User` and
//! `Consumption` records mirror the service schema for callers that want a
//! structured view (`serde_json::from_value`); they are defined independently
//! of the mock-server crate, and the integration tests catch any drift
//! between the two.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An opaque caller-supplied JSON object, serialized verbatim as a request
/// body. No field is required or validated client-side.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// A user record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// A monthly consumption record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Consumption {
    pub id: i64,
    pub user_id: i64,
    pub year: i32,
    pub month: u32,
    pub cubic_meters: f64,
    pub created_at: DateTime<Utc>,
}
