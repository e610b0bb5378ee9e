//! Stateless HTTP request builder and response parser for the consumption API.
//!
//! # Design
//! `WaterClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`, with
//! a one-call wrapper that runs the round-trip through `transport::send`.
//! The build/parse layer never touches the network, keeping it deterministic
//! and free of I/O dependencies.
//!
//! Response status codes are never inspected: whatever JSON body the server
//! returns — including an error body on a 4xx/5xx — decodes and comes back as
//! a success value. Callers that need the status can use the build/parse
//! layer directly and read it off the `HttpResponse`.

use serde_json::Value;

use crate::config;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport;
use crate::types::Payload;

/// Stateless client for the water consumption API.
///
/// Builds requests against `base_url` and returns responses decoded as raw
/// JSON values, with no schema validation and no status-code checks.
#[derive(Debug, Clone)]
pub struct WaterClient {
    base_url: String,
}

impl WaterClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Client rooted at the `API_URL` environment variable. When the variable
    /// is unset the base is empty and all paths are origin-relative.
    pub fn from_env() -> Self {
        Self::new(config::endpoint_base())
    }

    // --- users ---

    pub fn build_create_user(&self, payload: &Payload) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(payload)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/users", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_list_users(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/users", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_user(&self, user_id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/users/{user_id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    // --- consumptions ---

    /// `user_id` is interpolated into the path as given, unescaped.
    pub fn build_create_consumption(
        &self,
        user_id: &str,
        payload: &Payload,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(payload)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/users/{user_id}/consumptions", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_list_user_consumptions(&self, user_id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/users/{user_id}/consumptions", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Filter pairs become the query string in the order given; an empty
    /// filter issues the bare collection path with no `?`.
    pub fn build_list_consumptions(&self, filter: &[(&str, &str)]) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/consumptions{}", self.base_url, build_query(filter)),
            headers: Vec::new(),
            body: None,
        }
    }

    // --- parse ---

    pub fn parse_create_user(&self, response: HttpResponse) -> Result<Value, ApiError> {
        decode_body(&response)
    }

    pub fn parse_list_users(&self, response: HttpResponse) -> Result<Value, ApiError> {
        decode_body(&response)
    }

    pub fn parse_get_user(&self, response: HttpResponse) -> Result<Value, ApiError> {
        decode_body(&response)
    }

    pub fn parse_create_consumption(&self, response: HttpResponse) -> Result<Value, ApiError> {
        decode_body(&response)
    }

    pub fn parse_list_user_consumptions(
        &self,
        response: HttpResponse,
    ) -> Result<Value, ApiError> {
        decode_body(&response)
    }

    pub fn parse_list_consumptions(&self, response: HttpResponse) -> Result<Value, ApiError> {
        decode_body(&response)
    }

    // --- one-call round-trips ---

    /// `POST /users` with `payload` as the JSON body.
    pub fn create_user(&self, payload: &Payload) -> Result<Value, ApiError> {
        let req = self.build_create_user(payload)?;
        self.parse_create_user(transport::send(&req)?)
    }

    /// `GET /users`.
    pub fn list_users(&self) -> Result<Value, ApiError> {
        let req = self.build_list_users();
        self.parse_list_users(transport::send(&req)?)
    }

    /// `GET /users/{user_id}`.
    pub fn get_user(&self, user_id: &str) -> Result<Value, ApiError> {
        let req = self.build_get_user(user_id);
        self.parse_get_user(transport::send(&req)?)
    }

    /// `POST /users/{user_id}/consumptions` with `payload` as the JSON body.
    pub fn create_consumption(&self, user_id: &str, payload: &Payload) -> Result<Value, ApiError> {
        let req = self.build_create_consumption(user_id, payload)?;
        self.parse_create_consumption(transport::send(&req)?)
    }

    /// `GET /users/{user_id}/consumptions`.
    pub fn list_user_consumptions(&self, user_id: &str) -> Result<Value, ApiError> {
        let req = self.build_list_user_consumptions(user_id);
        self.parse_list_user_consumptions(transport::send(&req)?)
    }

    /// `GET /consumptions`, filtered by the given query pairs.
    pub fn list_consumptions(&self, filter: &[(&str, &str)]) -> Result<Value, ApiError> {
        let req = self.build_list_consumptions(filter);
        self.parse_list_consumptions(transport::send(&req)?)
    }
}

/// Decode a response body as JSON. The status code is not consulted.
fn decode_body(response: &HttpResponse) -> Result<Value, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Build a query string from filter pairs, preserving input order. Values are
/// percent-encoded; keys pass through as-is. Empty input yields an empty
/// string rather than a lone `?`.
fn build_query(filter: &[(&str, &str)]) -> String {
    if filter.is_empty() {
        return String::new();
    }
    let parts: Vec<String> = filter
        .iter()
        .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
        .collect();
    format!("?{}", parts.join("&"))
}
