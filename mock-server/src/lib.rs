//! In-memory replica of the water consumption service API.
//!
//! Mirrors the real backend's routes and response shapes closely enough for
//! client tests: sequential integer ids, `{"error": "..."}` bodies, the same
//! validation rules (email required, month 1-12), and a 500 where the real
//! service would hit a foreign-key or uniqueness constraint.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Consumption {
    pub id: i64,
    pub user_id: i64,
    pub year: i32,
    pub month: u32,
    pub cubic_meters: f64,
    pub created_at: DateTime<Utc>,
}

/// Missing fields default to their zero value, like the real service's
/// decoder; validation happens in the handlers.
#[derive(Deserialize)]
pub struct CreateUser {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Deserialize)]
pub struct CreateConsumption {
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub month: u32,
    #[serde(default)]
    pub cubic_meters: f64,
}

#[derive(Default)]
pub struct Db {
    users: HashMap<i64, User>,
    consumptions: HashMap<i64, Consumption>,
    next_user_id: i64,
    next_consumption_id: i64,
}

pub type SharedDb = Arc<RwLock<Db>>;

type ErrorResponse = (StatusCode, Json<Value>);

fn error_body(code: StatusCode, msg: &str) -> ErrorResponse {
    (code, Json(json!({ "error": msg })))
}

pub fn app() -> Router {
    let db: SharedDb = Arc::new(RwLock::new(Db::default()));
    Router::new()
        .route("/", get(root))
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user))
        .route(
            "/users/{id}/consumptions",
            get(list_user_consumptions).post(create_consumption),
        )
        .route("/consumptions", get(list_consumptions))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn root() -> &'static str {
    "water consumption service"
}

/// Ids arrive as path strings; a non-numeric id is a 400 with a JSON body,
/// matching the real service.
fn parse_id(raw: &str) -> Result<i64, ErrorResponse> {
    raw.parse()
        .map_err(|_| error_body(StatusCode::BAD_REQUEST, "invalid id"))
}

async fn create_user(
    State(db): State<SharedDb>,
    Json(input): Json<CreateUser>,
) -> Result<(StatusCode, Json<User>), ErrorResponse> {
    if input.email.is_empty() {
        return Err(error_body(StatusCode::BAD_REQUEST, "email required"));
    }
    let mut db = db.write().await;
    db.next_user_id += 1;
    let user = User {
        id: db.next_user_id,
        name: input.name,
        email: input.email,
        created_at: Utc::now(),
    };
    db.users.insert(user.id, user.clone());
    Ok((StatusCode::CREATED, Json(user)))
}

async fn list_users(State(db): State<SharedDb>) -> Json<Vec<User>> {
    let db = db.read().await;
    let mut users: Vec<User> = db.users.values().cloned().collect();
    users.sort_by_key(|u| u.id);
    Json(users)
}

async fn get_user(
    State(db): State<SharedDb>,
    Path(id): Path<String>,
) -> Result<Json<User>, ErrorResponse> {
    let id = parse_id(&id)?;
    let db = db.read().await;
    db.users
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| error_body(StatusCode::NOT_FOUND, "not found"))
}

async fn create_consumption(
    State(db): State<SharedDb>,
    Path(id): Path<String>,
    Json(input): Json<CreateConsumption>,
) -> Result<(StatusCode, Json<Consumption>), ErrorResponse> {
    let user_id = parse_id(&id)?;
    if input.month < 1 || input.month > 12 {
        return Err(error_body(StatusCode::BAD_REQUEST, "month must be 1-12"));
    }
    let mut db = db.write().await;
    // The real service surfaces constraint violations as 500s.
    if !db.users.contains_key(&user_id) {
        return Err(error_body(
            StatusCode::INTERNAL_SERVER_ERROR,
            "foreign key violation: user does not exist",
        ));
    }
    if db
        .consumptions
        .values()
        .any(|c| c.user_id == user_id && c.year == input.year && c.month == input.month)
    {
        return Err(error_body(
            StatusCode::INTERNAL_SERVER_ERROR,
            "duplicate key violates unique constraint",
        ));
    }
    db.next_consumption_id += 1;
    let consumption = Consumption {
        id: db.next_consumption_id,
        user_id,
        year: input.year,
        month: input.month,
        cubic_meters: input.cubic_meters,
        created_at: Utc::now(),
    };
    db.consumptions.insert(consumption.id, consumption.clone());
    Ok((StatusCode::CREATED, Json(consumption)))
}

async fn list_user_consumptions(
    State(db): State<SharedDb>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Consumption>>, ErrorResponse> {
    let user_id = parse_id(&id)?;
    let db = db.read().await;
    let mut rows: Vec<Consumption> = db
        .consumptions
        .values()
        .filter(|c| c.user_id == user_id)
        .cloned()
        .collect();
    rows.sort_by_key(|c| (c.year, c.month));
    Ok(Json(rows))
}

/// Optional `user_id`, `year`, and `month` filters; values are compared as
/// strings, the way the real service binds raw query params.
async fn list_consumptions(
    State(db): State<SharedDb>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<Consumption>> {
    let db = db.read().await;
    let mut rows: Vec<Consumption> = db
        .consumptions
        .values()
        .filter(|c| {
            params
                .get("user_id")
                .is_none_or(|v| c.user_id.to_string() == *v)
                && params.get("year").is_none_or(|v| c.year.to_string() == *v)
                && params
                    .get("month")
                    .is_none_or(|v| c.month.to_string() == *v)
        })
        .cloned()
        .collect();
    rows.sort_by_key(|c| (c.year, c.month));
    Json(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_to_json() {
        let user = User {
            id: 1,
            name: "Maria".to_string(),
            email: "maria@example.com".to_string(),
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Maria");
        assert_eq!(json["email"], "maria@example.com");
        assert_eq!(json["created_at"], "2024-01-01T00:00:00Z");
    }

    #[test]
    fn consumption_roundtrips_through_json() {
        let consumption = Consumption {
            id: 3,
            user_id: 1,
            year: 2024,
            month: 5,
            cubic_meters: 12.5,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&consumption).unwrap();
        let back: Consumption = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, consumption.id);
        assert_eq!(back.user_id, consumption.user_id);
        assert_eq!(back.year, consumption.year);
        assert_eq!(back.month, consumption.month);
        assert_eq!(back.cubic_meters, consumption.cubic_meters);
    }

    #[test]
    fn create_user_defaults_missing_fields() {
        let input: CreateUser = serde_json::from_str(r#"{"email":"x@example.com"}"#).unwrap();
        assert_eq!(input.email, "x@example.com");
        assert!(input.name.is_empty());
    }

    #[test]
    fn create_consumption_defaults_missing_fields() {
        let input: CreateConsumption = serde_json::from_str(r#"{"year":2024}"#).unwrap();
        assert_eq!(input.year, 2024);
        assert_eq!(input.month, 0);
        assert_eq!(input.cubic_meters, 0.0);
    }
}
