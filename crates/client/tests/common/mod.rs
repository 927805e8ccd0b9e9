#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use finboard_core::catalog::year_template;
use finboard_core::entry::{MonthUpdate, MonthView};
use finboard_core::totals::summarize_year;
use serde::Deserialize;
use serde_json::json;

pub const PASSWORD: &str = "correct-horse";
const ADMIN_TOKEN: &str = "Bearer token-admin";

/// What the stub server has stored and received.
#[derive(Default)]
pub struct StubData {
    pub years: BTreeMap<i32, Vec<MonthView>>,
    pub created: Vec<i32>,
    pub updates: Vec<MonthUpdate>,
}

pub type Stub = Arc<Mutex<StubData>>;

/// Start an in-memory imitation of the API with `years` already seeded and
/// return its base URL.
pub async fn spawn_stub(years: &[i32]) -> (String, Stub) {
    let data = StubData {
        years: years.iter().map(|&y| (y, year_template())).collect(),
        ..Default::default()
    };
    let stub: Stub = Arc::new(Mutex::new(data));

    let app = Router::new()
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/years", get(list_years).post(create_year))
        .route("/api/v1/year", get(get_year))
        .route("/api/v1/month", get(get_month).put(update_month))
        .route("/api/v1/summary", get(summary))
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), stub)
}

/// A base URL nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[derive(Deserialize)]
struct YearQuery {
    year: i32,
}

#[derive(Deserialize)]
struct MonthQuery {
    year: i32,
    month: i32,
}

fn is_admin(headers: &HeaderMap) -> bool {
    headers.get("authorization").and_then(|v| v.to_str().ok()) == Some(ADMIN_TOKEN)
}

fn forbidden() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({ "error": "Admin role required", "code": "FORBIDDEN" })),
    )
        .into_response()
}

async fn login(Json(body): Json<serde_json::Value>) -> Response {
    let username = body["username"].as_str().unwrap_or_default();
    if body["password"] != PASSWORD {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid username or password", "code": "UNAUTHORIZED" })),
        )
            .into_response();
    }
    let (role, name) = if username == "financeiro" {
        ("admin", "JML Admin")
    } else {
        ("user", "JML User")
    };
    Json(json!({
        "access_token": format!("token-{role}"),
        "token_type": "Bearer",
        "expires_in": 3600,
        "user": { "id": 1, "username": username, "name": name, "role": role }
    }))
    .into_response()
}

async fn list_years(State(stub): State<Stub>) -> Json<serde_json::Value> {
    let data = stub.lock().unwrap();
    let years: Vec<i32> = data.years.keys().rev().copied().collect();
    Json(json!({ "years": years }))
}

async fn create_year(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Json(body): Json<YearQuery>,
) -> Response {
    if !is_admin(&headers) {
        return forbidden();
    }
    let mut data = stub.lock().unwrap();
    let created = !data.years.contains_key(&body.year);
    data.years.entry(body.year).or_insert_with(year_template);
    data.created.push(body.year);
    (
        StatusCode::CREATED,
        Json(json!({ "ok": true, "year": body.year, "created": created })),
    )
        .into_response()
}

async fn get_year(State(stub): State<Stub>, Query(q): Query<YearQuery>) -> Json<serde_json::Value> {
    let mut data = stub.lock().unwrap();
    let months = data.years.entry(q.year).or_insert_with(year_template).clone();
    Json(json!({ "months": months }))
}

async fn get_month(State(stub): State<Stub>, Query(q): Query<MonthQuery>) -> Response {
    let data = stub.lock().unwrap();
    let month = data
        .years
        .get(&q.year)
        .and_then(|months| months.iter().find(|m| m.id == q.month));
    match month {
        Some(month) => Json(json!({ "month": month })).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Month not found", "code": "NOT_FOUND" })),
        )
            .into_response(),
    }
}

async fn update_month(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Json(update): Json<MonthUpdate>,
) -> Response {
    if !is_admin(&headers) {
        return forbidden();
    }
    let (Some(year), Some(month)) = (update.year, update.month) else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    let mut data = stub.lock().unwrap();
    let months = data.years.entry(year).or_insert_with(year_template);
    let mut updated = 0u64;
    if let Some(view) = months.iter_mut().find(|m| m.id == month) {
        updated = update
            .categories
            .iter()
            .filter(|p| view.categories.iter().any(|c| c.code == p.code))
            .count() as u64;
        view.apply_patches(&update.categories);
    }
    data.updates.push(update);
    Json(json!({ "ok": true, "updated": updated })).into_response()
}

async fn summary(State(stub): State<Stub>, Query(q): Query<YearQuery>) -> Json<serde_json::Value> {
    let data = stub.lock().unwrap();
    let months = data.years.get(&q.year).cloned().unwrap_or_default();
    Json(json!(summarize_year(q.year, &months)))
}
