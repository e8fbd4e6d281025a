//! Throw-away inventory API for integration tests

#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

pub const EMAIL: &str = "owner@shop.lk";
pub const PASSWORD: &str = "secret";
pub const TOKEN: &str = "test-token";

/// Requests observed by the fake server
#[derive(Default)]
pub struct Recorded {
    pub auth_headers: Vec<Option<String>>,
    pub sales: Vec<Value>,
    pub queries: Vec<HashMap<String, String>>,
    pub bodies: Vec<Value>,
}

pub type Shared = Arc<Mutex<Recorded>>;

fn record_auth(state: &Shared, headers: &HeaderMap) {
    let value = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.lock().unwrap().auth_headers.push(value);
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {}", TOKEN))
}

fn products() -> Value {
    json!([
        {"id": 1, "name": "Basmati Rice", "sku": "RICE-5", "quantity": 20, "price": "1250.00", "cost_price": "1100.00"},
        {"id": 2, "name": "Coconut Oil", "sku": "OIL-1", "quantity": "3", "price": 780, "cost_price": 650, "description": null}
    ])
}

async fn login(Json(body): Json<Value>) -> impl IntoResponse {
    if body["email"] == EMAIL && body["password"] == PASSWORD {
        (
            StatusCode::OK,
            Json(json!({
                "token": TOKEN,
                "user": {"id": 1, "username": "owner", "email": EMAIL, "role": "admin"}
            })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Invalid credentials"})),
        )
    }
}

async fn register(Json(body): Json<Value>) -> impl IntoResponse {
    if body["email"] == EMAIL {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "User already exists"})),
        );
    }
    (StatusCode::CREATED, Json(json!({"message": "User registered"})))
}

async fn list_products(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    record_auth(&state, &headers);
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"message": "No token"})));
    }
    state.lock().unwrap().queries.push(query.clone());
    let all = products();
    let body = match query.get("sku") {
        Some(sku) => Value::Array(
            all.as_array()
                .into_iter()
                .flatten()
                .filter(|p| p["sku"] == sku.as_str())
                .cloned()
                .collect(),
        ),
        None => all,
    };
    (StatusCode::OK, Json(body))
}

async fn create_product(State(state): State<Shared>, Json(body): Json<Value>) -> impl IntoResponse {
    if body["sku"] == "RICE-5" {
        return (
            StatusCode::CONFLICT,
            Json(json!({"message": "SKU already exists"})),
        )
            .into_response();
    }
    state.lock().unwrap().bodies.push(body);
    (StatusCode::CREATED, Json(json!({"id": 3}))).into_response()
}

async fn delete_product(Path(id): Path<i64>) -> impl IntoResponse {
    if id == 99 {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "Product not found"})),
        )
            .into_response();
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn bulk_import(State(state): State<Shared>, Json(body): Json<Value>) -> impl IntoResponse {
    state.lock().unwrap().bodies.push(body);
    (StatusCode::CREATED, Json(json!({"message": "ok"})))
}

async fn create_sale(State(state): State<Shared>, Json(body): Json<Value>) -> impl IntoResponse {
    if body["customer_name"] == "fail" {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }
    state.lock().unwrap().sales.push(body);
    (StatusCode::CREATED, Json(json!({"saleId": 10}))).into_response()
}

async fn list_sales(
    State(state): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    state.lock().unwrap().queries.push(query);
    Json(json!([
        {"id": 10, "customer_name": "Kamal", "total_amount": "240.00", "sale_date": "2024-05-01T10:00:00.000Z", "username": "owner"}
    ]))
}

async fn sale_detail(Path(id): Path<i64>) -> impl IntoResponse {
    Json(json!({
        "id": id,
        "items": [
            {"product_id": 1, "product_name": "Basmati Rice", "quantity_sold": 2, "price_per_unit": "100.00", "discount": "0.00"},
            {"product_id": 2, "product_name": "Coconut Oil", "quantity_sold": 1, "price_per_unit": "50.00", "discount": "10.00"}
        ]
    }))
}

async fn sales_report(
    State(state): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    state.lock().unwrap().queries.push(query);
    Json(json!({
        "summary": {"total_sales": "1", "total_revenue": "240.00", "total_discount": "10.00", "total_cost": "180.00", "gross_profit": "60.00"},
        "details": [
            {"id": 10, "customer_name": "Kamal", "total_amount": "240.00", "sale_date": "2024-05-01T10:00:00.000Z", "username": "owner"}
        ]
    }))
}

async fn business_settings() -> impl IntoResponse {
    Json(json!({"business_name": "Perera Stores", "address": "Kandy", "phone": "081"}))
}

async fn update_role(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    state
        .lock()
        .unwrap()
        .bodies
        .push(json!({"id": id, "role": body["role"]}));
    Json(json!({"message": "Role updated"}))
}

async fn change_password(Json(body): Json<Value>) -> impl IntoResponse {
    if body["oldPassword"] != PASSWORD {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "Incorrect old password"})),
        );
    }
    (StatusCode::OK, Json(json!({"message": "Password changed"})))
}

/// Start the fake API on an ephemeral port
pub async fn spawn_server() -> (SocketAddr, Shared) {
    let state: Shared = Arc::default();
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/products", get(list_products).post(create_product))
        .route("/api/products/bulk", post(bulk_import))
        .route("/api/products/{id}", delete(delete_product))
        .route("/api/sales", get(list_sales).post(create_sale))
        .route("/api/sales/{id}", get(sale_detail))
        .route("/api/reports/sales", get(sales_report))
        .route("/api/settings/business", get(business_settings))
        .route("/api/users/{id}/role", put(update_role))
        .route("/api/users/change-password", put(change_password))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, state)
}

pub fn base_url(addr: SocketAddr) -> String {
    format!("http://{}", addr)
}
