use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use ledger_stock_api::{
    repositories::{InMemoryLedgerRepository, InMemoryStockRepository},
    routes,
    state::AppState,
};
use serde_json::Value;
use tower::util::ServiceExt;

/// Router over fresh in-memory stores. Stock starts seeded.
pub fn app() -> Router {
    let state = AppState::new(
        Arc::new(InMemoryLedgerRepository::new()),
        Arc::new(InMemoryStockRepository::seeded()),
    );
    routes::create_router(state)
}

/// Send a request and return status plus parsed JSON body (`Null` when empty).
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

pub fn error_message(body: &Value) -> &str {
    body["error"]["message"].as_str().unwrap_or_default()
}
