#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use std::time::Duration;
use todoapi::db::{TodoStorage, connect};
use todoapi::router::{AppState, todo_router};

/// Fresh in-memory database with the schema applied.
///
/// A single connection keeps every query on the same in-memory database.
pub async fn memory_storage() -> TodoStorage {
    let pool = connect("sqlite::memory:", 1)
        .await
        .expect("failed to open in-memory sqlite");
    let storage = TodoStorage::new(pool);
    storage.init_schema().await.expect("failed to init schema");
    storage
}

pub async fn memory_app() -> Router {
    let state = AppState::new(memory_storage().await, Duration::from_secs(5));
    todo_router(state)
}

pub fn request(method: &str, uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .expect("failed to build request")
}

pub async fn body_string(resp: Response<Body>) -> String {
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(body.to_vec()).expect("response body was not utf-8")
}
