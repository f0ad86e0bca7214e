use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use std::{
    fs,
    time::{Duration, SystemTime, UNIX_EPOCH},
};
use todoapi::db::{TodoStorage, connect};
use todoapi::middleware::MAX_BODY_BYTES;
use todoapi::router::{AppState, todo_router};
use tower::ServiceExt;

#[tokio::test]
async fn create_route_rejects_oversized_body_as_invalid_json() {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "todoapi-body-limit-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));

    let database_url = format!("sqlite:{}", temp_path.display());
    let pool = connect(&database_url, 2)
        .await
        .expect("failed to open sqlite file");
    let storage = TodoStorage::new(pool);
    storage.init_schema().await.expect("failed to init schema");
    let app = todo_router(AppState::new(storage.clone(), Duration::from_secs(5)));

    let oversized_description = "a".repeat(MAX_BODY_BYTES + 1024);
    let oversized_payload =
        format!(r#"{{"title":"big","description":"{oversized_description}"}}"#);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/todos")
                .header("content-type", "application/json")
                .body(Body::from(oversized_payload))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    assert_eq!(&body[..], b"invalid json");

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/todos")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    assert_eq!(&body[..], b"[]");

    storage.pool().close().await;
    let _ = fs::remove_file(&temp_path);
}
