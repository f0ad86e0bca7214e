use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::db::models::Todo;
use crate::error::TodoError;
use crate::middleware::{JsonBody, TODOS_SEGMENT, TodoId};
use crate::router::TodoState;
use crate::service::TodoRepository;

/// POST /todos -> 201 with `Location: /todos/{id}` and an empty body.
pub async fn create_todo<R: TodoRepository>(
    State(state): State<TodoState<R>>,
    JsonBody(todo): JsonBody<Todo>,
) -> Result<Response, TodoError> {
    let id = state.service.create(todo).await?;
    let location = format!("/{TODOS_SEGMENT}/{id}");
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]).into_response())
}

/// GET /todos
pub async fn list_todos<R: TodoRepository>(
    State(state): State<TodoState<R>>,
) -> Result<Json<Vec<Todo>>, TodoError> {
    let todos = state.service.get_all().await?;
    debug!(count = todos.len(), "listing todos");
    Ok(Json(todos))
}

/// GET /todos/{id}
pub async fn get_todo<R: TodoRepository>(
    State(state): State<TodoState<R>>,
    TodoId(id): TodoId,
) -> Result<Json<Todo>, TodoError> {
    Ok(Json(state.service.get_by_id(id).await?))
}

/// PUT /todos/{id}: full replacement; the body id must match the path id.
pub async fn update_todo<R: TodoRepository>(
    State(state): State<TodoState<R>>,
    TodoId(id): TodoId,
    JsonBody(todo): JsonBody<Todo>,
) -> Result<StatusCode, TodoError> {
    if todo.id != id {
        warn!(path_id = id, body_id = todo.id, "id mismatch between path and body");
        return Err(TodoError::InvalidId);
    }
    state.service.update(todo).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /todos/{id}
pub async fn delete_todo<R: TodoRepository>(
    State(state): State<TodoState<R>>,
    TodoId(id): TodoId,
) -> Result<StatusCode, TodoError> {
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for any method a route does not serve.
pub async fn method_not_allowed() -> TodoError {
    TodoError::MethodNotAllowed
}
