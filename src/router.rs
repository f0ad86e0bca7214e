use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{MethodRouter, get},
};
use std::time::Duration;

use crate::db::TodoStorage;
use crate::handlers::todos::{
    create_todo, delete_todo, get_todo, list_todos, method_not_allowed, update_todo,
};
use crate::middleware::MAX_BODY_BYTES;
use crate::service::{TodoRepository, TodoService};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct TodoState<R> {
    pub service: TodoService<R>,
}

impl<R: TodoRepository> TodoState<R> {
    pub fn new(repo: R, request_timeout: Duration) -> Self {
        Self {
            service: TodoService::new(repo, request_timeout),
        }
    }
}

/// State wired to the SQLite repository.
pub type AppState = TodoState<TodoStorage>;

pub fn todo_router<R>(state: TodoState<R>) -> Router
where
    R: TodoRepository + Clone + 'static,
{
    // GET routes answer HEAD implicitly; route it to the 405 fallback instead.
    // `/todos/` is routed to the item handlers so it reports a missing id, and
    // the catch-all hands deeper paths such as `/todos/1/x` to the id parser.
    let item: MethodRouter<TodoState<R>> = get(get_todo::<R>)
        .head(method_not_allowed)
        .put(update_todo::<R>)
        .delete(delete_todo::<R>)
        .fallback(method_not_allowed);

    Router::new()
        .route(
            "/todos",
            get(list_todos::<R>)
                .head(method_not_allowed)
                .post(create_todo::<R>)
                .fallback(method_not_allowed),
        )
        .route("/todos/", item.clone())
        .route("/todos/{*rest}", item)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
