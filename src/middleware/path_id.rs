use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::TodoError;

/// Path segment that precedes an item id, as in `/todos/{id}`.
pub const TODOS_SEGMENT: &str = "todos";

/// Locate `marker` in `path` and parse the segment after it as an id.
///
/// `/todos/42` with marker `todos` yields `42`. A path ending in the marker,
/// a missing marker, or a following segment that is not a base-10 `i64`
/// all yield [`TodoError::InvalidId`].
pub fn parse_id(path: &str, marker: &str) -> Result<i64, TodoError> {
    let segments: Vec<&str> = path.split('/').collect();
    if segments.last() == Some(&marker) {
        return Err(TodoError::InvalidId);
    }

    segments
        .iter()
        .position(|seg| *seg == marker)
        .and_then(|i| segments.get(i + 1))
        .and_then(|raw| raw.parse::<i64>().ok())
        .ok_or(TodoError::InvalidId)
}

/// Item id taken from the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoId(pub i64);

impl<S> FromRequestParts<S> for TodoId
where
    S: Send + Sync,
{
    type Rejection = TodoError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parse_id(parts.uri.path(), TODOS_SEGMENT).map(TodoId)
    }
}
