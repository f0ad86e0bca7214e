use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

/// Failures surfaced by a [`TodoRepository`](crate::service::TodoRepository).
#[derive(Debug, ThisError)]
pub enum RepoError {
    /// The statement matched or affected zero rows.
    #[error("no rows in result set")]
    NoRows,

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),
}

#[derive(Debug, ThisError)]
pub enum TodoError {
    #[error("empty title of todo")]
    EmptyTitle,

    #[error("todo not found")]
    NotFound,

    #[error("invalid id parameter")]
    InvalidId,

    #[error("invalid json body")]
    InvalidJson,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("{0} exceeded the request deadline")]
    Timeout(&'static str),

    #[error("Repository error: {0}")]
    Repository(#[from] RepoError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),
}

impl TodoError {
    /// Status and client-facing message for this error.
    ///
    /// Anything that is not a client mistake collapses into an opaque 500.
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            TodoError::EmptyTitle => (StatusCode::BAD_REQUEST, "empty title"),
            TodoError::InvalidId => (StatusCode::BAD_REQUEST, "invalid id"),
            TodoError::NotFound => (StatusCode::NOT_FOUND, "not found"),
            TodoError::InvalidJson => (StatusCode::BAD_REQUEST, "invalid json"),
            TodoError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "method not allowed"),
            TodoError::Timeout(_) | TodoError::Repository(_) | TodoError::DatabaseError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn domain_kinds_map_to_their_status() {
        assert_eq!(
            TodoError::EmptyTitle.status_and_message(),
            (StatusCode::BAD_REQUEST, "empty title")
        );
        assert_eq!(
            TodoError::InvalidId.status_and_message(),
            (StatusCode::BAD_REQUEST, "invalid id")
        );
        assert_eq!(
            TodoError::NotFound.status_and_message(),
            (StatusCode::NOT_FOUND, "not found")
        );
    }

    #[test]
    fn infrastructure_errors_are_opaque() {
        let untranslated = TodoError::Repository(RepoError::NoRows);
        assert_eq!(
            untranslated.status_and_message(),
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
        );
        let db = TodoError::DatabaseError(SqlxError::PoolTimedOut);
        assert_eq!(db.status_and_message().0, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            TodoError::Timeout("get_all").status_and_message().1,
            "internal server error"
        );
    }

    #[tokio::test]
    async fn response_body_is_plain_text_message() {
        let resp = TodoError::NotFound.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let content_type = resp
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"not found");
    }
}
