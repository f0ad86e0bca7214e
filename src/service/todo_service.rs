use crate::db::models::Todo;
use crate::error::{RepoError, TodoError};
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Storage capability required by [`TodoService`].
///
/// Every call returns a future; dropping it cancels the underlying query.
pub trait TodoRepository: Send + Sync {
    /// Insert a new row and return its storage-assigned id. `todo.id` is ignored.
    fn create(&self, todo: Todo) -> impl Future<Output = Result<i64, RepoError>> + Send;

    /// All rows ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Todo>, RepoError>> + Send;

    fn get_by_id(&self, id: i64) -> impl Future<Output = Result<Todo, RepoError>> + Send;

    /// Replace title, description and done of the row `todo.id`.
    fn update(&self, todo: Todo) -> impl Future<Output = Result<(), RepoError>> + Send;

    fn delete(&self, id: i64) -> impl Future<Output = Result<(), RepoError>> + Send;
}

/// Title validation and error translation on top of a [`TodoRepository`].
#[derive(Clone)]
pub struct TodoService<R> {
    repo: R,
    deadline: Duration,
}

impl<R: TodoRepository> TodoService<R> {
    pub fn new(repo: R, deadline: Duration) -> Self {
        Self { repo, deadline }
    }

    pub async fn create(&self, todo: Todo) -> Result<i64, TodoError> {
        ensure_title(&todo)?;
        let id = self.within("create", self.repo.create(todo)).await?;
        debug!(id, "todo created");
        Ok(id)
    }

    pub async fn get_all(&self) -> Result<Vec<Todo>, TodoError> {
        self.within("get_all", self.repo.get_all()).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Todo, TodoError> {
        self.within("get_by_id", self.repo.get_by_id(id))
            .await
            .map_err(no_rows_to_not_found)
    }

    pub async fn update(&self, todo: Todo) -> Result<(), TodoError> {
        ensure_title(&todo)?;
        let id = todo.id;
        self.within("update", self.repo.update(todo))
            .await
            .map_err(no_rows_to_not_found)?;
        debug!(id, "todo updated");
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), TodoError> {
        self.within("delete", self.repo.delete(id))
            .await
            .map_err(no_rows_to_not_found)?;
        debug!(id, "todo deleted");
        Ok(())
    }

    /// Run one repository call under the configured deadline.
    async fn within<T>(
        &self,
        op: &'static str,
        call: impl Future<Output = Result<T, RepoError>>,
    ) -> Result<T, TodoError> {
        match timeout(self.deadline, call).await {
            Ok(res) => res.map_err(TodoError::from),
            Err(_) => {
                warn!(
                    op,
                    deadline_ms = self.deadline.as_millis() as u64,
                    "repository call timed out"
                );
                Err(TodoError::Timeout(op))
            }
        }
    }
}

fn ensure_title(todo: &Todo) -> Result<(), TodoError> {
    if todo.title.is_empty() {
        return Err(TodoError::EmptyTitle);
    }
    Ok(())
}

fn no_rows_to_not_found(err: TodoError) -> TodoError {
    match err {
        TodoError::Repository(RepoError::NoRows) => TodoError::NotFound,
        other => other,
    }
}
