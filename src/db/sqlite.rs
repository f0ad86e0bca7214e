use crate::db::models::Todo;
use crate::db::schema::SQLITE_INIT;
use crate::error::{RepoError, TodoError};
use crate::service::TodoRepository;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::info;

pub type SqlitePool = Pool<Sqlite>;

/// Open a pool for `database_url`, creating the database file if needed.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, TodoError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(connect_opts)
        .await?;
    info!(database_url, max_connections, "database pool ready");
    Ok(pool)
}

/// SQL-backed [`TodoRepository`] over the `todos` table.
#[derive(Clone)]
pub struct TodoStorage {
    pool: SqlitePool,
}

impl TodoStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), TodoError> {
        // sqlx::query runs a single statement, so split the script
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }
}

impl TodoRepository for TodoStorage {
    async fn create(&self, todo: Todo) -> Result<i64, RepoError> {
        let res = sqlx::query("INSERT INTO todos (title, description, done) VALUES (?, ?, ?)")
            .bind(todo.title)
            .bind(todo.description)
            .bind(todo.done)
            .execute(&self.pool)
            .await?;
        Ok(res.last_insert_rowid())
    }

    async fn get_all(&self) -> Result<Vec<Todo>, RepoError> {
        let rows = sqlx::query_as::<_, Todo>(
            "SELECT id, title, description, done FROM todos ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> Result<Todo, RepoError> {
        sqlx::query_as::<_, Todo>("SELECT id, title, description, done FROM todos WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NoRows)
    }

    async fn update(&self, todo: Todo) -> Result<(), RepoError> {
        let res = sqlx::query("UPDATE todos SET title = ?, description = ?, done = ? WHERE id = ?")
            .bind(todo.title)
            .bind(todo.description)
            .bind(todo.done)
            .bind(todo.id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(RepoError::NoRows);
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let res = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(RepoError::NoRows);
        }
        Ok(())
    }
}
