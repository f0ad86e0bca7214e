//! Database module: the todo row model, schema, and SQLite-backed repository.
//!
//! Layout:
//! - `models.rs`: the `Todo` record shared by every layer
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: pool bootstrap and the `TodoStorage` repository

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::Todo;
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, TodoStorage, connect};
