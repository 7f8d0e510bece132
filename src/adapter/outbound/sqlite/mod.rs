//! SQLite persistence adapter.
//!
//! The store gateway over Diesel: pooled connections, the schema bootstrap,
//! row models, and the implementation of the store ports.

pub mod database;
pub mod store;

pub use database::connection::{create_pool, run_migrations, DbPool};
pub use store::SqliteStore;
