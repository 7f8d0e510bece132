use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use mercado::adapter::inbound::http::{router, AppState};
use mercado::adapter::outbound::sqlite::{create_pool, run_migrations, DbPool, SqliteStore};
use tempfile::TempDir;

/// Temporary SQLite database for integration tests, removed on drop.
pub struct TempDb {
    dir: TempDir,
    pool: DbPool,
}

impl TempDb {
    pub fn create() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("mercado.db");
        let pool = create_pool(&path.display().to_string(), 4).expect("create sqlite pool");
        run_migrations(&pool).expect("run migrations");
        Self { dir, pool }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("mercado.db")
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn store(&self) -> SqliteStore {
        SqliteStore::new(self.pool.clone())
    }

    /// API router over this database, without static files or layers.
    pub fn router(&self) -> Router {
        router(AppState::new(Arc::new(self.store())))
    }
}
