//! Infrastructure bootstrap helpers for runtime wiring.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use tracing::{info, warn};

use crate::adapter::inbound::http::{self, AppState};
use crate::adapter::outbound::sqlite::{create_pool, run_migrations, SqliteStore};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Open the configured database, apply the schema and build the services.
///
/// # Errors
/// Returns an error if the pool cannot be created or the schema bootstrap
/// fails.
pub fn build_state(config: &Config) -> Result<AppState<SqliteStore>> {
    let pool = create_pool(&config.database.url, config.database.max_connections)?;
    run_migrations(&pool)?;
    info!(
        url = %config.database.url,
        max_connections = config.database.max_connections,
        "Database ready"
    );
    Ok(AppState::new(Arc::new(SqliteStore::new(pool))))
}

/// Build the complete application router for `config`.
///
/// # Errors
/// Returns an error if the state cannot be built.
pub fn build_app(config: &Config) -> Result<Router> {
    let state = build_state(config)?;
    let static_dir = config
        .server
        .static_dir
        .as_deref()
        .filter(|dir| static_dir_exists(dir));
    Ok(http::app(state, static_dir))
}

fn static_dir_exists(dir: &Path) -> bool {
    if dir.is_dir() {
        true
    } else {
        warn!(dir = %dir.display(), "Static directory not found, serving API only");
        false
    }
}
