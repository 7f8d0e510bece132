//! Database connection settings.

use serde::Deserialize;

/// SQLite database location and pool size.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the SQLite file, or `:memory:`.
    pub url: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Replace the configured url with `url` when one is given.
    pub fn override_url(&mut self, url: Option<String>) {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.url = url;
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "mercado.db".into(),
            max_connections: 10,
        }
    }
}
