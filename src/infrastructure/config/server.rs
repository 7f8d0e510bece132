//! HTTP listener settings.

use serde::Deserialize;
use std::path::PathBuf;

/// Where the API listens and what it serves besides the API routes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served for every path the API does not route.
    /// The fallback is skipped when the directory does not exist.
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// `host:port`, as accepted by `TcpListener::bind`.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 3000,
            static_dir: Some(PathBuf::from("frontend")),
        }
    }
}
