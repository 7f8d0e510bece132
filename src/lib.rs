//! Mercado - market, product and stock movement HTTP API.
//!
//! A JSON-over-HTTP service that registers markets, the products each market
//! carries, and an append-only history of stock movements per product.
//!
//! # Architecture
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - [`domain`] - Validated request types, entities and identifiers
//! - [`port`] - Persistence traits the application depends on
//! - [`application`] - One service per resource
//! - [`adapter`] - HTTP inbound, SQLite outbound and CLI
//! - [`infrastructure`] - Configuration, logging and wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use mercado::infrastructure::bootstrap;
//! use mercado::infrastructure::config::settings::Config;
//!
//! # async fn run() -> mercado::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let app = bootstrap::build_app(&config)?;
//! let listener = tokio::net::TcpListener::bind(config.server.bind_address()).await?;
//! mercado::adapter::inbound::http::serve(listener, app, async {}).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
