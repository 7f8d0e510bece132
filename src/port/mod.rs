//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   HTTP adapter ──▶ application services ──▶ store ports ◀── SQLite adapter
//! ```
//!
//! The store ports are the only seam between request handling and the
//! relational store.

pub mod outbound;
