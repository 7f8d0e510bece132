//! Outbound adapters (driven side).

pub mod sqlite;
