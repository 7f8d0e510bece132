//! CLI inbound adapter.

pub mod command;

pub use command::Cli;
