//! Board Config MCP Server
//!
//! A Model Context Protocol server that resolves per-board debug tool
//! defaults, adapter speed arguments, and package selection overrides for
//! embedded build pipelines.

pub mod config;
pub mod error;
pub mod resolver;
pub mod tools;

pub use config::Config;
pub use error::{ConfigError, Result};
pub use tools::BoardConfigToolHandler;
