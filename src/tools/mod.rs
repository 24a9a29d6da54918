//! Board configuration MCP tools module
//!
//! This module provides a unified tool handler for board configuration
//! resolution using the RMCP 0.3.2 API patterns.

pub mod config_tools;
pub mod types;

pub use config_tools::*;
pub use types::*;
