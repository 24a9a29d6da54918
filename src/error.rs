//! Error types for the board-config MCP server

use thiserror::Error;

/// Main error type for the board-config MCP server
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing J-Link device ID for board: {0}")]
    MissingDeviceId(String),

    #[error("pyOCD requires the debug frequency value in Hz, e.g. 4000 (got: {0})")]
    InvalidAdapterSpeed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ConfigError>;
