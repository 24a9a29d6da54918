//! Configuration for the board-config MCP server

use clap::Parser;
use std::path::PathBuf;

use crate::resolver::HostOs;

/// Default location of the mbed deprecation list, relative to the
/// server's working directory
const DEFAULT_DEPRECATED_BOARDS: &str = "misc/mbed_deprecated_boards.json";

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "board-config")]
#[command(about = "MCP server for resolving embedded board debug and package configuration")]
#[command(version)]
pub struct Args {
    /// Path to the deprecated mbed boards JSON list
    #[arg(long)]
    pub deprecated_boards: Option<PathBuf>,

    /// Host OS override for debug tool selection ("windows" or "unix")
    #[arg(long)]
    pub host_os: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Log file path (defaults to stderr)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Runtime configuration derived from CLI args
#[derive(Debug, Clone)]
pub struct Config {
    pub deprecated_boards: PathBuf,
    pub host_os: HostOs,
}

impl Config {
    pub fn from_args(args: &Args) -> Self {
        Self {
            deprecated_boards: args
                .deprecated_boards
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DEPRECATED_BOARDS)),
            host_os: args
                .host_os
                .as_deref()
                .and_then(HostOs::parse)
                .unwrap_or_else(HostOs::current),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            deprecated_boards: PathBuf::from(DEFAULT_DEPRECATED_BOARDS),
            host_os: HostOs::current(),
        }
    }
}
