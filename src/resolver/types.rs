//! Type definitions for board configuration resolution
//!
//! Board manifests, debug options, and package selections arrive from the
//! host as semi-structured JSON. The sections the resolver interprets are
//! typed here; everything else rides in flattened extra maps and
//! round-trips untouched.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// board manifest
// ============================================================================

/// Board manifest as supplied by the host build system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardManifest {
    #[serde(default)]
    pub debug: DebugSection,
    #[serde(default)]
    pub upload: UploadSection,
    /// Host-defined manifest keys the resolver does not interpret
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// `debug` section of a board manifest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugSection {
    /// J-Link device identifier, required when the board lists "jlink"
    /// among its upload protocols
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jlink_device: Option<String>,
    /// Link types whose probe hardware is integrated on the board
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub onboard_tools: Vec<String>,
    /// Fully specified debug tools, keyed by link type
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tools: BTreeMap<String, DebugToolEntry>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// `upload` section of a board manifest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadSection {
    /// Upload protocols the board supports
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub protocols: Vec<String>,
    /// The board's default upload protocol
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// A debug tool definition under `debug.tools`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugToolEntry {
    pub server: DebugServer,
    /// Whether the probe is mounted on the board rather than external
    #[serde(default)]
    pub onboard: bool,
}

/// GDB server launch description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugServer {
    /// Package providing the server binary (e.g., "tool-jlink")
    #[serde(default)]
    pub package: String,
    #[serde(default)]
    pub arguments: Vec<String>,
    #[serde(default)]
    pub executable: String,
}

// ============================================================================
// debug options
// ============================================================================

/// Debug options handed over by the host when configuring a debug session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugOptions {
    pub server: DebugServer,
    /// Host-defined option fields the resolver does not interpret
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

// ============================================================================
// package selection
// ============================================================================

/// Single entry in the platform package selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Package role, e.g. "uploader" or "debugger"
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub optional: bool,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Platform package selection, keyed by package name
pub type PackageSelection = BTreeMap<String, PackageSpec>;

// ============================================================================
// closed enumerations
// ============================================================================

/// Debug link types that get a default tool definition when a board
/// supports the matching upload protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebugLink {
    JLink,
}

impl DebugLink {
    /// All link types eligible for default tool generation
    pub const ALL: &'static [DebugLink] = &[DebugLink::JLink];

    /// Protocol identifier as it appears in board manifests
    pub fn id(self) -> &'static str {
        match self {
            DebugLink::JLink => "jlink",
        }
    }
}

/// Debugger family, classified from a server launch description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebuggerFamily {
    JLink,
    PyOcd,
    Unknown,
}

impl DebuggerFamily {
    /// Classify by executable name first, then by package name.
    pub fn detect(server: &DebugServer) -> Self {
        if server.executable.to_lowercase().contains("jlink") {
            DebuggerFamily::JLink
        } else if server.package.contains("pyocd") {
            DebuggerFamily::PyOcd
        } else {
            DebuggerFamily::Unknown
        }
    }
}

/// Host operating system family, injected so executable selection is
/// testable on any platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostOs {
    Windows,
    Unix,
}

impl HostOs {
    /// OS family of the running process
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            HostOs::Windows
        } else {
            HostOs::Unix
        }
    }

    /// Parse a host OS name from config or tool arguments
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "windows" => Some(HostOs::Windows),
            "unix" | "linux" | "macos" | "darwin" => Some(HostOs::Unix),
            _ => None,
        }
    }
}
