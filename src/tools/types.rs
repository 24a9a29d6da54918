//! Type definitions for board configuration MCP tools
//!
//! Host-owned payloads (manifests, debug options, package selections) are
//! accepted as raw JSON and validated into typed structures inside the
//! handler, so malformed host data is rejected at the tool boundary.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// derive_debug_tools
// ============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeriveDebugToolsArgs {
    /// Board identifier (e.g., "frdm_k20d50m")
    pub board_id: String,
    /// Raw board manifest
    pub manifest: serde_json::Value,
    /// Host OS override ("windows" or "unix"); defaults to server config
    #[serde(default)]
    pub host_os: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeriveDebugToolsResult {
    /// Manifest with default debug tools filled in
    pub manifest: serde_json::Value,
}

// ============================================================================
// derive_debug_tools_all
// ============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeriveDebugToolsAllArgs {
    /// Raw board manifests, keyed by board identifier
    pub manifests: BTreeMap<String, serde_json::Value>,
    /// Host OS override ("windows" or "unix"); defaults to server config
    #[serde(default)]
    pub host_os: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeriveDebugToolsAllResult {
    /// Augmented manifests, keyed by board identifier
    pub manifests: BTreeMap<String, serde_json::Value>,
}

// ============================================================================
// apply_adapter_speed
// ============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AdapterSpeedArgs {
    /// Debug options as handed over by the build frontend
    pub options: serde_json::Value,
    /// Requested adapter speed (e.g., "4000")
    #[serde(default)]
    pub speed: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AdapterSpeedResult {
    /// Debug options with speed arguments appended
    pub options: serde_json::Value,
}

// ============================================================================
// configure_packages
// ============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ConfigurePackagesArgs {
    /// Current package selection, keyed by package name
    #[serde(default)]
    pub packages: Option<serde_json::Value>,
    /// Board identifier
    pub board_id: String,
    /// Requested frameworks (e.g., ["mbed"])
    #[serde(default)]
    pub frameworks: Vec<String>,
    /// Explicitly requested upload protocol
    #[serde(default)]
    pub upload_protocol: Option<String>,
    /// Board manifest, used for the default upload protocol fallback
    #[serde(default)]
    pub manifest: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct ConfigurePackagesResult {
    /// Adjusted package selection
    pub packages: serde_json::Value,
}
