//! Package selection defaults applied at build configuration time

use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

use super::types::{BoardManifest, PackageSelection};
use crate::error::Result;

/// Last mbed framework release that still supports the deprecated boards
const MBED_LEGACY_VERSION: &str = "~6.51506.0";
const FRAMEWORK_MBED: &str = "framework-mbed";
const TOOL_PYOCD: &str = "tool-pyocd";
const CMSIS_DAP_PROTOCOL: &str = "cmsis-dap";

/// Board IDs whose mbed support is pinned to a legacy framework release
#[derive(Debug, Clone, Default)]
pub struct DeprecatedBoards(BTreeSet<String>);

impl DeprecatedBoards {
    /// Load the deprecation list from a JSON file (an array of board IDs).
    ///
    /// A missing file is treated as an empty list.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let boards: Vec<String> = serde_json::from_str(&contents)?;
        Ok(boards.into_iter().collect())
    }

    pub fn contains(&self, board_id: &str) -> bool {
        self.0.contains(board_id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<String> for DeprecatedBoards {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Upload protocol in effect for a build: the explicitly requested one,
/// falling back to the board's own default.
pub fn effective_upload_protocol<'a>(
    requested: Option<&'a str>,
    manifest: &'a BoardManifest,
) -> Option<&'a str> {
    requested.or(manifest.upload.protocol.as_deref())
}

/// Adjust the platform package selection for the chosen board, frameworks,
/// and upload protocol.
///
/// A deprecated board building with mbed pins the framework package to its
/// last supported release, and a cmsis-dap upload protocol promotes pyOCD
/// to the uploader role. The two adjustments are independent.
pub fn configure_default_packages(
    mut packages: PackageSelection,
    board_id: &str,
    frameworks: &[String],
    upload_protocol: Option<&str>,
    deprecated: &DeprecatedBoards,
) -> PackageSelection {
    if frameworks.iter().any(|f| f == "mbed") && deprecated.contains(board_id) {
        debug!(
            "Pinning {} to {} for deprecated board '{}'",
            FRAMEWORK_MBED, MBED_LEGACY_VERSION, board_id
        );
        packages.entry(FRAMEWORK_MBED.to_string()).or_default().version =
            Some(MBED_LEGACY_VERSION.to_string());
    }

    if upload_protocol == Some(CMSIS_DAP_PROTOCOL) {
        packages.entry(TOOL_PYOCD.to_string()).or_default().role =
            Some("uploader".to_string());
    }

    packages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::types::PackageSpec;
    use std::fs;
    use tempfile::TempDir;

    fn deprecated(ids: &[&str]) -> DeprecatedBoards {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_mbed_pin_for_deprecated_board() {
        let packages = configure_default_packages(
            PackageSelection::new(),
            "frdm_k20d50m",
            &["mbed".to_string()],
            None,
            &deprecated(&["frdm_k20d50m"]),
        );
        assert_eq!(
            packages["framework-mbed"].version.as_deref(),
            Some("~6.51506.0")
        );
    }

    #[test]
    fn test_no_pin_without_mbed_framework() {
        let packages = configure_default_packages(
            PackageSelection::new(),
            "frdm_k20d50m",
            &["zephyr".to_string()],
            None,
            &deprecated(&["frdm_k20d50m"]),
        );
        assert!(!packages.contains_key("framework-mbed"));
    }

    #[test]
    fn test_no_pin_for_supported_board() {
        let packages = configure_default_packages(
            PackageSelection::new(),
            "frdm_k64f",
            &["mbed".to_string()],
            None,
            &deprecated(&["frdm_k20d50m"]),
        );
        assert!(!packages.contains_key("framework-mbed"));
    }

    #[test]
    fn test_mbed_match_is_exact() {
        // "mbed-ce" is a different framework and must not trigger the pin
        let packages = configure_default_packages(
            PackageSelection::new(),
            "frdm_k20d50m",
            &["mbed-ce".to_string()],
            None,
            &deprecated(&["frdm_k20d50m"]),
        );
        assert!(packages.is_empty());
    }

    #[test]
    fn test_cmsis_dap_promotes_pyocd() {
        let packages = configure_default_packages(
            PackageSelection::new(),
            "frdm_kl05z",
            &[],
            Some("cmsis-dap"),
            &DeprecatedBoards::default(),
        );
        assert_eq!(packages["tool-pyocd"].role.as_deref(), Some("uploader"));
    }

    #[test]
    fn test_cmsis_dap_keeps_existing_pyocd_fields() {
        let mut packages = PackageSelection::new();
        packages.insert(
            "tool-pyocd".to_string(),
            PackageSpec {
                version: Some("~2.3600.0".to_string()),
                optional: true,
                ..Default::default()
            },
        );

        let packages = configure_default_packages(
            packages,
            "frdm_kl05z",
            &[],
            Some("cmsis-dap"),
            &DeprecatedBoards::default(),
        );
        let pyocd = &packages["tool-pyocd"];
        assert_eq!(pyocd.role.as_deref(), Some("uploader"));
        assert_eq!(pyocd.version.as_deref(), Some("~2.3600.0"));
        assert!(pyocd.optional);
    }

    #[test]
    fn test_other_protocol_is_noop() {
        let packages = configure_default_packages(
            PackageSelection::new(),
            "frdm_kl05z",
            &[],
            Some("jlink"),
            &DeprecatedBoards::default(),
        );
        assert!(packages.is_empty());
    }

    #[test]
    fn test_both_adjustments_apply_together() {
        let packages = configure_default_packages(
            PackageSelection::new(),
            "frdm_k20d50m",
            &["mbed".to_string()],
            Some("cmsis-dap"),
            &deprecated(&["frdm_k20d50m"]),
        );
        assert_eq!(packages.len(), 2);
        assert!(packages.contains_key("framework-mbed"));
        assert!(packages.contains_key("tool-pyocd"));
    }

    #[test]
    fn test_effective_protocol_prefers_request() {
        let mut manifest = BoardManifest::default();
        manifest.upload.protocol = Some("cmsis-dap".to_string());
        assert_eq!(
            effective_upload_protocol(Some("jlink"), &manifest),
            Some("jlink")
        );
        assert_eq!(effective_upload_protocol(None, &manifest), Some("cmsis-dap"));
        assert_eq!(
            effective_upload_protocol(None, &BoardManifest::default()),
            None
        );
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let list = DeprecatedBoards::load(&tmp.path().join("nonexistent.json")).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("mbed_deprecated_boards.json");
        fs::write(&path, r#"["frdm_k20d50m", "frdm_kl05z"]"#).unwrap();

        let list = DeprecatedBoards::load(&path).unwrap();
        assert!(list.contains("frdm_k20d50m"));
        assert!(list.contains("frdm_kl05z"));
        assert!(!list.contains("frdm_k64f"));
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("mbed_deprecated_boards.json");
        fs::write(&path, "{not json").unwrap();
        assert!(DeprecatedBoards::load(&path).is_err());
    }
}
