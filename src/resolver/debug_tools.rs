//! Default debug tool derivation and adapter speed handling

use std::collections::BTreeMap;
use tracing::debug;

use super::types::{
    BoardManifest, DebugLink, DebugOptions, DebugSection, DebugServer, DebugToolEntry,
    DebuggerFamily, HostOs,
};
use crate::error::{ConfigError, Result};

/// GDB server port used by the default J-Link tool definition
const JLINK_GDB_PORT: &str = "2331";

/// Fill in a default debug tool definition for every supported link type
/// that does not already have one.
///
/// Existing `debug.tools` entries are never overwritten, so running the
/// derivation twice yields the same manifest. Only `debug.tools` is
/// touched; all other manifest keys pass through unchanged.
pub fn derive_default_tools(
    board_id: &str,
    mut manifest: BoardManifest,
    host_os: HostOs,
) -> Result<BoardManifest> {
    for link in DebugLink::ALL {
        if !manifest.upload.protocols.iter().any(|p| p == link.id())
            || manifest.debug.tools.contains_key(link.id())
        {
            continue;
        }

        let entry = match link {
            DebugLink::JLink => jlink_tool_entry(board_id, &manifest.debug, host_os)?,
        };

        debug!("Derived default {} debug tool for board '{}'", link.id(), board_id);
        manifest.debug.tools.insert(link.id().to_string(), entry);
    }

    Ok(manifest)
}

/// Apply the default tool derivation to an ID-keyed collection of boards,
/// failing on the first board that is missing a required device ID.
pub fn derive_default_tools_all(
    boards: BTreeMap<String, BoardManifest>,
    host_os: HostOs,
) -> Result<BTreeMap<String, BoardManifest>> {
    boards
        .into_iter()
        .map(|(id, manifest)| {
            let manifest = derive_default_tools(&id, manifest, host_os)?;
            Ok((id, manifest))
        })
        .collect()
}

fn jlink_tool_entry(
    board_id: &str,
    debug: &DebugSection,
    host_os: HostOs,
) -> Result<DebugToolEntry> {
    let device = debug
        .jlink_device
        .as_deref()
        .filter(|d| !d.is_empty())
        .ok_or_else(|| ConfigError::MissingDeviceId(board_id.to_string()))?;

    Ok(DebugToolEntry {
        server: DebugServer {
            package: "tool-jlink".to_string(),
            arguments: vec![
                "-singlerun".to_string(),
                "-if".to_string(),
                "SWD".to_string(),
                "-select".to_string(),
                "USB".to_string(),
                "-device".to_string(),
                device.to_string(),
                "-port".to_string(),
                JLINK_GDB_PORT.to_string(),
            ],
            executable: match host_os {
                HostOs::Windows => "JLinkGDBServerCL.exe",
                HostOs::Unix => "JLinkGDBServer",
            }
            .to_string(),
        },
        onboard: debug
            .onboard_tools
            .iter()
            .any(|t| t == DebugLink::JLink.id()),
    })
}

/// Append adapter speed arguments to a copy of the host's debug options.
///
/// The caller's options are never mutated. Without a requested speed the
/// copy is returned unchanged, and an unrecognized debugger family leaves
/// the arguments as they are.
pub fn apply_adapter_speed(initial: &DebugOptions, speed: Option<&str>) -> Result<DebugOptions> {
    let mut options = initial.clone();
    let Some(speed) = speed else {
        return Ok(options);
    };

    match DebuggerFamily::detect(&options.server) {
        DebuggerFamily::JLink => {
            options
                .server
                .arguments
                .extend(["-speed".to_string(), speed.to_string()]);
        }
        DebuggerFamily::PyOcd => {
            let hz = parse_frequency_hz(speed)?;
            options
                .server
                .arguments
                .extend(["--frequency".to_string(), hz.to_string()]);
        }
        DebuggerFamily::Unknown => {
            debug!(
                "No adapter speed handling for debug server '{}'",
                options.server.executable
            );
        }
    }

    Ok(options)
}

fn parse_frequency_hz(speed: &str) -> Result<u64> {
    if speed.is_empty() || !speed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConfigError::InvalidAdapterSpeed(speed.to_string()));
    }
    speed
        .parse()
        .map_err(|_| ConfigError::InvalidAdapterSpeed(speed.to_string()))
}
