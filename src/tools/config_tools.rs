//! RMCP 0.3.2 tool handler for board configuration resolution
//!
//! Exposes the resolver operations to the host build system as 4 tools.

use rmcp::{
    tool, tool_router, tool_handler, ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::*,
    ErrorData as McpError,
    service::RequestContext,
    RoleServer,
};
use std::collections::BTreeMap;
use std::future::Future;
use tracing::{debug, info};

use super::types::*;
use crate::config::Config;
use crate::resolver::{
    self, BoardManifest, DebugOptions, DeprecatedBoards, HostOs, PackageSelection,
};

/// Board configuration tool handler
#[derive(Clone)]
pub struct BoardConfigToolHandler {
    #[allow(dead_code)]
    tool_router: ToolRouter<BoardConfigToolHandler>,
    config: Config,
}

impl BoardConfigToolHandler {
    pub fn new(config: Config) -> Self {
        Self {
            tool_router: Self::tool_router(),
            config,
        }
    }

    /// Host OS for tool derivation: per-call override, else server config
    fn resolve_host_os(&self, override_name: Option<&str>) -> HostOs {
        override_name
            .and_then(HostOs::parse)
            .unwrap_or(self.config.host_os)
    }

    fn load_deprecated_boards(&self) -> Result<DeprecatedBoards, McpError> {
        DeprecatedBoards::load(&self.config.deprecated_boards).map_err(|e| {
            McpError::internal_error(
                format!("Failed to load deprecated boards list: {}", e),
                None,
            )
        })
    }

    fn parse_manifest(value: serde_json::Value) -> Result<BoardManifest, McpError> {
        serde_json::from_value(value)
            .map_err(|e| McpError::invalid_params(format!("Invalid board manifest: {}", e), None))
    }

    fn to_json_result<T: serde::Serialize>(result: &T) -> Result<CallToolResult, McpError> {
        let json = serde_json::to_string_pretty(result).map_err(|e| {
            McpError::internal_error(format!("Serialization error: {}", e), None)
        })?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

impl Default for BoardConfigToolHandler {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[tool_router]
impl BoardConfigToolHandler {
    #[tool(description = "Fill in default debug tool definitions for a board manifest")]
    async fn derive_debug_tools(
        &self,
        Parameters(args): Parameters<DeriveDebugToolsArgs>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Deriving default debug tools for board '{}'", args.board_id);

        let manifest = Self::parse_manifest(args.manifest)?;
        let host_os = self.resolve_host_os(args.host_os.as_deref());

        let manifest = resolver::derive_default_tools(&args.board_id, manifest, host_os)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let result = DeriveDebugToolsResult {
            manifest: serde_json::to_value(&manifest).map_err(|e| {
                McpError::internal_error(format!("Serialization error: {}", e), None)
            })?,
        };

        info!("Derived debug tools for board '{}'", args.board_id);
        Self::to_json_result(&result)
    }

    #[tool(description = "Fill in default debug tool definitions for a set of board manifests")]
    async fn derive_debug_tools_all(
        &self,
        Parameters(args): Parameters<DeriveDebugToolsAllArgs>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Deriving default debug tools for {} boards", args.manifests.len());

        let mut boards = BTreeMap::new();
        for (id, value) in args.manifests {
            boards.insert(id, Self::parse_manifest(value)?);
        }
        let host_os = self.resolve_host_os(args.host_os.as_deref());

        let boards = resolver::derive_default_tools_all(boards, host_os)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let mut manifests = BTreeMap::new();
        for (id, manifest) in &boards {
            manifests.insert(
                id.clone(),
                serde_json::to_value(manifest).map_err(|e| {
                    McpError::internal_error(format!("Serialization error: {}", e), None)
                })?,
            );
        }

        info!("Derived debug tools for {} boards", manifests.len());
        Self::to_json_result(&DeriveDebugToolsAllResult { manifests })
    }

    #[tool(description = "Append adapter speed arguments to debug server options")]
    async fn apply_adapter_speed(
        &self,
        Parameters(args): Parameters<AdapterSpeedArgs>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Applying adapter speed {:?}", args.speed);

        let options: DebugOptions = serde_json::from_value(args.options)
            .map_err(|e| McpError::invalid_params(format!("Invalid debug options: {}", e), None))?;

        let options = resolver::apply_adapter_speed(&options, args.speed.as_deref())
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let result = AdapterSpeedResult {
            options: serde_json::to_value(&options).map_err(|e| {
                McpError::internal_error(format!("Serialization error: {}", e), None)
            })?,
        };
        Self::to_json_result(&result)
    }

    #[tool(description = "Adjust the platform package selection for a board and framework set")]
    async fn configure_packages(
        &self,
        Parameters(args): Parameters<ConfigurePackagesArgs>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Configuring default packages for board '{}'", args.board_id);

        let packages: PackageSelection = match args.packages {
            None | Some(serde_json::Value::Null) => PackageSelection::new(),
            Some(value) => serde_json::from_value(value).map_err(|e| {
                McpError::invalid_params(format!("Invalid package selection: {}", e), None)
            })?,
        };

        let manifest = args.manifest.map(Self::parse_manifest).transpose()?;
        let upload_protocol = match &manifest {
            Some(m) => resolver::effective_upload_protocol(args.upload_protocol.as_deref(), m),
            None => args.upload_protocol.as_deref(),
        };

        let deprecated = self.load_deprecated_boards()?;
        let packages = resolver::configure_default_packages(
            packages,
            &args.board_id,
            &args.frameworks,
            upload_protocol,
            &deprecated,
        );

        let result = ConfigurePackagesResult {
            packages: serde_json::to_value(&packages).map_err(|e| {
                McpError::internal_error(format!("Serialization error: {}", e), None)
            })?,
        };

        info!("Configured default packages for board '{}'", args.board_id);
        Self::to_json_result(&result)
    }
}

#[tool_handler]
impl ServerHandler for BoardConfigToolHandler {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Board Config MCP Server - Resolve embedded board debug and package \
                 configuration. 4 tools available: derive_debug_tools, \
                 derive_debug_tools_all, apply_adapter_speed, configure_packages."
                    .to_string(),
            ),
        }
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, McpError> {
        info!("Board Config MCP server initialized with 4 tools");
        Ok(self.get_info())
    }
}
