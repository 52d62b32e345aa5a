use std::path::{Path, PathBuf};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    config::load_config,
    core::{ScanOptions, TypeLabel, VariableRecord, scan},
};

use super::types::{
    ConfigDto, ConfigValues, GetConfigParams, Pagination, ScanVariablesParams, ScanVariablesResult,
};

const DEFAULT_LIMIT: usize = 50;
const MAX_LIMIT: usize = 200;

#[derive(Clone)]
pub struct VarscoutMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for VarscoutMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl VarscoutMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Extract variable assignments from Python sources
    #[tool(
        description = "Extract variable assignments from a Python file or directory. Each record has name, dataType, defaultValue, scope, sourceFile and line. Supports scope and dataType filters. Returns paginated list."
    )]
    pub async fn scan_variables(
        &self,
        params: Parameters<ScanVariablesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let limit = params
            .limit
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);
        let offset = params.offset.map(|v| v as usize).unwrap_or(0);

        let data_type = match params.data_type.as_deref() {
            Some(label) => Some(TypeLabel::from_label(label).ok_or_else(|| {
                McpError::invalid_params(format!("Unknown dataType: \"{}\"", label), None)
            })?),
            None => None,
        };

        let options = ScanOptions {
            path: PathBuf::from(&params.path),
            scope_tracking: params.scope_tracking,
            verbose: false,
        };

        let output =
            scan(&options).map_err(|e| McpError::internal_error(format!("Scan failed: {}", e), None))?;

        let matching: Vec<VariableRecord> = output
            .records
            .into_iter()
            .filter(|r| data_type.is_none_or(|t| r.data_type == t))
            .filter(|r| {
                params
                    .scope
                    .as_deref()
                    .is_none_or(|s| r.scope.to_string() == s)
            })
            .collect();

        let total_count = matching.len();
        let items: Vec<VariableRecord> = matching.into_iter().skip(offset).take(limit).collect();
        let has_more = offset + items.len() < total_count;

        let result = ScanVariablesResult {
            total_count,
            file_count: output.files_scanned,
            parse_errors: output.parse_errors,
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        };

        json_result(&result)
    }

    /// Get the current varscout configuration
    #[tool(description = "Get the varscout configuration that applies to a directory.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        let config_dto = ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        };

        json_result(&config_dto)
    }
}

fn json_result(value: &impl Serialize) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for VarscoutMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Varscout MCP documents the variables assigned in Python codebases.\n\n\
                 Available tools:\n\
                 1. get_config - Get the configuration for a directory\n\
                 2. scan_variables - Get variable records (paginated, filterable by scope and dataType)\n\n\
                 Scopes are reported as \"Global\" or \"Function: <name>\". Files that fail to\n\
                 parse are listed in parseErrors and contribute no records."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = VarscoutMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
