use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    core::{VariableRecord, extract::ScopeTracking},
    issues::ParseErrorIssue,
};

// ============================================================
// Common Types
// ============================================================

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

// ============================================================
// Scan Types (scan_variables)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanVariablesParams {
    /// Python file or directory to scan
    pub path: String,
    /// Only return records with this scope, e.g. "Global" or "Function: main"
    pub scope: Option<String>,
    /// Only return records with this data type, e.g. "int" or "function_call"
    pub data_type: Option<String>,
    /// Override the configured scope tracking mode ("flat" or "lexical")
    pub scope_tracking: Option<ScopeTracking>,
    /// Maximum number of records to return (default 50, max 200)
    pub limit: Option<u32>,
    /// Number of records to skip (default 0)
    pub offset: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanVariablesResult {
    /// Records matching the filters, before pagination
    pub total_count: usize,
    /// Python files scanned
    pub file_count: usize,
    /// Files that could not be parsed and contributed no records
    pub parse_errors: Vec<ParseErrorIssue>,
    pub items: Vec<VariableRecord>,
    pub pagination: Pagination,
}

// ============================================================
// Config Types (get_config)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Directory to resolve `.varscoutrc.json` from
    pub path: String,
}

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub ignores: Vec<String>,
    pub scope_tracking: ScopeTracking,
    pub host: String,
    pub port: u16,
}

impl From<Config> for ConfigValues {
    fn from(c: Config) -> Self {
        Self {
            ignores: c.ignores,
            scope_tracking: c.scope_tracking,
            host: c.host,
            port: c.port,
        }
    }
}
