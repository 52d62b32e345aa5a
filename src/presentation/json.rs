use anyhow::{Context, Result};

use super::Render;
use crate::core::VariableRecord;

/// Pretty-printed JSON array, the same document `/api/variables` serves.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Render for JsonRenderer {
    fn render(&self, records: &[VariableRecord]) -> Result<String> {
        serde_json::to_string_pretty(records).context("Failed to serialize variables as JSON")
    }
}
