use anyhow::Result;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::Render;
use crate::core::{Scope, VariableRecord};

const HEADERS: [&str; 5] = ["Variable", "Type", "Default", "Scope", "Location"];

/// Longest default value shown before truncation.
const MAX_DEFAULT_WIDTH: usize = 40;

/// Aligned terminal table, one row per record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableRenderer;

impl Render for TableRenderer {
    fn render(&self, records: &[VariableRecord]) -> Result<String> {
        if records.is_empty() {
            return Ok(String::new());
        }

        let rows: Vec<[String; 5]> = records.iter().map(row).collect();

        let mut widths = HEADERS.map(UnicodeWidthStr::width);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }

        let mut out = String::new();
        let header: Vec<String> = HEADERS
            .iter()
            .zip(widths)
            .map(|(h, w)| pad(h, w).bold().to_string())
            .collect();
        out.push_str(header.join("  ").trim_end());
        out.push('\n');

        for (record, row) in records.iter().zip(&rows) {
            let cells: Vec<String> = row
                .iter()
                .zip(widths)
                .enumerate()
                .map(|(i, (cell, w))| {
                    let padded = pad(cell, w);
                    match i {
                        1 => padded.cyan().to_string(),
                        3 if record.scope == Scope::Global => padded.green().to_string(),
                        3 => padded.magenta().to_string(),
                        4 => padded.dimmed().to_string(),
                        _ => padded,
                    }
                })
                .collect();
            out.push_str(cells.join("  ").trim_end());
            out.push('\n');
        }

        Ok(out)
    }
}

fn row(record: &VariableRecord) -> [String; 5] {
    [
        record.name.clone(),
        record.data_type.to_string(),
        truncate(&single_line(&record.default_value.to_string()), MAX_DEFAULT_WIDTH),
        record.scope.to_string(),
        format!("{}:{}", record.source_file, record.line),
    ]
}

fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn single_line(text: &str) -> String {
    text.replace('\n', "\\n").replace('\r', "\\r").replace('\t', "\\t")
}

fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.to_string().width();
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}
