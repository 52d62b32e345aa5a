use std::fmt::Write;

use anyhow::Result;
use html_escape::encode_text;

use super::Render;
use crate::core::VariableRecord;

const COLUMNS: [&str; 7] = [
    "Variable Name",
    "Description",
    "Data Type",
    "Default Value",
    "Example Usage",
    "Belongs To",
    "File",
];

const STYLE: &str = "\
body { font-family: system-ui, sans-serif; margin: 2rem; color: #222; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #ccc; padding: 0.4rem 0.6rem; text-align: left; vertical-align: top; }
th { background: #f3f3f3; }
tr:nth-child(even) td { background: #fafafa; }
td.default { font-family: ui-monospace, monospace; white-space: pre-wrap; }";

/// Self-contained HTML page listing every record.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    pub title: String,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self {
            title: "Variable Documentation".to_string(),
        }
    }
}

impl Render for HtmlRenderer {
    fn render(&self, records: &[VariableRecord]) -> Result<String> {
        let mut out = String::new();
        let title = encode_text(&self.title);

        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html lang=\"en\">")?;
        writeln!(out, "<head>")?;
        writeln!(out, "<meta charset=\"utf-8\">")?;
        writeln!(out, "<title>{}</title>", title)?;
        writeln!(out, "<style>\n{}\n</style>", STYLE)?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        writeln!(out, "<h1>{}</h1>", title)?;
        writeln!(out, "<p>{} variable(s) found.</p>", records.len())?;
        writeln!(out, "<table>")?;
        writeln!(out, "<thead>")?;
        writeln!(out, "<tr>")?;
        for column in COLUMNS {
            writeln!(out, "<th>{}</th>", column)?;
        }
        writeln!(out, "</tr>")?;
        writeln!(out, "</thead>")?;
        writeln!(out, "<tbody>")?;
        for record in records {
            writeln!(out, "<tr>")?;
            writeln!(out, "<td>{}</td>", encode_text(&record.name))?;
            writeln!(out, "<td>{}</td>", encode_text(&record.description))?;
            writeln!(out, "<td>{}</td>", record.data_type)?;
            writeln!(
                out,
                "<td class=\"default\">{}</td>",
                encode_text(&record.default_value.to_string())
            )?;
            writeln!(out, "<td>{}</td>", encode_text(&record.example_usage))?;
            writeln!(out, "<td>{}</td>", encode_text(&record.scope.to_string()))?;
            writeln!(
                out,
                "<td>{}:{}</td>",
                encode_text(&record.source_file),
                record.line
            )?;
            writeln!(out, "</tr>")?;
        }
        writeln!(out, "</tbody>")?;
        writeln!(out, "</table>")?;
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;

        Ok(out)
    }
}
