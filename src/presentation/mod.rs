//! Presentation of extracted records.
//!
//! Renderers turn a record list into a document; the server exposes the
//! same documents over HTTP. None of this is needed to use the core as a
//! library.
//!
//! ## Module Structure
//!
//! - `html`: Standalone HTML page
//! - `json`: JSON array of records
//! - `server`: HTTP server (`/` page, `/api/variables` JSON)
//! - `table`: Aligned terminal table

pub mod html;
pub mod json;
pub mod server;
pub mod table;

use anyhow::Result;
use clap::ValueEnum;
use enum_dispatch::enum_dispatch;

use crate::core::VariableRecord;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use table::TableRenderer;

/// Turns records into an output document.
#[enum_dispatch]
pub trait Render {
    fn render(&self, records: &[VariableRecord]) -> Result<String>;
}

#[enum_dispatch(Render)]
#[derive(Debug, Clone)]
pub enum Renderer {
    TableRenderer,
    JsonRenderer,
    HtmlRenderer,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Html,
}

impl OutputFormat {
    pub fn renderer(self) -> Renderer {
        match self {
            OutputFormat::Table => TableRenderer.into(),
            OutputFormat::Json => JsonRenderer.into(),
            OutputFormat::Html => HtmlRenderer::default().into(),
        }
    }
}
