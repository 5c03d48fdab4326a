//! Rendering the resolved record for the site framework.

use super::ResolvedConfig;
use anyhow::Result;
use clap::ValueEnum;

/// Output encoding of `docnav resolve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// CommonJS module (`module.exports = {...};`), usable as the framework config file
    Js,
}

/// Render `config` in the requested format, with a trailing newline.
pub fn render(config: &ResolvedConfig, format: OutputFormat) -> Result<String> {
    let json = serde_json::to_string_pretty(config)?;
    Ok(match format {
        OutputFormat::Json => format!("{json}\n"),
        OutputFormat::Js => format!("module.exports = {json};\n"),
    })
}
