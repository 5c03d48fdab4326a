//! `[markdown]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [markdown]
//! line_numbers = false
//! ```

use serde::{Deserialize, Serialize};

/// Options forwarded to the framework's markdown renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct MarkdownConfig {
    /// Show line numbers in code blocks.
    pub line_numbers: bool,
}
