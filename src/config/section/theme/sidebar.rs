//! `theme.sidebar`: declared sidebar sections.
//!
//! Either the string `"auto"` (the framework builds the sidebar from page
//! headings) or an ordered list of sections keyed by URL path prefix.
//!
//! # Example
//!
//! ```toml
//! [[theme.sidebar]]
//! key = "/TypeScript/"
//!
//! [[theme.sidebar.groups]]
//! title = "TypeScript"
//! children = ["TypeScript/TypeScript", "TypeScript/TypeScriptDeep"]
//!
//! [[theme.sidebar]]
//! key = "/interview/"
//! draft = true
//! groups = [{ title = "Interview", children = ["interview/js"] }]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// How the sidebar is produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarSetting {
    /// `sidebar = "auto"`
    Auto(AutoSidebar),
    /// `[[theme.sidebar]]` sections, in declared order.
    Sections(Vec<SidebarSection>),
}

/// Marker for `sidebar = "auto"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoSidebar {
    Auto,
}

impl Default for SidebarSetting {
    fn default() -> Self {
        Self::Sections(Vec::new())
    }
}

impl SidebarSetting {
    pub const fn auto() -> Self {
        Self::Auto(AutoSidebar::Auto)
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto(_))
    }

    /// Declared sections (empty for `"auto"`).
    pub fn sections(&self) -> &[SidebarSection] {
        match self {
            Self::Auto(_) => &[],
            Self::Sections(sections) => sections,
        }
    }
}

/// One sidebar section, shown for pages under `key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarSection {
    /// URL path prefix, e.g. `/CSS/`.
    pub key: String,

    /// Unpublished: resolved and checked, but left out of the output.
    #[serde(default)]
    pub draft: bool,

    #[serde(default)]
    pub groups: Vec<SidebarGroup>,
}

/// A titled group of page references.
///
/// Children are page slugs relative to the section key, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarGroup {
    pub title: String,
    pub children: Vec<String>,
}

impl SidebarGroup {
    pub fn new<I, S>(title: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            children: children.into_iter().map(Into::into).collect(),
        }
    }
}

/// Report sidebar keys declared more than once.
pub fn validate_sidebar(
    sidebar: &SidebarSetting,
    field: &FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    let mut seen: FxHashMap<&str, usize> = FxHashMap::default();

    for (i, section) in sidebar.sections().iter().enumerate() {
        if let Some(first) = seen.insert(section.key.as_str(), i) {
            diag.error_with_hint(
                field.at(i).join("key"),
                format!("sidebar key '{}' is declared more than once", section.key),
                format!("merge it into {}", field.at(first)),
            );
            // keep pointing at the first declaration
            seen.insert(section.key.as_str(), first);
        }
    }
}
