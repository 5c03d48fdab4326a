//! The resolved record handed to the site framework.
//!
//! Serializes in the framework's shape: camelCase keys, theme options under
//! `themeConfig`, and the sidebar as an object keyed by path prefix in
//! declared order (or the string `"auto"`).

use crate::config::{LastUpdated, MarkdownConfig, NavEntry, SidebarGroup};
use serde::{Serialize, Serializer, ser::SerializeMap};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub base: String,
    pub dest: String,
    pub title: String,
    pub description: String,
    pub markdown: MarkdownConfig,
    #[serde(rename = "themeConfig")]
    pub theme: ResolvedTheme,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub edit_links: bool,
    pub docs_dir: String,
    pub last_updated: LastUpdated,
    pub smooth_scroll: bool,
    pub sidebar_depth: u8,
    /// Published nav entries only.
    pub nav: Vec<NavEntry>,
    pub sidebar: ResolvedSidebar,
    /// Keys of draft sections that were resolved but not published.
    #[serde(skip)]
    pub drafts: Vec<String>,
}

/// Sidebar after every builder has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedSidebar {
    Auto,
    Sections(Vec<ResolvedSection>),
}

/// One builder's output, embedded verbatim under its key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSection {
    pub key: String,
    pub groups: Vec<SidebarGroup>,
}

impl ResolvedSidebar {
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Published sections (empty for `Auto`).
    pub fn sections(&self) -> &[ResolvedSection] {
        match self {
            Self::Auto => &[],
            Self::Sections(sections) => sections,
        }
    }

    pub fn get(&self, key: &str) -> Option<&[SidebarGroup]> {
        self.sections()
            .iter()
            .find(|section| section.key == key)
            .map(|section| section.groups.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sections().iter().map(|section| section.key.as_str())
    }
}

impl Serialize for ResolvedSidebar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Auto => serializer.serialize_str("auto"),
            Self::Sections(sections) => {
                let mut map = serializer.serialize_map(Some(sections.len()))?;
                for section in sections {
                    map.serialize_entry(&section.key, &section.groups)?;
                }
                map.end()
            }
        }
    }
}
