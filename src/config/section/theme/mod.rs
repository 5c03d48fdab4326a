//! `[theme]` section configuration.
//!
//! Options passed through to the site theme, plus the header navigation
//! and the sidebar declaration.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! logo = "/logo.png"
//! edit_links = true
//! docs_dir = "docs"
//! last_updated = "Last Updated"
//! smooth_scroll = true
//! sidebar_depth = 2
//!
//! [[theme.nav]]
//! text = "Frontend"
//! link = "/accumulate/"
//!
//! [[theme.sidebar]]
//! key = "/accumulate/"
//! groups = [{ title = "Frontend", children = ["accumulate/css"] }]
//! ```

mod last_updated;
mod nav;
mod sidebar;

pub use last_updated::{DEFAULT_LAST_UPDATED_LABEL, LastUpdated};
pub use nav::{NavDropdown, NavEntry, NavLink, validate_nav};
pub use sidebar::{AutoSidebar, SidebarGroup, SidebarSection, SidebarSetting, validate_sidebar};

use crate::config::{ConfigDiagnostics, types::config_fields};
use serde::{Deserialize, Serialize};

/// Deepest heading level the framework shows in the sidebar.
pub const MAX_SIDEBAR_DEPTH: u8 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Logo asset shown in the header.
    pub logo: Option<String>,

    /// Show "edit this page" links.
    pub edit_links: bool,

    /// Content directory relative to the repository root.
    pub docs_dir: String,

    /// Last-updated label, or `false`.
    pub last_updated: LastUpdated,

    pub smooth_scroll: bool,

    /// Heading depth extracted into the sidebar (0..=2).
    pub sidebar_depth: u8,

    /// Header navigation, in display order.
    pub nav: Vec<NavEntry>,

    /// Sidebar declaration.
    pub sidebar: SidebarSetting,
}

config_fields!(ThemeConfig => ThemeConfigFields, "theme" {
    logo,
    edit_links,
    docs_dir,
    last_updated,
    smooth_scroll,
    sidebar_depth,
    nav,
    sidebar,
});

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            logo: None,
            edit_links: false,
            docs_dir: "docs".into(),
            last_updated: LastUpdated::Off,
            smooth_scroll: false,
            sidebar_depth: MAX_SIDEBAR_DEPTH,
            nav: Vec::new(),
            sidebar: SidebarSetting::default(),
        }
    }
}

impl ThemeConfig {
    /// Validate theme configuration.
    ///
    /// # Checks
    /// - nav entry shapes
    /// - sidebar keys are unique
    /// - `sidebar_depth` is within what the framework renders
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_nav(&self.nav, &Self::FIELDS.nav, diag);
        validate_sidebar(&self.sidebar, &Self::FIELDS.sidebar, diag);

        if self.sidebar_depth > MAX_SIDEBAR_DEPTH {
            diag.warn_with_hint(
                Self::FIELDS.sidebar_depth,
                format!(
                    "sidebar depth {} is deeper than the theme renders",
                    self.sidebar_depth
                ),
                format!("use a value between 0 and {MAX_SIDEBAR_DEPTH}"),
            );
        }

        if self.docs_dir.trim().is_empty() {
            diag.error(Self::FIELDS.docs_dir, "docs directory must not be empty");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_theme_defaults() {
        let config = test_parse_config("");
        let theme = &config.theme;
        assert_eq!(theme.logo, None);
        assert!(!theme.edit_links);
        assert_eq!(theme.docs_dir, "docs");
        assert_eq!(theme.last_updated, LastUpdated::Off);
        assert_eq!(theme.sidebar_depth, 2);
        assert!(theme.nav.is_empty());
        assert!(!theme.sidebar.is_auto());
    }

    #[test]
    fn test_theme_custom() {
        let config = test_parse_config(
            r#"[theme]
logo = "/logo.png"
edit_links = true
docs_dir = "site"
last_updated = "Updated"
smooth_scroll = true
sidebar_depth = 1"#,
        );
        let theme = &config.theme;
        assert_eq!(theme.logo.as_deref(), Some("/logo.png"));
        assert!(theme.edit_links);
        assert_eq!(theme.docs_dir, "site");
        assert_eq!(theme.last_updated.label(), Some("Updated"));
        assert!(theme.smooth_scroll);
        assert_eq!(theme.sidebar_depth, 1);
    }

    #[test]
    fn test_sidebar_depth_warning() {
        let theme = ThemeConfig {
            sidebar_depth: 4,
            ..ThemeConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        theme.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].field, ThemeConfig::FIELDS.sidebar_depth);
    }

    #[test]
    fn test_field_paths() {
        assert_eq!(ThemeConfig::FIELDS.nav.as_str(), "theme.nav");
        assert_eq!(ThemeConfig::FIELDS.sidebar.as_str(), "theme.sidebar");
    }
}
