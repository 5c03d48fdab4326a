//! Site configuration management for `docnav.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── markdown   # [markdown]
//! │   └── theme      # [theme], [[theme.nav]], [[theme.sidebar]]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── util.rs        # config discovery, link classification
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section             | Purpose                                       |
//! |---------------------|-----------------------------------------------|
//! | (top level)         | `base`, `dest`, `title`, `description`        |
//! | `[markdown]`        | Markdown renderer options                     |
//! | `[theme]`           | Logo, edit links, last updated, sidebar depth |
//! | `[[theme.nav]]`     | Header navigation                             |
//! | `[[theme.sidebar]]` | Sidebar sections keyed by path prefix         |

pub mod section;
pub mod types;
pub mod util;

pub use section::{
    LastUpdated, MarkdownConfig, NavDropdown, NavEntry, NavLink, SidebarGroup, SidebarSection,
    SidebarSetting, ThemeConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, print_warnings};

use types::config_fields;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config filename
pub const CONFIG_FILE: &str = "docnav.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docnav.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// URL path the site is served under.
    pub base: String,

    /// Output directory of the site build.
    pub dest: String,

    pub title: String,

    pub description: String,

    /// Markdown renderer options
    pub markdown: MarkdownConfig,

    /// Theme options, header nav and sidebar
    pub theme: ThemeConfig,
}

config_fields!(SiteConfig => SiteConfigFields { base, dest, title, description });

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            base: "/".into(),
            dest: "dist".into(),
            title: String::new(),
            description: String::new(),
            markdown: MarkdownConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

/// A parsed config plus the warnings found while loading it.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: SiteConfig,
    pub warnings: Vec<ConfigDiagnostic>,
}

impl SiteConfig {
    /// Locate, parse and validate the config file.
    ///
    /// Relative `config_name`s are searched upward from `cwd`.
    /// With `strict`, warnings (including unknown fields) fail the load.
    pub fn load(cwd: &Path, config_name: &Path, strict: bool) -> Result<LoadedConfig> {
        let path = util::find_config_file(cwd, config_name)
            .ok_or_else(|| ConfigError::NotFound(config_name.to_path_buf()))?;
        crate::debug!("config"; "using {}", path.display());

        let content =
            fs::read_to_string(&path).map_err(|err| ConfigError::Io(path.clone(), err))?;
        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        config.config_path = path;

        let mut diag = ConfigDiagnostics::new();
        for field in &ignored {
            diag.warn_with_hint(
                FieldPath::owned(field.clone()),
                "unknown field, ignored",
                "check the spelling or remove it",
            );
        }
        config.validate_into(&mut diag);
        if strict {
            diag.escalate_warnings();
        }

        let warnings = diag.into_warnings().map_err(ConfigError::Diagnostics)?;
        Ok(LoadedConfig { config, warnings })
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Directory holding the config file.
    pub fn root(&self) -> &Path {
        self.config_path.parent().unwrap_or(Path::new(""))
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the declared configuration.
    ///
    /// Returns the warnings when there are no errors.
    pub fn validate(&self) -> Result<Vec<ConfigDiagnostic>> {
        let mut diag = ConfigDiagnostics::new();
        self.validate_into(&mut diag);
        Ok(diag.into_warnings().map_err(ConfigError::Diagnostics)?)
    }

    /// Run every check, collecting into `diag`.
    ///
    /// # Checks
    /// - `base` starts and ends with `/`
    /// - `dest` is not empty
    /// - `title` is set (warning)
    /// - `[theme]` checks
    pub fn validate_into(&self, diag: &mut ConfigDiagnostics) {
        if !self.base.starts_with('/') || !self.base.ends_with('/') {
            diag.error_with_hint(
                Self::FIELDS.base,
                format!("base '{}' must start and end with '/'", self.base),
                "use \"/\" or a sub path such as \"/blog/\"",
            );
        }

        if self.dest.trim().is_empty() {
            diag.error(Self::FIELDS.dest, "output directory must not be empty");
        }

        if self.title.trim().is_empty() {
            diag.warn_with_hint(
                Self::FIELDS.title,
                "site title is empty",
                "set a title, it is shown in the header and the browser tab",
            );
        }

        self.theme.validate(diag);
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with a minimal title.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("title = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
