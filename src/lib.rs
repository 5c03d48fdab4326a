//! docnav - declarative nav and sidebar configuration for documentation sites.
//!
//! A site declares its header nav and sidebar in `docnav.toml`. Sidebar
//! sections come from builders, each returning the ordered groups for one
//! path prefix. Resolution runs every builder once, checks the result, and
//! produces the record the site framework reads.
//!
//! ```no_run
//! use docnav::config::{SidebarGroup, SiteConfig};
//! use docnav::resolve::{OutputFormat, SidebarBuilders, render, resolve_config};
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let site = SiteConfig::load(Path::new("."), Path::new("docnav.toml"), false)?.config;
//!
//! let mut builders = SidebarBuilders::new();
//! builders.insert("/Git/", || vec![SidebarGroup::new("Git", ["Git/branch"])])?;
//!
//! let resolution = resolve_config(&site, &builders.into(), false)?;
//! print!("{}", render(&resolution.config, OutputFormat::Json)?);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod logger;
pub mod resolve;
pub mod utils;

pub use config::{ConfigError, SiteConfig};
pub use resolve::{Resolution, SidebarBuilders, SidebarSource, resolve_config, resolve_sidebar};
