//! Configuration section definitions.
//!
//! Each module corresponds to a section in `docnav.toml`:
//!
//! | Module     | TOML Section   | Purpose                               |
//! |------------|----------------|---------------------------------------|
//! | `markdown` | `[markdown]`   | Markdown renderer options             |
//! | `theme`    | `[theme]`      | Theme flags, header nav, sidebar      |
//!
//! Top-level scalars (`base`, `dest`, `title`, `description`) live on
//! `SiteConfig` itself.

mod markdown;
pub mod theme;

pub use markdown::MarkdownConfig;
pub use theme::{
    LastUpdated, NavDropdown, NavEntry, NavLink, SidebarGroup, SidebarSection, SidebarSetting,
    ThemeConfig,
};
