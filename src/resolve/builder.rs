//! Sidebar section builders and the ordered registry that holds them.
//!
//! A builder is anything that produces the groups of one sidebar section:
//! a plain `fn() -> Vec<SidebarGroup>`, a closure, or a [`StaticSection`]
//! declared in `docnav.toml`.
//!
//! # Example
//!
//! ```ignore
//! fn get_css() -> Vec<SidebarGroup> {
//!     vec![SidebarGroup::new("CSS", ["CSS/flex", "CSS/grid"])]
//! }
//!
//! let mut builders = SidebarBuilders::new();
//! builders.insert("/CSS/", get_css)?;
//! builders.insert_draft("/interview/", || vec![SidebarGroup::new("Interview", ["interview/js"])])?;
//! ```

use crate::config::{ConfigError, SidebarGroup, SidebarSection, SidebarSetting};

/// Produces the ordered groups of one sidebar section.
pub trait SectionBuilder {
    fn build(&self) -> Vec<SidebarGroup>;
}

impl<F> SectionBuilder for F
where
    F: Fn() -> Vec<SidebarGroup>,
{
    fn build(&self) -> Vec<SidebarGroup> {
        self()
    }
}

/// Groups declared literally in the config file.
#[derive(Debug, Clone)]
pub struct StaticSection(pub Vec<SidebarGroup>);

impl SectionBuilder for StaticSection {
    fn build(&self) -> Vec<SidebarGroup> {
        self.0.clone()
    }
}

/// Publication state of a sidebar section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionStatus {
    #[default]
    Published,
    /// Evaluated and checked, but left out of the resolved sidebar.
    Draft,
}

impl SectionStatus {
    pub const fn from_draft(draft: bool) -> Self {
        if draft { Self::Draft } else { Self::Published }
    }

    pub const fn is_draft(self) -> bool {
        matches!(self, Self::Draft)
    }
}

pub(super) struct BuilderEntry {
    pub key: String,
    pub status: SectionStatus,
    pub builder: Box<dyn SectionBuilder>,
}

/// Sidebar builders keyed by URL path prefix, in registration order.
#[derive(Default)]
pub struct SidebarBuilders {
    entries: Vec<BuilderEntry>,
}

impl SidebarBuilders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from sections declared in the config file.
    pub fn from_sections(sections: &[SidebarSection]) -> Result<Self, ConfigError> {
        let mut builders = Self::new();
        for section in sections {
            builders.register(
                section.key.clone(),
                SectionStatus::from_draft(section.draft),
                StaticSection(section.groups.clone()),
            )?;
        }
        Ok(builders)
    }

    /// Register a published section.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        builder: impl SectionBuilder + 'static,
    ) -> Result<(), ConfigError> {
        self.register(key.into(), SectionStatus::Published, builder)
    }

    /// Register a draft section.
    pub fn insert_draft(
        &mut self,
        key: impl Into<String>,
        builder: impl SectionBuilder + 'static,
    ) -> Result<(), ConfigError> {
        self.register(key.into(), SectionStatus::Draft, builder)
    }

    /// Register a section, rejecting a key that is already present.
    pub fn register(
        &mut self,
        key: String,
        status: SectionStatus,
        builder: impl SectionBuilder + 'static,
    ) -> Result<(), ConfigError> {
        if self.contains(&key) {
            return Err(ConfigError::DuplicateSection(key));
        }
        self.entries.push(BuilderEntry {
            key,
            status,
            builder: Box::new(builder),
        });
        Ok(())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|entry| entry.key == key)
    }

    /// Registered keys, in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(super) fn entries(&self) -> &[BuilderEntry] {
        &self.entries
    }
}

impl std::fmt::Debug for SidebarBuilders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| (&e.key, e.status)))
            .finish()
    }
}

/// Where the resolved sidebar comes from.
#[derive(Debug)]
pub enum SidebarSource {
    /// The framework derives the sidebar from page headings.
    Auto,
    Builders(SidebarBuilders),
}

impl SidebarSource {
    /// Builders for the sidebar declared in the config file.
    pub fn from_setting(setting: &SidebarSetting) -> Result<Self, ConfigError> {
        match setting {
            SidebarSetting::Auto(_) => Ok(Self::Auto),
            SidebarSetting::Sections(sections) => {
                SidebarBuilders::from_sections(sections).map(Self::Builders)
            }
        }
    }
}

impl From<SidebarBuilders> for SidebarSource {
    fn from(builders: SidebarBuilders) -> Self {
        Self::Builders(builders)
    }
}
