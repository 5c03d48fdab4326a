//! `[[theme.nav]]` header navigation entries.
//!
//! # Example
//!
//! ```toml
//! [[theme.nav]]
//! text = "Frontend"
//! link = "/accumulate/"
//!
//! [[theme.nav]]
//! text = "Languages"
//! aria_label = "Language menu"
//! items = [
//!     { text = "CSS", link = "/CSS/" },
//!     { text = "TypeScript", link = "/TypeScript/" },
//! ]
//!
//! [[theme.nav]]
//! text = "Interview"
//! link = "/interview/"
//! draft = true
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// A header navigation entry: a direct link or a one-level dropdown.
///
/// Dropdown items are [`NavLink`]s, so a dropdown can never nest another
/// dropdown. Both shapes reject unknown keys: an entry carrying both `link`
/// and `items` matches neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavEntry {
    Dropdown(NavDropdown),
    Link(NavLink),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub text: String,
    pub link: String,

    /// Kept in the config but left out of the published nav.
    #[serde(default, skip_serializing)]
    pub draft: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all(serialize = "camelCase"))]
pub struct NavDropdown {
    pub text: String,

    /// Accessible label for the menu button; falls back to `text`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,

    pub items: Vec<NavLink>,

    #[serde(default, skip_serializing)]
    pub draft: bool,
}

impl NavLink {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
            draft: false,
        }
    }

    /// Mark this link as an unpublished draft.
    pub fn draft(mut self) -> Self {
        self.draft = true;
        self
    }
}

impl NavDropdown {
    pub fn new(text: impl Into<String>, items: impl IntoIterator<Item = NavLink>) -> Self {
        Self {
            text: text.into(),
            aria_label: None,
            items: items.into_iter().collect(),
            draft: false,
        }
    }

    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn draft(mut self) -> Self {
        self.draft = true;
        self
    }
}

impl From<NavLink> for NavEntry {
    fn from(link: NavLink) -> Self {
        Self::Link(link)
    }
}

impl From<NavDropdown> for NavEntry {
    fn from(dropdown: NavDropdown) -> Self {
        Self::Dropdown(dropdown)
    }
}

impl NavEntry {
    pub fn is_draft(&self) -> bool {
        match self {
            Self::Link(link) => link.draft,
            Self::Dropdown(dropdown) => dropdown.draft,
        }
    }
}

/// Check the shape of every nav entry.
///
/// # Checks
/// - `text` and `link` must not be empty
/// - dropdowns must list at least one item
pub fn validate_nav(nav: &[NavEntry], field: &FieldPath, diag: &mut ConfigDiagnostics) {
    for (i, entry) in nav.iter().enumerate() {
        let entry_field = field.at(i);
        match entry {
            NavEntry::Link(link) => validate_link(link, &entry_field, diag),
            NavEntry::Dropdown(dropdown) => {
                check_text(&dropdown.text, &entry_field, diag);
                if dropdown.items.is_empty() {
                    diag.error_with_hint(
                        entry_field.join("items"),
                        format!("dropdown '{}' has no items", dropdown.text),
                        "add items or replace the dropdown with a direct link",
                    );
                }
                let items_field = entry_field.join("items");
                for (j, item) in dropdown.items.iter().enumerate() {
                    validate_link(item, &items_field.at(j), diag);
                }
            }
        }
    }
}

fn validate_link(link: &NavLink, field: &FieldPath, diag: &mut ConfigDiagnostics) {
    check_text(&link.text, field, diag);
    if link.link.trim().is_empty() {
        diag.error_with_hint(
            field.join("link"),
            format!("nav entry '{}' has an empty link", link.text),
            "use a path such as \"/guide/\" or a full URL",
        );
    }
}

fn check_text(text: &str, field: &FieldPath, diag: &mut ConfigDiagnostics) {
    if text.trim().is_empty() {
        diag.error(field.join("text"), "nav entry has no text");
    }
}
