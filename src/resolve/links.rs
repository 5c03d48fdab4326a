//! Nav/sidebar correspondence.
//!
//! Every site-relative nav link should land under some sidebar key, and
//! every published sidebar key should be reachable from the nav. Gaps are
//! reported as warnings: the site still builds, but pages show no sidebar
//! or sections cannot be reached from the header.

use super::SectionStatus;
use crate::config::{ConfigDiagnostics, FieldPath, NavDropdown, NavEntry, util::link_path};

/// A nav link that survives draft filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedLink<'a> {
    pub field: FieldPath,
    pub text: &'a str,
    pub link: &'a str,
}

/// Published links, dropdown items included.
pub fn published_links<'a>(nav: &'a [NavEntry], field: &FieldPath) -> Vec<PublishedLink<'a>> {
    let mut links = Vec::new();
    for (i, entry) in nav.iter().enumerate() {
        if entry.is_draft() {
            continue;
        }
        let entry_field = field.at(i);
        match entry {
            NavEntry::Link(link) => links.push(PublishedLink {
                field: entry_field.join("link"),
                text: &link.text,
                link: &link.link,
            }),
            NavEntry::Dropdown(dropdown) => {
                let items_field = entry_field.join("items");
                for (j, item) in dropdown.items.iter().enumerate() {
                    if item.draft {
                        continue;
                    }
                    links.push(PublishedLink {
                        field: items_field.at(j).join("link"),
                        text: &item.text,
                        link: &item.link,
                    });
                }
            }
        }
    }
    links
}

/// Copy of the nav without drafts.
///
/// A dropdown left with no published items is dropped with a warning.
/// Dropdowns without an aria label get their text as label.
pub fn publish_nav(
    nav: &[NavEntry],
    field: &FieldPath,
    diag: &mut ConfigDiagnostics,
) -> Vec<NavEntry> {
    let mut published = Vec::with_capacity(nav.len());
    for (i, entry) in nav.iter().enumerate() {
        match entry {
            _ if entry.is_draft() => {}
            NavEntry::Link(link) => published.push(NavEntry::Link(link.clone())),
            NavEntry::Dropdown(dropdown) => {
                let items: Vec<_> = dropdown
                    .items
                    .iter()
                    .filter(|item| !item.draft)
                    .cloned()
                    .collect();
                if items.is_empty() {
                    diag.warn_with_hint(
                        field.at(i),
                        format!("dropdown '{}' has no published items", dropdown.text),
                        "publish one of its items or mark the dropdown as draft",
                    );
                    continue;
                }
                published.push(NavEntry::Dropdown(NavDropdown {
                    text: dropdown.text.clone(),
                    aria_label: Some(
                        dropdown
                            .aria_label
                            .clone()
                            .unwrap_or_else(|| dropdown.text.clone()),
                    ),
                    items,
                    draft: false,
                }));
            }
        }
    }
    published
}

/// Report nav links without a sidebar section and sections without a nav link.
///
/// External links and the site root `/` are never expected to have a
/// section. Draft sections do not need a nav link.
pub fn check_links(
    links: &[PublishedLink<'_>],
    sections: &[(&str, SectionStatus)],
    sidebar_field: &FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    let paths: Vec<(&PublishedLink<'_>, String)> = links
        .iter()
        .filter_map(|link| link_path(link.link).map(|path| (link, normalize(path))))
        .collect();

    for (link, path) in &paths {
        if path == "/" {
            continue;
        }
        let (published, drafts): (Vec<_>, Vec<_>) = sections
            .iter()
            .filter(|(key, _)| covers(key, path))
            .partition(|(_, status)| !status.is_draft());

        if !published.is_empty() {
            continue;
        }
        if let Some((key, _)) = drafts.first() {
            diag.warn_with_hint(
                link.field.clone(),
                format!(
                    "nav link '{}' ({}) only reaches the draft section '{key}'",
                    link.text, link.link
                ),
                "publish the section or mark the nav entry as draft",
            );
        } else {
            diag.warn_with_hint(
                link.field.clone(),
                format!(
                    "nav link '{}' ({}) has no sidebar section",
                    link.text, link.link
                ),
                format!("add a sidebar section with key = \"{}\"", suggest_key(path)),
            );
        }
    }

    for (key, status) in sections {
        if status.is_draft() {
            continue;
        }
        if !paths.iter().any(|(_, path)| covers(key, path)) {
            diag.warn_with_hint(
                sidebar_field.key(key),
                format!("sidebar section '{key}' is not reachable from the nav"),
                "add a nav entry linking under it or mark the section as draft",
            );
        }
    }
}

/// `key` covers `path` when `path` lies under it; `/CSS` counts as `/CSS/`.
fn covers(key: &str, path: &str) -> bool {
    path.starts_with(key) || (path.len() + 1 == key.len() && key.starts_with(path))
}

/// Links without a leading slash are taken relative to the site root.
fn normalize(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// First path segment as a sidebar key: `/CSS/flex` -> `/CSS/`.
fn suggest_key(path: &str) -> String {
    let first = path
        .trim_start_matches('/')
        .split('/')
        .next()
        .unwrap_or_default();
    format!("/{first}/")
}
