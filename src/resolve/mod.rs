//! Sidebar resolution.
//!
//! Turns a declared [`SiteConfig`] plus a set of sidebar builders into the
//! [`ResolvedConfig`] the site framework consumes.
//!
//! # Pipeline
//!
//! ```text
//! SidebarBuilders ─► run builders in order ─► shape checks ─┐
//!                                                            ├─► ResolvedConfig
//! theme.nav ───────► drop drafts ──────────► link checks ───┘
//! ```
//!
//! Shape errors fail the resolution. Link mismatches are warnings.
//! Resolution is pure: no I/O, and the same input yields the same output.

mod builder;
mod links;
mod model;
mod output;
mod shape;

pub use builder::{SectionBuilder, SectionStatus, SidebarBuilders, SidebarSource, StaticSection};
pub use links::{PublishedLink, check_links, publish_nav, published_links};
pub use model::{ResolvedConfig, ResolvedSection, ResolvedSidebar, ResolvedTheme};
pub use output::{OutputFormat, render};
pub use shape::check_section;

use crate::config::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, SiteConfig, ThemeConfig};

/// A resolved config plus the warnings found along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub config: ResolvedConfig,
    pub warnings: Vec<ConfigDiagnostic>,
}

/// One evaluated builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatedSection {
    pub section: ResolvedSection,
    pub status: SectionStatus,
}

/// Run every builder once, in registration order.
///
/// Each builder's groups are embedded verbatim under its key, drafts
/// included.
pub fn evaluate(builders: &SidebarBuilders) -> Vec<EvaluatedSection> {
    builders
        .entries()
        .iter()
        .map(|entry| {
            let groups = entry.builder.build();
            crate::debug!("resolve"; "{} -> {} group(s)", entry.key, groups.len());
            EvaluatedSection {
                section: ResolvedSection {
                    key: entry.key.clone(),
                    groups,
                },
                status: entry.status,
            }
        })
        .collect()
}

/// Published sidebar sections, in registration order.
pub fn resolve_sidebar(builders: &SidebarBuilders) -> Vec<ResolvedSection> {
    evaluate(builders)
        .into_iter()
        .filter(|evaluated| !evaluated.status.is_draft())
        .map(|evaluated| evaluated.section)
        .collect()
}

/// Resolve the sidebar declared in the config file.
pub fn resolve_declared(site: &SiteConfig, strict: bool) -> Result<Resolution, ConfigError> {
    let source = SidebarSource::from_setting(&site.theme.sidebar)?;
    resolve_config(site, &source, strict)
}

/// Resolve `site` with the sidebar produced by `source`.
///
/// Fails with [`ConfigError::Diagnostics`] on malformed builder output,
/// or on any warning when `strict` is set.
pub fn resolve_config(
    site: &SiteConfig,
    source: &SidebarSource,
    strict: bool,
) -> Result<Resolution, ConfigError> {
    let mut diag = ConfigDiagnostics::new();
    let sidebar_field = ThemeConfig::FIELDS.sidebar;
    let nav_field = ThemeConfig::FIELDS.nav;

    let (sidebar, drafts) = match source {
        SidebarSource::Auto => (ResolvedSidebar::Auto, Vec::new()),
        SidebarSource::Builders(builders) => {
            let evaluated = evaluate(builders);
            for item in &evaluated {
                check_section(
                    &item.section.key,
                    &item.section.groups,
                    &sidebar_field,
                    &mut diag,
                );
            }

            let keys: Vec<_> = evaluated
                .iter()
                .map(|item| (item.section.key.as_str(), item.status))
                .collect();
            let links = published_links(&site.theme.nav, &nav_field);
            check_links(&links, &keys, &sidebar_field, &mut diag);

            split_drafts(evaluated)
        }
    };

    let nav = publish_nav(&site.theme.nav, &nav_field, &mut diag);

    if strict {
        diag.escalate_warnings();
    }
    let warnings = diag.into_warnings().map_err(ConfigError::Diagnostics)?;

    let theme = &site.theme;
    let config = ResolvedConfig {
        base: site.base.clone(),
        dest: site.dest.clone(),
        title: site.title.clone(),
        description: site.description.clone(),
        markdown: site.markdown.clone(),
        theme: ResolvedTheme {
            logo: theme.logo.clone(),
            edit_links: theme.edit_links,
            docs_dir: theme.docs_dir.clone(),
            last_updated: theme.last_updated.clone(),
            smooth_scroll: theme.smooth_scroll,
            sidebar_depth: theme.sidebar_depth,
            nav,
            sidebar,
            drafts,
        },
    };

    Ok(Resolution { config, warnings })
}

fn split_drafts(evaluated: Vec<EvaluatedSection>) -> (ResolvedSidebar, Vec<String>) {
    let mut published = Vec::new();
    let mut drafts = Vec::new();
    for item in evaluated {
        if item.status.is_draft() {
            drafts.push(item.section.key);
        } else {
            published.push(item.section);
        }
    }
    (ResolvedSidebar::Sections(published), drafts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NavDropdown, NavEntry, NavLink, SidebarGroup, test_parse_config};
    use std::cell::Cell;
    use std::rc::Rc;

    fn get_css() -> Vec<SidebarGroup> {
        vec![SidebarGroup::new("CSS", Vec::<String>::new())]
    }

    fn get_git() -> Vec<SidebarGroup> {
        vec![SidebarGroup::new("Git", Vec::<String>::new())]
    }

    fn get_typescript() -> Vec<SidebarGroup> {
        vec![SidebarGroup::new(
            "TypeScript",
            ["TypeScript/TypeScript", "TypeScript/TypeScriptDeep"],
        )]
    }

    fn site_with_nav(nav: Vec<NavEntry>) -> SiteConfig {
        let mut site = test_parse_config("");
        site.theme.nav = nav;
        site
    }

    #[test]
    fn test_builder_substitution_in_declared_order() {
        let mut builders = SidebarBuilders::new();
        builders.insert("/CSS/", get_css).unwrap();
        builders.insert("/Git/", get_git).unwrap();

        let sidebar = resolve_sidebar(&builders);
        assert_eq!(
            sidebar,
            vec![
                ResolvedSection {
                    key: "/CSS/".into(),
                    groups: get_css(),
                },
                ResolvedSection {
                    key: "/Git/".into(),
                    groups: get_git(),
                },
            ]
        );
    }

    #[test]
    fn test_children_preserved_verbatim() {
        let mut builders = SidebarBuilders::new();
        builders.insert("/TypeScript/", get_typescript).unwrap();

        let sidebar = resolve_sidebar(&builders);
        assert_eq!(
            sidebar[0].groups[0].children,
            vec!["TypeScript/TypeScript", "TypeScript/TypeScriptDeep"]
        );
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let mut builders = SidebarBuilders::new();
        builders.insert("/TypeScript/", get_typescript).unwrap();
        builders.insert("/CSS/", get_css).unwrap();
        builders.insert("/Git/", get_git).unwrap();
        let site = site_with_nav(vec![
            NavLink::new("TypeScript", "/TypeScript/").into(),
            NavDropdown::new(
                "More",
                [NavLink::new("CSS", "/CSS/"), NavLink::new("Git", "/Git/")],
            )
            .into(),
        ]);
        let source = SidebarSource::from(builders);

        let first = resolve_config(&site, &source, false).unwrap();
        let second = resolve_config(&site, &source, false).unwrap();
        assert_eq!(first, second);
        assert!(first.warnings.is_empty());
        assert_eq!(
            serde_json::to_string(&first.config).unwrap(),
            serde_json::to_string(&second.config).unwrap()
        );
    }

    #[test]
    fn test_each_builder_runs_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut builders = SidebarBuilders::new();
        builders
            .insert("/CSS/", move || {
                counter.set(counter.get() + 1);
                get_css()
            })
            .unwrap();

        let site = site_with_nav(vec![NavLink::new("CSS", "/CSS/").into()]);
        resolve_config(&site, &builders.into(), false).unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_drafts_excluded_from_output() {
        let mut builders = SidebarBuilders::new();
        builders.insert("/CSS/", get_css).unwrap();
        builders
            .insert_draft("/interview/", || {
                vec![SidebarGroup::new("Interview", ["interview/js"])]
            })
            .unwrap();
        let site = site_with_nav(vec![
            NavLink::new("CSS", "/CSS/").into(),
            NavLink::new("Interview", "/interview/").draft().into(),
        ]);

        let resolution = resolve_config(&site, &builders.into(), false).unwrap();
        let theme = &resolution.config.theme;
        assert_eq!(theme.sidebar.keys().collect::<Vec<_>>(), vec!["/CSS/"]);
        assert_eq!(theme.drafts, vec!["/interview/"]);
        assert_eq!(theme.nav, vec![NavEntry::from(NavLink::new("CSS", "/CSS/"))]);
        assert!(resolution.warnings.is_empty());
    }

    #[test]
    fn test_malformed_draft_still_fails() {
        let mut builders = SidebarBuilders::new();
        builders
            .insert_draft("/interview/", || vec![SidebarGroup::new("", ["js"])])
            .unwrap();
        let site = site_with_nav(Vec::new());

        let err = resolve_config(&site, &builders.into(), false).unwrap_err();
        let ConfigError::Diagnostics(diag) = err else {
            panic!("expected diagnostics, got {err:?}");
        };
        assert_eq!(
            diag.errors()[0].field.as_str(),
            "theme.sidebar.\"/interview/\"[0].title"
        );
    }

    #[test]
    fn test_dangling_link_is_warning_unless_strict() {
        let mut builders = SidebarBuilders::new();
        builders.insert("/CSS/", get_css).unwrap();
        let site = site_with_nav(vec![
            NavLink::new("CSS", "/CSS/").into(),
            NavLink::new("Algorithm", "/algorithm/").into(),
        ]);
        let source = SidebarSource::from(builders);

        let resolution = resolve_config(&site, &source, false).unwrap();
        assert_eq!(resolution.warnings.len(), 1);
        assert_eq!(resolution.warnings[0].field.as_str(), "theme.nav[1].link");
        // the link stays in the published nav
        assert_eq!(resolution.config.theme.nav.len(), 2);

        assert!(matches!(
            resolve_config(&site, &source, true),
            Err(ConfigError::Diagnostics(_))
        ));
    }

    #[test]
    fn test_auto_sidebar_skips_link_checks() {
        let site = site_with_nav(vec![
            NavLink::new("Frontend", "/accumulate/").into(),
            NavLink::new("Algorithm", "/algorithm/").into(),
        ]);
        let resolution = resolve_config(&site, &SidebarSource::Auto, true).unwrap();
        assert_eq!(resolution.config.theme.sidebar, ResolvedSidebar::Auto);
        assert!(resolution.warnings.is_empty());
    }

    #[test]
    fn test_resolve_declared() {
        let site = test_parse_config(
            r#"base = "/"
dest = "dist"

[[theme.nav]]
text = "CSS"
link = "/CSS/"

[[theme.nav]]
text = "GitHub"
link = "https://github.com/Chenyuanyuan299"

[[theme.sidebar]]
key = "/CSS/"
groups = [{ title = "CSS", children = ["CSS/flex"] }]"#,
        );
        let resolution = resolve_declared(&site, true).unwrap();
        assert_eq!(
            resolution.config.theme.sidebar.get("/CSS/"),
            Some(&[SidebarGroup::new("CSS", ["CSS/flex"])][..])
        );
    }
}
