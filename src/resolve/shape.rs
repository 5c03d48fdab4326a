//! Shape checks for builder output.
//!
//! Builders are arbitrary code, so their groups are checked after they run,
//! whatever their source.

use crate::config::{ConfigDiagnostics, FieldPath, SidebarGroup};
use rustc_hash::FxHashSet;

/// Check a sidebar key and the groups its builder produced.
///
/// # Checks
/// - key starts and ends with `/`
/// - every group has a title
/// - child slugs are non-empty, relative, and free of `..`
/// - a slug listed twice in one section (warning)
pub fn check_section(
    key: &str,
    groups: &[SidebarGroup],
    field: &FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    let section_field = field.key(key);

    if !key.starts_with('/') || !key.ends_with('/') {
        diag.error_with_hint(
            section_field.clone(),
            format!("sidebar key '{key}' must start and end with '/'"),
            format!("use \"/{}/\"", key.trim_matches('/')),
        );
    }

    let mut seen = FxHashSet::default();
    for (i, group) in groups.iter().enumerate() {
        let group_field = section_field.at(i);

        if group.title.trim().is_empty() {
            diag.error(
                group_field.join("title"),
                format!("a group in sidebar section '{key}' has no title"),
            );
        }

        for (j, child) in group.children.iter().enumerate() {
            let child_field = group_field.join("children").at(j);
            check_child(key, child, &child_field, diag);

            if !child.is_empty() && !seen.insert(child.as_str()) {
                diag.warn(
                    child_field,
                    format!("page '{child}' is listed more than once under '{key}'"),
                );
            }
        }
    }
}

fn check_child(key: &str, child: &str, field: &FieldPath, diag: &mut ConfigDiagnostics) {
    if child.trim().is_empty() {
        diag.error(field.clone(), format!("empty page reference under '{key}'"));
    } else if child.starts_with('/') {
        diag.error_with_hint(
            field.clone(),
            format!("page '{child}' must be relative to the section key"),
            format!("drop the leading '/': \"{}\"", child.trim_start_matches('/')),
        );
    } else if child.split('/').any(|segment| segment == "..") {
        diag.error(
            field.clone(),
            format!("page '{child}' must not leave its section with '..'"),
        );
    }
}
