//! `docnav check`: validate without producing output.

use crate::config::{ConfigDiagnostic, SiteConfig, print_warnings};
use crate::log;
use crate::resolve::{Resolution, resolve_declared};
use crate::utils::plural_count;
use anyhow::Result;
use std::path::Path;

/// Load the config found from `cwd` and resolve its declared sidebar.
///
/// Returns the resolution and every warning from loading and resolving.
pub fn load_and_resolve(
    cwd: &Path,
    config_name: &Path,
    strict: bool,
) -> Result<(Resolution, Vec<ConfigDiagnostic>)> {
    let loaded = SiteConfig::load(cwd, config_name, strict)?;
    let resolution = resolve_declared(&loaded.config, strict)?;

    let mut warnings = loaded.warnings;
    warnings.extend(resolution.warnings.iter().cloned());
    Ok((resolution, warnings))
}

/// Run every check and report a summary.
pub fn check_site(cwd: &Path, config_name: &Path, strict: bool) -> Result<()> {
    let (resolution, warnings) = load_and_resolve(cwd, config_name, strict)?;
    print_warnings(&warnings);

    let theme = &resolution.config.theme;
    let sidebar = if theme.sidebar.is_auto() {
        "auto sidebar".to_string()
    } else {
        plural_count(theme.sidebar.sections().len(), "sidebar section")
    };
    log!(
        "check";
        "{}, {}, {} ({})",
        plural_count(theme.nav.len(), "nav item"),
        sidebar,
        plural_count(theme.drafts.len(), "draft"),
        plural_count(warnings.len(), "warning")
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CONFIG_FILE, ConfigError};
    use std::fs;

    const SITE: &str = r#"title = "Blog"

[[theme.nav]]
text = "CSS"
link = "/CSS/"

[[theme.nav]]
text = "Algorithm"
link = "/algorithm/"

[[theme.sidebar]]
key = "/CSS/"
groups = [{ title = "CSS", children = ["CSS/flex"] }]
"#;

    fn write_site(content: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), content).unwrap();
        dir
    }

    #[test]
    fn test_warnings_collected() {
        let dir = write_site(SITE);
        let (resolution, warnings) =
            load_and_resolve(dir.path(), Path::new(CONFIG_FILE), false).unwrap();
        assert_eq!(resolution.config.theme.sidebar.sections().len(), 1);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field.as_str(), "theme.nav[1].link");
    }

    #[test]
    fn test_strict_fails_on_warning() {
        let dir = write_site(SITE);
        let err = check_site(dir.path(), Path::new(CONFIG_FILE), true).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Diagnostics(_))
        ));
    }

    #[test]
    fn test_duplicate_sidebar_key_fails() {
        let dir = write_site(
            r#"title = "Blog"

[[theme.sidebar]]
key = "/Git/"

[[theme.sidebar]]
key = "/Git/"
"#,
        );
        assert!(check_site(dir.path(), Path::new(CONFIG_FILE), false).is_err());
    }
}
