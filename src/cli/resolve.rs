//! `docnav resolve`: print the resolved site config.

use super::check::load_and_resolve;
use crate::config::print_warnings;
use crate::log;
use crate::resolve::{OutputFormat, render};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Resolve the config found from `cwd` and write it to `output` or stdout.
pub fn resolve_site(
    cwd: &Path,
    config_name: &Path,
    format: OutputFormat,
    output: Option<&Path>,
    strict: bool,
) -> Result<()> {
    let (resolution, warnings) = load_and_resolve(cwd, config_name, strict)?;
    print_warnings(&warnings);

    let rendered = render(&resolution.config, format)?;
    match output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            log!("resolve"; "wrote {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_FILE;

    #[test]
    fn test_resolve_to_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"title = "Blog"
base = "/blog/"

[[theme.nav]]
text = "Git"
link = "/Git/"

[[theme.nav]]
text = "Interview"
link = "/interview/"
draft = true

[[theme.sidebar]]
key = "/Git/"
groups = [{ title = "Git", children = [] }]

[[theme.sidebar]]
key = "/interview/"
draft = true
groups = [{ title = "Interview", children = ["interview/js"] }]
"#,
        )
        .unwrap();

        let out = dir.path().join("config.js");
        resolve_site(
            dir.path(),
            Path::new(CONFIG_FILE),
            OutputFormat::Js,
            Some(&out),
            true,
        )
        .unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert!(written.starts_with("module.exports = {"));
        assert!(written.contains("\"base\": \"/blog/\""));
        assert!(written.contains("\"/Git/\""));
        assert!(!written.contains("interview"));
    }

    #[test]
    fn test_resolve_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let result = resolve_site(
            dir.path(),
            &dir.path().join(CONFIG_FILE),
            OutputFormat::Json,
            None,
            false,
        );
        assert!(result.is_err());
    }
}
