//! `docnav init`: write a starter config.

use crate::config::CONFIG_FILE;
use crate::log;
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

const SECTIONS: &str = r#"[markdown]
line_numbers = false

[theme]
# logo = "/logo.png"
edit_links = true
docs_dir = "docs"
# `true` uses the default label, a string sets a custom one
last_updated = "Last Updated"
smooth_scroll = true
sidebar_depth = 2
# Set to "auto" to build each page's sidebar from its headers
# sidebar = "auto"

[[theme.nav]]
text = "Guide"
link = "/guide/"

[[theme.nav]]
text = "More"
aria_label = "More menu"
items = [
    { text = "Tools", link = "/tools/" },
    { text = "Notes", link = "/notes/", draft = true },
]

[[theme.nav]]
text = "GitHub"
link = "https://github.com/"

[[theme.sidebar]]
key = "/guide/"
groups = [
    { title = "Guide", children = ["introduction", "getting-started"] },
]

[[theme.sidebar]]
key = "/tools/"
groups = [
    { title = "Tools", children = ["git", "vim"] },
]

[[theme.sidebar]]
key = "/notes/"
draft = true
groups = [
    { title = "Notes", children = ["draft"] },
]
"#;

/// Generate docnav.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# docnav configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("title = \"My Docs\"\n");
    out.push_str("description = \"\"\n");
    out.push_str("# URL path the site is served under\n");
    out.push_str("base = \"/\"\n");
    out.push_str("dest = \"dist\"\n\n");
    out.push_str(SECTIONS);

    out
}

/// Write the template into `root`, creating the directory when missing.
///
/// Refuses to overwrite an existing config.
pub fn write_config(root: &Path) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    if path.exists() {
        bail!(
            "'{}' already exists.\n\
             Remove it or run `docnav init --dry` to print the template.",
            path.display()
        );
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

/// Initialize `root` with a starter config.
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn init_site(root: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    write_config(root)?;
    log!("init"; "wrote {}", root.join(CONFIG_FILE).display());
    Ok(())
}
