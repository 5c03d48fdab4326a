//! docnav - declarative nav and sidebar configuration for documentation sites.

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use docnav::cli::{self, Cli, Commands};
use docnav::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let cwd = std::env::current_dir().context("Failed to read current directory")?;

    match &cli.command {
        Commands::Check { strict } => cli::check::check_site(&cwd, &cli.config, *strict),
        Commands::Resolve {
            format,
            output,
            strict,
        } => cli::resolve::resolve_site(&cwd, &cli.config, *format, output.as_deref(), *strict),
        Commands::Init { dir, dry } => {
            let root = dir.as_ref().map_or_else(|| cwd.clone(), |dir| cwd.join(dir));
            cli::init::init_site(&root, *dry)
        }
    }
}
