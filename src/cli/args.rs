//! Command-line interface definitions.

use crate::resolve::OutputFormat;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Declarative nav and sidebar configuration for documentation sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "docnav.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the config and the nav/sidebar correspondence
    #[command(visible_alias = "c")]
    Check {
        /// Treat warnings as errors
        #[arg(short, long)]
        strict: bool,
    },

    /// Print the resolved site config
    #[command(visible_alias = "r")]
    Resolve {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Write output to file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,

        /// Treat warnings as errors
        #[arg(short, long)]
        strict: bool,
    },

    /// Write a starter docnav.toml
    #[command(visible_alias = "i")]
    Init {
        /// Target directory (default: current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,

        /// Print the template instead of writing it
        #[arg(long)]
        dry: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::try_parse_from(["docnav", "resolve", "--format", "js", "-o", "config.js"])
            .unwrap();
        let Commands::Resolve {
            format,
            output,
            strict,
        } = cli.command
        else {
            panic!("expected resolve, got {:?}", cli.command);
        };
        assert_eq!(format, OutputFormat::Js);
        assert_eq!(output, Some(PathBuf::from("config.js")));
        assert!(!strict);
        assert_eq!(cli.config, PathBuf::from("docnav.toml"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["docnav", "check", "--strict", "-v", "-C", "site.toml"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert!(matches!(cli.command, Commands::Check { strict: true }));
    }
}
