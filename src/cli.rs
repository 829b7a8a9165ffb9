//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Site metadata and navigation for the blog
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Config file path (default: site.toml)
    #[arg(short = 'C', long, default_value = "site.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for `show`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the config (built-in data if the file is missing)
    Check,

    /// Print the active config for the templating layer
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Include disabled links and socials
        #[arg(short, long)]
        all: bool,
    },

    /// Write the built-in site data to the config file
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_defaults() {
        let cli = Cli::try_parse_from(["sitecfg", "show"]).unwrap();

        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert!(matches!(
            cli.command,
            Commands::Show { format: Format::Json, all: false }
        ));
    }

    #[test]
    fn test_show_toml_all() {
        let cli = Cli::try_parse_from(["sitecfg", "-C", "cfg/site.toml", "show", "-f", "toml", "--all"])
            .unwrap();

        assert_eq!(cli.config, PathBuf::from("cfg/site.toml"));
        assert!(matches!(
            cli.command,
            Commands::Show { format: Format::Toml, all: true }
        ));
    }

    #[test]
    fn test_init_force() {
        let cli = Cli::try_parse_from(["sitecfg", "init", "--force"]).unwrap();
        assert!(matches!(cli.command, Commands::Init { force: true }));
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["sitecfg", "show", "--format", "yaml"]).is_err());
    }
}
