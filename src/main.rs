//! sitecfg - check, show and scaffold the blog's site metadata.

mod cli;
mod init;
mod show;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use init::new_config;
use show::show_site;
use sitecfg::{
    config::{SiteConfig, cfg, init_config},
    log,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { force } => new_config(&cli.config, *force),
        Commands::Check => {
            let config = load_config(&cli)?;
            log!(
                "check";
                "ok: {} nav links ({} disabled), {} socials ({} disabled)",
                config.links().count(),
                config.disabled_links().count(),
                config.socials().count(),
                config.disabled_socials().count()
            );
            Ok(())
        }
        Commands::Show { format, all } => {
            let config = load_config(&cli)?;
            println!("{}", show_site(config, *format, *all)?);
            Ok(())
        }
    }
}

/// Load, validate and install the config named on the command line.
fn load_config(cli: &Cli) -> Result<&'static SiteConfig> {
    let config = SiteConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load `{}`", cli.config.display()))?;

    if config.config_path.is_none() {
        log!("config"; "`{}` not found, using built-in site data", cli.config.display());
    }

    config.validate()?;
    init_config(config)?;
    Ok(cfg())
}
