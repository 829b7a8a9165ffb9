//! Config initialization.
//!
//! Writes the built-in site data as a `site.toml` ready for editing.

use anyhow::{Context, Result, bail};
use sitecfg::{config::SiteConfig, log};
use std::{fs, path::Path};

const HEADER: &str = "\
# Site metadata and navigation.
# Set `ENABLED = false` on a LINKS/SOCIALS entry to hide it without deleting it.

";

/// Write the default configuration to `path`.
pub fn new_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "`{}` already exists. Remove it manually or pass --force.",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create `{}`", parent.display()))?;
    }

    let content = format!("{HEADER}{}", SiteConfig::default().to_toml()?);
    fs::write(path, content).with_context(|| format!("Failed to write `{}`", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}
