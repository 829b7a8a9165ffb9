//! Process-wide site config, installed once at startup.
//!
//! Readers call [`cfg()`] from anywhere. Before [`init_config`] runs it
//! returns the built-in configuration, so library consumers that never load
//! a file still see the site data.
//!
//! # Usage
//!
//! ```ignore
//! use sitecfg::config::{cfg, init_config, SiteConfig};
//!
//! init_config(SiteConfig::from_path(path)?)?;
//! let title = &cfg().site.title;
//! ```

use super::{ConfigError, SiteConfig};
use std::sync::{LazyLock, OnceLock};

/// Config loaded from disk, set at most once.
static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Built-in config, used until (or unless) [`CONFIG`] is set.
static BUILTIN: LazyLock<SiteConfig> = LazyLock::new(SiteConfig::default);

/// Get the active config.
#[inline]
pub fn cfg() -> &'static SiteConfig {
    CONFIG.get().unwrap_or_else(|| &*BUILTIN)
}

/// Install the active config (called once at startup).
///
/// # Errors
///
/// Returns [`ConfigError::AlreadyInitialized`] on a second call; the first
/// config stays in place.
pub fn init_config(config: SiteConfig) -> Result<(), ConfigError> {
    CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInitialized)
}
