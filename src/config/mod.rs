//! Site configuration management for `site.toml`.
//!
//! # Sections
//!
//! | Section       | Purpose                                     |
//! |---------------|---------------------------------------------|
//! | `[SITE]`      | Site metadata (title, description, author)  |
//! | `[WORK]` etc. | Per-page title and description              |
//! | `[[LINKS]]`   | Navigation menu, in display order           |
//! | `[[SOCIALS]]` | Social/contact links, in display order      |
//!
//! Every section is optional and falls back to the built-in site data.
//! A `LINKS` or `SOCIALS` array replaces the built-in list as a whole.
//!
//! # Example
//!
//! ```toml
//! [SITE]
//! TITLE = "My Blog"
//! DESCRIPTION = "A personal blog"
//! AUTHOR = "Alice"
//!
//! [[LINKS]]
//! TEXT = "Home"
//! HREF = "/"
//!
//! [[LINKS]]
//! TEXT = "Projects"
//! HREF = "/projects"
//! ENABLED = false
//! ```

pub mod defaults;
mod error;
mod handle;
pub mod validate;

pub use error::ConfigError;
pub use handle::{cfg, init_config};

use crate::{
    log,
    site::{NavLink, PageInfo, SiteInfo, SocialLink},
};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use validate::Issue;

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(rename_all = "UPPERCASE", deny_unknown_fields)]
pub struct SiteConfig {
    /// Path of the file this config was loaded from, if any
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    #[serde(default = "defaults::site")]
    #[educe(Default = defaults::site())]
    pub site: SiteInfo,

    #[serde(default = "defaults::page::work")]
    #[educe(Default = defaults::page::work())]
    pub work: PageInfo,

    #[serde(default = "defaults::page::blog")]
    #[educe(Default = defaults::page::blog())]
    pub blog: PageInfo,

    #[serde(default = "defaults::page::projects")]
    #[educe(Default = defaults::page::projects())]
    pub projects: PageInfo,

    #[serde(default = "defaults::page::search")]
    #[educe(Default = defaults::page::search())]
    pub search: PageInfo,

    /// Navigation entries, disabled ones included
    #[serde(default = "defaults::links")]
    #[educe(Default = defaults::links())]
    pub links: Vec<NavLink>,

    /// Social entries, disabled ones included
    #[serde(default = "defaults::socials")]
    #[educe(Default = defaults::socials())]
    pub socials: Vec<SocialLink>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_content(path, &content)
    }

    /// Load `path`, or the built-in configuration if there is no such file.
    ///
    /// Any other read failure (permissions, a directory) is an error rather
    /// than a silent fallback.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_content(path, &content),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(path.to_path_buf(), err)),
        }
    }

    fn from_content(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let mut config = Self::from_str(content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Serialize back to `site.toml` form, disabled entries included.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Page metadata paired with its section name, in declaration order.
    pub fn pages(&self) -> [(&'static str, &PageInfo); 4] {
        [
            ("WORK", &self.work),
            ("BLOG", &self.blog),
            ("PROJECTS", &self.projects),
            ("SEARCH", &self.search),
        ]
    }

    /// Enabled navigation entries in menu order.
    pub fn links(&self) -> impl Iterator<Item = &NavLink> {
        self.links.iter().filter(|link| link.enabled)
    }

    pub fn disabled_links(&self) -> impl Iterator<Item = &NavLink> {
        self.links.iter().filter(|link| !link.enabled)
    }

    /// Enabled social entries in display order.
    pub fn socials(&self) -> impl Iterator<Item = &SocialLink> {
        self.socials.iter().filter(|social| social.enabled)
    }

    pub fn disabled_socials(&self) -> impl Iterator<Item = &SocialLink> {
        self.socials.iter().filter(|social| !social.enabled)
    }

    /// Validate configuration.
    ///
    /// Warnings are logged; any error fails the whole config with every
    /// error listed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (errors, warnings): (Vec<Issue>, Vec<Issue>) =
            validate::check(self).into_iter().partition(Issue::is_error);

        for warning in &warnings {
            log!("warn"; "{warning}");
        }

        if errors.is_empty() {
            return Ok(());
        }

        let listed = errors
            .iter()
            .map(Issue::to_string)
            .collect::<Vec<_>>()
            .join("\n  ");
        Err(ConfigError::Validation(format!(
            "{} problem(s) found:\n  {listed}",
            errors.len()
        )))
    }
}

// ============================================================================
// Tests
// ============================================================================
