//! Serializable view of a [`SiteConfig`] for the templating layer.
//!
//! Keys match the names templates import: `SITE`, `WORK`, `BLOG`,
//! `PROJECTS`, `SEARCH`, `LINKS`, `SOCIALS`.

use crate::{
    config::SiteConfig,
    site::{NavLink, PageInfo, SiteInfo, SocialLink},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct SiteView<'a> {
    pub site: &'a SiteInfo,
    pub work: &'a PageInfo,
    pub blog: &'a PageInfo,
    pub projects: &'a PageInfo,
    pub search: &'a PageInfo,
    pub links: Vec<&'a NavLink>,
    pub socials: Vec<&'a SocialLink>,
}

impl<'a> SiteView<'a> {
    /// Enabled entries only, as a page would render them.
    pub fn enabled(config: &'a SiteConfig) -> Self {
        Self {
            links: config.links().collect(),
            socials: config.socials().collect(),
            ..Self::all(config)
        }
    }

    /// Every entry, disabled ones included.
    pub fn all(config: &'a SiteConfig) -> Self {
        Self {
            site: &config.site,
            work: &config.work,
            blog: &config.blog,
            projects: &config.projects,
            search: &config.search,
            links: config.links.iter().collect(),
            socials: config.socials.iter().collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_enabled_json_shape() {
        let config = SiteConfig::default();
        let value: Value = serde_json::from_str(&SiteView::enabled(&config).to_json().unwrap()).unwrap();

        assert_eq!(value["SITE"]["AUTHOR"], "Mogesh");
        assert_eq!(value["SEARCH"]["TITLE"], "Search");
        assert_eq!(
            value["LINKS"],
            json!([
                { "TEXT": "Home", "HREF": "/", "ENABLED": true },
                { "TEXT": "Work", "HREF": "/work", "ENABLED": true },
                { "TEXT": "Blog", "HREF": "/blog", "ENABLED": true },
            ])
        );
        assert_eq!(
            value["SOCIALS"],
            json!([
                {
                    "NAME": "Email",
                    "ICON": "email",
                    "TEXT": "mogeshaue@gmail.com",
                    "HREF": "mailto:mogeshaue@gmail.com",
                    "ENABLED": true,
                },
                {
                    "NAME": "LinkedIn",
                    "ICON": "linkedin",
                    "TEXT": "Mogesh",
                    "HREF": "https://linkedin.com/in/mogesh-me/",
                    "ENABLED": true,
                },
            ])
        );
    }

    #[test]
    fn test_all_includes_disabled() {
        let config = SiteConfig::default();
        let view = SiteView::all(&config);

        assert_eq!(view.links.len(), 5);
        assert_eq!(view.socials.len(), 4);
        assert!(view.to_toml().unwrap().contains("ENABLED = false"));
    }

    #[test]
    fn test_enabled_toml_parses_back() {
        let config = SiteConfig::default();
        let text = SiteView::enabled(&config).to_toml().unwrap();
        let parsed = SiteConfig::from_str(&text).unwrap();

        assert_eq!(parsed.links.len(), 3);
        assert!(parsed.disabled_socials().next().is_none());
        assert_eq!(parsed.site, config.site);
    }
}
