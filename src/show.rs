//! Render the active config for the templating layer.

use crate::cli::Format;
use anyhow::Result;
use sitecfg::{config::SiteConfig, view::SiteView};

/// Render `config` in `format`; `all` keeps disabled entries.
pub fn show_site(config: &SiteConfig, format: Format, all: bool) -> Result<String> {
    let view = if all {
        SiteView::all(config)
    } else {
        SiteView::enabled(config)
    };

    Ok(match format {
        Format::Json => view.to_json()?,
        Format::Toml => view.to_toml()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_json_enabled_only() {
        let out = show_site(&SiteConfig::default(), Format::Json, false).unwrap();

        assert!(out.contains("\"HREF\": \"/blog\""));
        assert!(!out.contains("/editor"));
        assert!(!out.contains("twitter-x"));
    }

    #[test]
    fn test_show_toml_all() {
        let out = show_site(&SiteConfig::default(), Format::Toml, true).unwrap();

        assert!(out.contains("/editor"));
        assert!(out.contains(r#"ICON = "twitter-x""#));
        assert_eq!(SiteConfig::from_str(&out).unwrap(), SiteConfig::default());
    }
}
