//! Shapes shared between the site data and its consumers.
//!
//! Field names serialize in upper case (`TITLE`, `HREF`, ...). Templates
//! and the icon renderer key on those names, so renaming a field here is a
//! breaking change for every consumer.

use super::Icon;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Default for the `ENABLED` key when an entry omits it.
fn enabled() -> bool {
    true
}

/// Metadata describing the whole site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", deny_unknown_fields)]
pub struct SiteInfo {
    /// Site title, used in `<title>` and the header.
    pub title: CompactString,
    /// Site description for SEO meta tags.
    pub description: CompactString,
    pub author: CompactString,
}

/// Title/description pair for one page's head tags and header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", deny_unknown_fields)]
pub struct PageInfo {
    pub title: CompactString,
    pub description: CompactString,
}

/// A single entry in the primary navigation menu.
///
/// # Example
/// ```toml
/// [[LINKS]]
/// TEXT = "Editor"
/// HREF = "/editor"
/// ENABLED = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", deny_unknown_fields)]
pub struct NavLink {
    /// Label shown in the menu.
    pub text: CompactString,
    /// Site-relative path (`/blog`) or absolute URL.
    pub href: CompactString,
    /// Disabled entries are kept in the list but never rendered.
    #[serde(default = "enabled")]
    pub enabled: bool,
}

/// A single entry in the social/contact link list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", deny_unknown_fields)]
pub struct SocialLink {
    pub name: CompactString,
    /// Icon key understood by the icon renderer.
    pub icon: Icon,
    /// Visible label, e.g. the address or handle.
    pub text: CompactString,
    /// Absolute URL or `mailto:` URI.
    pub href: CompactString,
    #[serde(default = "enabled")]
    pub enabled: bool,
}

impl SiteInfo {
    pub const fn new(
        title: &'static str,
        description: &'static str,
        author: &'static str,
    ) -> Self {
        Self {
            title: CompactString::const_new(title),
            description: CompactString::const_new(description),
            author: CompactString::const_new(author),
        }
    }
}

impl PageInfo {
    pub const fn new(title: &'static str, description: &'static str) -> Self {
        Self {
            title: CompactString::const_new(title),
            description: CompactString::const_new(description),
        }
    }
}

impl NavLink {
    /// An enabled navigation entry.
    pub const fn new(text: &'static str, href: &'static str) -> Self {
        Self {
            text: CompactString::const_new(text),
            href: CompactString::const_new(href),
            enabled: true,
        }
    }

    /// Same entry, switched off.
    pub const fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

impl SocialLink {
    pub const fn new(
        name: &'static str,
        icon: Icon,
        text: &'static str,
        href: &'static str,
    ) -> Self {
        Self {
            name: CompactString::const_new(name),
            icon,
            text: CompactString::const_new(text),
            href: CompactString::const_new(href),
            enabled: true,
        }
    }

    pub const fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}
