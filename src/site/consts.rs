//! The site's literal metadata and navigation.

use super::{Icon, NavLink, PageInfo, SiteInfo, SocialLink};
use std::sync::LazyLock;

// ============================================================================
// Global
// ============================================================================

pub const SITE: SiteInfo = SiteInfo::new(
    "Mogesh",
    "Exploring CTFs, exploits, and security research as part of Team NOVA. Hack. Learn. Share.",
    "Mogesh",
);

// ============================================================================
// Pages
// ============================================================================

pub const WORK: PageInfo = PageInfo::new("Work", "Places I have worked.");

pub const BLOG: PageInfo = PageInfo::new("Blog", "Writing on topics I am passionate about.");

pub const PROJECTS: PageInfo = PageInfo::new("Projects", "Recent projects I have worked on.");

pub const SEARCH: PageInfo = PageInfo::new("Search", "Search all posts and projects by keyword.");

// ============================================================================
// Links
// ============================================================================

/// Every navigation entry in menu order, including switched-off ones.
pub const NAV_ENTRIES: &[NavLink] = &[
    NavLink::new("Home", "/"),
    NavLink::new("Work", "/work"),
    NavLink::new("Blog", "/blog"),
    NavLink::new("Editor", "/editor").disabled(),
    NavLink::new("Projects", "/projects").disabled(),
];

/// Every social entry in display order, including switched-off ones.
pub const SOCIAL_ENTRIES: &[SocialLink] = &[
    SocialLink::new(
        "Email",
        Icon::Email,
        "mogeshaue@gmail.com",
        "mailto:mogeshaue@gmail.com",
    ),
    SocialLink::new(
        "Github",
        Icon::Github,
        "markhorn-dev",
        "https://github.com/markhorn-dev/astro-sphere",
    )
    .disabled(),
    SocialLink::new(
        "LinkedIn",
        Icon::Linkedin,
        "Mogesh",
        "https://linkedin.com/in/mogesh-me/",
    ),
    SocialLink::new(
        "Twitter",
        Icon::TwitterX,
        "markhorn_dev",
        "https://twitter.com/markhorn_dev",
    )
    .disabled(),
];

/// Enabled navigation entries, in menu order.
pub static LINKS: LazyLock<Box<[NavLink]>> =
    LazyLock::new(|| NAV_ENTRIES.iter().filter(|l| l.enabled).cloned().collect());

/// Enabled social entries, in display order.
pub static SOCIALS: LazyLock<Box<[SocialLink]>> =
    LazyLock::new(|| SOCIAL_ENTRIES.iter().filter(|s| s.enabled).cloned().collect());
