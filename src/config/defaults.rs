//! Default values for configuration fields.
//!
//! A table missing from `site.toml` falls back to the built-in site data.

use crate::site::{self, NavLink, PageInfo, SiteInfo, SocialLink};

pub fn site() -> SiteInfo {
    site::SITE
}

// ============================================================================
// Pages
// ============================================================================

pub mod page {
    use super::*;

    pub fn work() -> PageInfo {
        site::WORK
    }

    pub fn blog() -> PageInfo {
        site::BLOG
    }

    pub fn projects() -> PageInfo {
        site::PROJECTS
    }

    pub fn search() -> PageInfo {
        site::SEARCH
    }
}

// ============================================================================
// Links
// ============================================================================

/// All navigation entries, disabled ones included.
pub fn links() -> Vec<NavLink> {
    site::NAV_ENTRIES.to_vec()
}

/// All social entries, disabled ones included.
pub fn socials() -> Vec<SocialLink> {
    site::SOCIAL_ENTRIES.to_vec()
}
