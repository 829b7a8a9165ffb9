//! Site metadata and navigation.
//!
//! | Item                         | Type              |
//! |------------------------------|-------------------|
//! | `SITE`                       | [`SiteInfo`]      |
//! | `WORK` `BLOG` `PROJECTS` `SEARCH` | [`PageInfo`] |
//! | `LINKS` / `NAV_ENTRIES`      | [`NavLink`]       |
//! | `SOCIALS` / `SOCIAL_ENTRIES` | [`SocialLink`]    |
//!
//! `*_ENTRIES` hold every entry in order, switched-off ones included.
//! `LINKS` and `SOCIALS` are the enabled subset, built on first read and
//! never changed afterwards.

mod consts;
mod icon;
mod types;

pub use consts::{BLOG, LINKS, NAV_ENTRIES, PROJECTS, SEARCH, SITE, SOCIAL_ENTRIES, SOCIALS, WORK};
pub use icon::{Icon, UnknownIcon};
pub use types::{NavLink, PageInfo, SiteInfo, SocialLink};
