//! Site metadata and navigation for a personal blog.
//!
//! The data lives in [`site`] as typed constants (`SITE`, `WORK`, `BLOG`,
//! `PROJECTS`, `SEARCH`, `LINKS`, `SOCIALS`). [`config`] loads the same
//! shapes from an optional `site.toml`, falling back to those constants,
//! and checks them before anything is rendered.
//!
//! ```
//! use sitecfg::site::{LINKS, SITE};
//!
//! assert_eq!(SITE.title, "Mogesh");
//! assert_eq!(LINKS[0].href, "/");
//! ```

pub mod config;
pub mod href;
pub mod logger;
pub mod site;
pub mod view;
