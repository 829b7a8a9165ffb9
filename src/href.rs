//! HREF classification.
//!
//! Navigation and social entries point either at a page of this site
//! (`/blog`), at another site (`https://...`), or at a mail address
//! (`mailto:...`). Anything else is rejected before it reaches a template.

use thiserror::Error;
use url::Url;

const MAILTO: &str = "mailto:";

/// What an HREF points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HrefKind {
    /// Site-relative path, starting with `/`.
    Path,
    /// Absolute URL with a host.
    Url,
    /// `mailto:` URI.
    Mailto,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HrefError {
    #[error("href is empty")]
    Empty,

    #[error("`{0}` is relative; site paths must start with `/`")]
    Relative(String),

    #[error("`{0}` is not a valid URL: {1}")]
    Invalid(String, String),

    #[error("`{0}` has no host")]
    MissingHost(String),

    #[error("`{0}` is not a valid mailto address")]
    BadMailto(String),

    #[error("{0:?} has leading or trailing whitespace")]
    Padded(String),
}

/// Classify an HREF, rejecting values a router or browser could not follow.
pub fn classify(href: &str) -> Result<HrefKind, HrefError> {
    if href.trim().is_empty() {
        return Err(HrefError::Empty);
    }
    // templates render the stored value as-is, so it is checked as-is
    if href.trim() != href {
        return Err(HrefError::Padded(href.to_owned()));
    }

    if href.starts_with('/') {
        // `//host/path` is protocol-relative, not a site path
        return if href.starts_with("//") {
            Err(HrefError::Relative(href.to_owned()))
        } else {
            Ok(HrefKind::Path)
        };
    }

    if href.starts_with(MAILTO) {
        return classify_mailto(href);
    }

    match Url::parse(href) {
        Ok(url) if url.host_str().is_some_and(|h| !h.is_empty()) => Ok(HrefKind::Url),
        Ok(_) => Err(HrefError::MissingHost(href.to_owned())),
        Err(url::ParseError::RelativeUrlWithoutBase) => Err(HrefError::Relative(href.to_owned())),
        Err(err) => Err(HrefError::Invalid(href.to_owned(), err.to_string())),
    }
}

/// A `mailto:` URI whose address (before any `?query`) is `user@domain`.
fn classify_mailto(href: &str) -> Result<HrefKind, HrefError> {
    let bad = || HrefError::BadMailto(href.to_owned());
    let url = Url::parse(href).map_err(|_| bad())?;

    let address = url.path();
    if address.contains(|c: char| c.is_whitespace()) || address.contains("%20") {
        return Err(bad());
    }
    match address.split_once('@') {
        Some((user, domain))
            if !user.is_empty() && !domain.is_empty() && !domain.contains('@') =>
        {
            Ok(HrefKind::Mailto)
        }
        _ => Err(bad()),
    }
}
