//! Icon keys shared with the icon renderer.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Supported social icons.
///
/// Serialized as the renderer's lookup key (`"email"`, `"twitter-x"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Email,
    Linkedin,
    Github,
    TwitterX,
}

impl Icon {
    pub const ALL: [Icon; 4] = [Icon::Email, Icon::Linkedin, Icon::Github, Icon::TwitterX];

    /// Lookup key used by the icon renderer.
    pub const fn key(self) -> &'static str {
        match self {
            Icon::Email => "email",
            Icon::Linkedin => "linkedin",
            Icon::Github => "github",
            Icon::TwitterX => "twitter-x",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when parsing an icon key that the renderer does not know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown icon `{0}`")]
pub struct UnknownIcon(pub String);

impl FromStr for Icon {
    type Err = UnknownIcon;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Icon::ALL
            .into_iter()
            .find(|icon| icon.key() == s)
            .ok_or_else(|| UnknownIcon(s.to_owned()))
    }
}
