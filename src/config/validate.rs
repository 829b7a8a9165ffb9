//! Structural checks for a loaded [`SiteConfig`].
//!
//! | Field                      | Rule                                        |
//! |----------------------------|---------------------------------------------|
//! | `SITE.*`                   | non-empty                                   |
//! | `WORK` .. `SEARCH`         | non-empty `TITLE` and `DESCRIPTION`         |
//! | `LINKS[i].HREF`            | site path (`/...`) or absolute URL          |
//! | `SOCIALS[i].HREF`          | absolute URL or `mailto:`                   |
//! | `SOCIALS[i]` with `email`  | `HREF` must be `mailto:`                    |
//! | `LINKS[i].TEXT`            | unique among enabled entries (warning only) |
//!
//! Disabled entries are checked too, so switching one back on can never
//! produce a broken link.

use super::SiteConfig;
use crate::{
    href::{self, HrefKind},
    site::{Icon, PageInfo},
};
use std::{collections::HashSet, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// One failed check, addressed by its field path (e.g. `LINKS[2].HREF`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub severity: Severity,
    pub field: String,
    pub message: String,
}

impl Issue {
    fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.into(),
            message: message.into(),
        }
    }

    fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Run every check, returning errors and warnings in field order.
pub fn check(config: &SiteConfig) -> Vec<Issue> {
    let mut issues = Vec::new();

    require(&mut issues, "SITE.TITLE", &config.site.title);
    require(&mut issues, "SITE.DESCRIPTION", &config.site.description);
    require(&mut issues, "SITE.AUTHOR", &config.site.author);

    for (name, page) in config.pages() {
        check_page(&mut issues, name, page);
    }

    check_links(&mut issues, config);
    check_socials(&mut issues, config);

    issues
}

fn require(issues: &mut Vec<Issue>, field: &str, value: &str) {
    if value.trim().is_empty() {
        issues.push(Issue::error(field, "must not be empty"));
    }
}

fn check_page(issues: &mut Vec<Issue>, name: &str, page: &PageInfo) {
    require(issues, &format!("{name}.TITLE"), &page.title);
    require(issues, &format!("{name}.DESCRIPTION"), &page.description);
}

fn check_links(issues: &mut Vec<Issue>, config: &SiteConfig) {
    let mut seen = HashSet::new();

    for (i, link) in config.links.iter().enumerate() {
        let field = format!("LINKS[{i}]");

        if link.text.trim().is_empty() {
            issues.push(Issue::warning(format!("{field}.TEXT"), "is empty"));
        } else if link.enabled && !seen.insert(link.text.as_str()) {
            issues.push(Issue::warning(
                format!("{field}.TEXT"),
                format!("`{}` appears more than once in the menu", link.text),
            ));
        }

        match href::classify(&link.href) {
            Ok(HrefKind::Path | HrefKind::Url) => {}
            Ok(HrefKind::Mailto) => issues.push(Issue::error(
                format!("{field}.HREF"),
                "must be a site path or an absolute URL",
            )),
            Err(err) => issues.push(Issue::error(format!("{field}.HREF"), err.to_string())),
        }
    }
}

fn check_socials(issues: &mut Vec<Issue>, config: &SiteConfig) {
    for (i, social) in config.socials.iter().enumerate() {
        let field = format!("SOCIALS[{i}]");

        if social.name.trim().is_empty() {
            issues.push(Issue::warning(format!("{field}.NAME"), "is empty"));
        }

        let kind = match href::classify(&social.href) {
            Ok(kind) => kind,
            Err(err) => {
                issues.push(Issue::error(format!("{field}.HREF"), err.to_string()));
                continue;
            }
        };

        match (social.icon, kind) {
            (Icon::Email, HrefKind::Mailto) => {}
            (Icon::Email, _) => issues.push(Issue::error(
                format!("{field}.HREF"),
                "`email` links must use `mailto:`",
            )),
            (_, HrefKind::Path) => issues.push(Issue::error(
                format!("{field}.HREF"),
                "must be an absolute URL or `mailto:`",
            )),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::{NavLink, SocialLink};

    fn errors(config: &SiteConfig) -> Vec<String> {
        check(config)
            .into_iter()
            .filter(Issue::is_error)
            .map(|issue| issue.to_string())
            .collect()
    }

    #[test]
    fn test_builtin_config_is_clean() {
        assert!(check(&SiteConfig::default()).is_empty());
    }

    #[test]
    fn test_empty_site_fields() {
        let mut config = SiteConfig::default();
        config.site.title = "".into();
        config.site.author = "  ".into();

        assert_eq!(
            errors(&config),
            ["SITE.TITLE: must not be empty", "SITE.AUTHOR: must not be empty"]
        );
    }

    #[test]
    fn test_empty_page_description() {
        let mut config = SiteConfig::default();
        config.search.description = "".into();

        assert_eq!(errors(&config), ["SEARCH.DESCRIPTION: must not be empty"]);
    }

    #[test]
    fn test_link_href_rules() {
        let mut config = SiteConfig::default();
        config.links = vec![
            NavLink::new("Home", "/"),
            NavLink::new("Docs", "https://docs.example.com"),
            NavLink::new("Broken", "blog"),
            NavLink::new("Mail", "mailto:me@example.com"),
            NavLink::new("Empty", "").disabled(),
        ];

        let errors = errors(&config);
        assert_eq!(errors.len(), 3);
        assert!(errors[0].starts_with("LINKS[2].HREF"));
        assert_eq!(
            errors[1],
            "LINKS[3].HREF: must be a site path or an absolute URL"
        );
        assert_eq!(errors[2], "LINKS[4].HREF: href is empty");
    }

    #[test]
    fn test_email_icon_requires_mailto() {
        let mut config = SiteConfig::default();
        config.socials = vec![SocialLink::new(
            "Email",
            Icon::Email,
            "me@example.com",
            "https://example.com/contact",
        )];

        assert_eq!(
            errors(&config),
            ["SOCIALS[0].HREF: `email` links must use `mailto:`"]
        );
    }

    #[test]
    fn test_padded_nav_href_rejected() {
        let mut config = SiteConfig::default();
        config.links = vec![NavLink::new("Work", " /work")];

        assert_eq!(
            errors(&config),
            [r#"LINKS[0].HREF: " /work" has leading or trailing whitespace"#]
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_padded_email_href_rejected() {
        let mut config = SiteConfig::default();
        config.socials = vec![SocialLink::new(
            "Email",
            Icon::Email,
            "me@x.com",
            " mailto:me@x.com\n",
        )];

        let errors = errors(&config);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("SOCIALS[0].HREF:"));
        assert!(errors[0].ends_with("has leading or trailing whitespace"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_social_path_rejected() {
        let mut config = SiteConfig::default();
        config.socials = vec![SocialLink::new("Github", Icon::Github, "me", "/github")];

        assert_eq!(
            errors(&config),
            ["SOCIALS[0].HREF: must be an absolute URL or `mailto:`"]
        );
    }

    #[test]
    fn test_duplicate_nav_text_is_warning() {
        let mut config = SiteConfig::default();
        config.links = vec![
            NavLink::new("Blog", "/blog"),
            NavLink::new("Blog", "/posts"),
            // disabled duplicates are not shown, so they don't clash
            NavLink::new("Blog", "/old-blog").disabled(),
        ];

        let issues = check(&config);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].field, "LINKS[1].TEXT");
    }
}
