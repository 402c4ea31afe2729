//! Shared link types used by the site configuration and the renderers.
//!
//! Every entry is validated only by convention: fields default to the empty
//! string, so a config missing an `href` still loads and renders a broken link.
//! [`crate::config::lint_links`] reports such entries without rejecting them.

use serde::{Deserialize, Serialize};

/// A navigation entry (`header.nav_links`, `footer.nav_links`, `page.blog_links`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavLink {
    pub text: String,
    pub href: String,
}

impl NavLink {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
        }
    }
}

/// A social profile link rendered with an icon in the footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SocialLink {
    pub text: String,
    pub href: String,
    /// Icon identifier, e.g. `"github"` or `"mastodon"`.
    pub icon: String,
}

/// Header logo image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Logo {
    pub src: String,
    pub alt: String,
}
