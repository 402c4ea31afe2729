//! Site configuration module.
//!
//! Handles loading, validating, and linting `config.toml`. The file holds the
//! site-wide defaults every page render falls back on (title, description,
//! author) plus the navigation and social link lists the layout renders.
//!
//! ## Config File Location
//!
//! Place `config.toml` in the site source directory (`--source`, default `.`).
//! A missing file yields the stock defaults.
//!
//! ## Configuration Options
//!
//! ```toml
//! title = "My Site"
//! description = "Notes and projects"
//! author = "Jane Doe"
//!
//! [[social_links]]
//! text = "GitHub"
//! href = "https://github.com/jane"
//! icon = "github"
//!
//! [header]
//! logo = { src = "/logo.svg", alt = "Jane Doe" }
//! nav_links = [
//!     { text = "Blog", href = "/blog/" },
//!     { text = "Projects", href = "/projects/" },
//! ]
//!
//! [footer]
//! nav_links = [{ text = "RSS", href = "/rss.xml" }]
//!
//! [page]
//! blog_links = [{ text = "All posts", href = "/blog/" }]
//!
//! [progress]
//! enabled = true
//! start_event = "astro:before-preparation"
//! done_event = "astro:after-swap"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Stock defaults are serialized to a TOML table and
//! the user file is merged on top before deserializing, so only the keys you
//! want to change need to appear. Arrays replace their default wholesale.
//!
//! Unknown keys are rejected to catch typos early. Link entries, on the other
//! hand, are only checked by [`lint_links`], which warns and never fails.
//!
//! ## Lifetime
//!
//! The binary loads the config exactly once, before any render, and passes it
//! by reference to every call. Nothing mutates it afterwards.

use crate::types::{Logo, NavLink, SocialLink};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults; user files only specify what they override.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title, appended to every page title.
    pub title: String,
    /// Site-wide description. Loaded and round-tripped, but page metadata never
    /// reads it: a page without its own description gets an empty one.
    pub description: String,
    pub author: String,
    /// Social profile links in display order.
    pub social_links: Vec<SocialLink>,
    pub header: HeaderConfig,
    pub footer: FooterConfig,
    pub page: PageConfig,
    /// Browser-side navigation progress indicator.
    pub progress: ProgressConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Site".to_string(),
            description: String::new(),
            author: String::new(),
            social_links: Vec::new(),
            header: HeaderConfig::default(),
            footer: FooterConfig::default(),
            page: PageConfig::default(),
            progress: ProgressConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate values that would break rendering outright.
    ///
    /// Link entries are deliberately not checked here; see [`lint_links`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.progress.enabled {
            if self.progress.start_event.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "progress.start_event must not be empty".into(),
                ));
            }
            if self.progress.done_event.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "progress.done_event must not be empty".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Site header: logo and primary navigation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderConfig {
    pub logo: Logo,
    pub nav_links: Vec<NavLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterConfig {
    pub nav_links: Vec<NavLink>,
}

/// Links shown alongside page content (e.g. under a blog post).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub blog_links: Vec<NavLink>,
}

/// Names of the two host page-transition events the indicator listens to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProgressConfig {
    /// Render the indicator markup and script.
    pub enabled: bool,
    /// Dispatched on `document` when a navigation is about to start.
    pub start_event: String,
    /// Dispatched on `document` once the incoming page has been rendered.
    pub done_event: String,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            start_event: "astro:before-preparation".to_string(),
            done_event: "astro:after-swap".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the site config from `config.toml` in the given directory.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    if overlay.is_none() {
        tracing::info!(dir = %root.display(), "no config.toml found, using stock defaults");
    }
    let config = resolve_config(base, overlay)?;
    tracing::info!(
        title = %config.title,
        nav_links = config.header.nav_links.len(),
        social_links = config.social_links.len(),
        "site config loaded"
    );
    Ok(config)
}

// =============================================================================
// Link lint
// =============================================================================

/// What is wrong with a link entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkProblem {
    MissingHref,
    MissingText,
}

/// A link entry that will render, but not usefully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkWarning {
    /// Dotted config key of the list, e.g. `"header.nav_links"`.
    pub section: &'static str,
    /// Zero-based position in the list.
    pub index: usize,
    pub problem: LinkProblem,
}

impl fmt::Display for LinkWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.problem {
            LinkProblem::MissingHref => "has no href",
            LinkProblem::MissingText => "has no text",
        };
        write!(f, "{}[{}] {}", self.section, self.index, what)
    }
}

/// Report link entries with an empty `href` or `text`.
///
/// Never fails: a bad entry renders as a broken link, which is the site's
/// long-standing behaviour. Each finding is also logged at `warn`.
pub fn lint_links(config: &SiteConfig) -> Vec<LinkWarning> {
    let lists: [(&'static str, Vec<(&str, &str)>); 4] = [
        ("header.nav_links", pairs(&config.header.nav_links)),
        ("footer.nav_links", pairs(&config.footer.nav_links)),
        ("page.blog_links", pairs(&config.page.blog_links)),
        (
            "social_links",
            config
                .social_links
                .iter()
                .map(|l| (l.text.as_str(), l.href.as_str()))
                .collect(),
        ),
    ];

    let mut warnings = Vec::new();
    for (section, entries) in lists {
        for (index, (text, href)) in entries.into_iter().enumerate() {
            if href.trim().is_empty() {
                warnings.push(LinkWarning {
                    section,
                    index,
                    problem: LinkProblem::MissingHref,
                });
            }
            if text.trim().is_empty() {
                warnings.push(LinkWarning {
                    section,
                    index,
                    problem: LinkProblem::MissingText,
                });
            }
        }
    }

    for warning in &warnings {
        tracing::warn!("{warning}");
    }
    warnings
}

fn pairs(links: &[NavLink]) -> Vec<(&str, &str)> {
    links
        .iter()
        .map(|l| (l.text.as_str(), l.href.as_str()))
        .collect()
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Folio Configuration
# ===================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# Site title. Every page title is "<page title> | <site title>".
title = "My Site"

# Site-wide description and author.
description = ""
author = ""

# Social profile links, in display order. Repeat the block for more:
#
# [[social_links]]
# text = "GitHub"
# href = "https://github.com/you"
# icon = "github"
social_links = []

# ---------------------------------------------------------------------------
# Header
# ---------------------------------------------------------------------------
[header]
# Primary navigation, in display order.
# nav_links = [{ text = "Blog", href = "/blog/" }]
nav_links = []

[header.logo]
src = ""
alt = ""

# ---------------------------------------------------------------------------
# Footer
# ---------------------------------------------------------------------------
[footer]
nav_links = []

# ---------------------------------------------------------------------------
# Page
# ---------------------------------------------------------------------------
[page]
# Links shown alongside blog posts.
blog_links = []

# ---------------------------------------------------------------------------
# Navigation progress indicator
# ---------------------------------------------------------------------------
[progress]
enabled = true

# Document events fired by the page-transition router.
start_event = "astro:before-preparation"
done_event = "astro:after-swap"
"##
}
