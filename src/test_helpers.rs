//! Shared test utilities for the folio test suite.
//!
//! Provides a realistic site config, a canonical article request, tag lookups
//! that panic with the available keys on a miss, and an indicator that records
//! what the progress controller asked it to do.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let site = sample_config();
//! let tags = synthesize(&article_request(), &site).tags();
//! assert_eq!(tag_value(&tags, "og:type"), "article");
//! ```

use crate::config::SiteConfig;
use crate::metadata::{HeadTag, PageMetadataRequest, PageType};
use crate::progress::ProgressIndicator;
use crate::types::{Logo, NavLink, SocialLink};

// =========================================================================
// Fixtures
// =========================================================================

/// Stock config with only the title changed.
pub fn site_titled(title: &str) -> SiteConfig {
    SiteConfig {
        title: title.to_string(),
        ..SiteConfig::default()
    }
}

/// A filled-in config resembling a real personal site.
pub fn sample_config() -> SiteConfig {
    let mut site = site_titled("Field Notes");
    site.description = "Notes on software and photography".to_string();
    site.author = "Jane Doe".to_string();
    site.social_links = vec![SocialLink {
        text: "GitHub".to_string(),
        href: "https://github.com/jane".to_string(),
        icon: "github".to_string(),
    }];
    site.header.logo = Logo {
        src: "/logo.svg".to_string(),
        alt: "Field Notes".to_string(),
    };
    site.header.nav_links = vec![
        NavLink::new("Blog", "/blog/"),
        NavLink::new("Projects", "/projects/"),
        NavLink::new("About", "/about/"),
    ];
    site.footer.nav_links = vec![NavLink::new("RSS", "/rss.xml")];
    site.page.blog_links = vec![NavLink::new("All posts", "/blog/")];
    site
}

/// The article page used throughout the scenarios.
pub fn article_request() -> PageMetadataRequest {
    PageMetadataRequest::new("https://x.test/blog/my-post")
        .with_title("My Post")
        .with_description("desc")
        .with_page_type(PageType::Article)
}

// =========================================================================
// Tag lookups: panic with a clear message on miss
// =========================================================================

/// Find a tag's value by key (`"title"`, `"canonical"`, `"og:url"`, …).
pub fn tag_value<'a>(tags: &'a [HeadTag], key: &str) -> &'a str {
    tags.iter()
        .find(|t| t.key() == key)
        .map(|t| t.value())
        .unwrap_or_else(|| {
            let keys: Vec<&str> = tags.iter().map(|t| t.key()).collect();
            panic!("tag '{key}' not found. Available: {keys:?}")
        })
}

// =========================================================================
// Progress indicator double
// =========================================================================

/// Records every call the controller makes.
#[derive(Debug, Default)]
pub struct RecordingIndicator {
    pub calls: Vec<&'static str>,
}

impl ProgressIndicator for RecordingIndicator {
    fn begin(&mut self) {
        self.calls.push("begin");
    }

    fn finish(&mut self) {
        self.calls.push("finish");
    }
}
