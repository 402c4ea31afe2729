//! Page metadata synthesis.
//!
//! Every rendered page gets its `<title>`, canonical URL, and social preview
//! tags from two layers: the site-wide defaults in [`SiteConfig`] and the
//! page's own props. Synthesis is a pure function of those two layers plus the
//! request URL: no I/O, no hidden state, the same inputs always give the same
//! tag set.
//!
//! ## Title composition
//!
//! `[page title, site title]`, empty entries dropped, joined with `" | "`:
//!
//! ```text
//! page "My Post", site "Site"  →  "My Post | Site"
//! page absent,    site "Site"  →  "Site"
//! ```
//!
//! ## Canonical URLs
//!
//! Search engines treat `/a` and `/a/` as different resources, so the canonical
//! tag has to pick one spelling. See [`normalize_canonical_url`].
//!
//! ## Tag set
//!
//! | Source | Tags |
//! |--------|------|
//! | title | `<title>`, `og:title`, `twitter:title` |
//! | description | `description`, `og:description`, `twitter:description` |
//! | canonical URL | `<link rel="canonical">`, `og:url`, `twitter:url` |
//! | page type | `og:type` |
//! | constant | `twitter:card` = `summary_large_image` |
//!
//! ## Social images
//!
//! [`PageMetadataRequest::image`] is accepted and carried through to
//! [`ResolvedMetadata::image`], but no `og:image` / `twitter:image` tag is
//! emitted for it. Pages rely on the platform's default card image.

use crate::config::SiteConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the page title and the site title.
pub const TITLE_SEPARATOR: &str = " | ";

/// Value of the `twitter:card` tag on every page.
pub const TWITTER_CARD: &str = "summary_large_image";

/// Open Graph object type of a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    #[default]
    Website,
    Article,
}

impl PageType {
    pub fn as_str(self) -> &'static str {
        match self {
            PageType::Website => "website",
            PageType::Article => "article",
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Social preview image for a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialImage {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Page-level overrides for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadataRequest {
    /// Page title; absent means the site title is used on its own.
    pub title: Option<String>,
    /// Page description; absent means empty.
    pub description: Option<String>,
    pub image: Option<SocialImage>,
    pub page_type: PageType,
    /// Absolute URL of the current request, as supplied by the host.
    pub request_url: String,
}

impl PageMetadataRequest {
    pub fn new(request_url: impl Into<String>) -> Self {
        Self {
            title: None,
            description: None,
            image: None,
            page_type: PageType::default(),
            request_url: request_url.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image: SocialImage) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_page_type(mut self, page_type: PageType) -> Self {
        self.page_type = page_type;
        self
    }
}

/// Fully resolved metadata for one page. Derived per render, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedMetadata {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub page_type: PageType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<SocialImage>,
}

/// One element of the document-head tag set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HeadTag {
    /// `<title>…</title>`
    Title { text: String },
    /// `<link rel="canonical" href="…">`
    Canonical { href: String },
    /// `<meta name="…" content="…">` (plain and `twitter:*` tags)
    MetaName { name: &'static str, content: String },
    /// `<meta property="…" content="…">` (`og:*` tags)
    MetaProperty {
        property: &'static str,
        content: String,
    },
}

impl HeadTag {
    /// Lookup key: `"title"`, `"canonical"`, or the name/property attribute.
    pub fn key(&self) -> &str {
        match self {
            HeadTag::Title { .. } => "title",
            HeadTag::Canonical { .. } => "canonical",
            HeadTag::MetaName { name, .. } => *name,
            HeadTag::MetaProperty { property, .. } => *property,
        }
    }

    /// The text, href, or content value.
    pub fn value(&self) -> &str {
        match self {
            HeadTag::Title { text } => text.as_str(),
            HeadTag::Canonical { href } => href.as_str(),
            HeadTag::MetaName { content, .. } | HeadTag::MetaProperty { content, .. } => {
                content.as_str()
            }
        }
    }
}

impl ResolvedMetadata {
    /// The head tag set, in emission order.
    pub fn tags(&self) -> Vec<HeadTag> {
        let name = |name, content: &str| HeadTag::MetaName {
            name,
            content: content.to_string(),
        };
        let property = |property, content: &str| HeadTag::MetaProperty {
            property,
            content: content.to_string(),
        };

        vec![
            HeadTag::Title {
                text: self.title.clone(),
            },
            name("description", &self.description),
            HeadTag::Canonical {
                href: self.canonical_url.clone(),
            },
            // Open Graph
            property("og:type", self.page_type.as_str()),
            property("og:url", &self.canonical_url),
            property("og:title", &self.title),
            property("og:description", &self.description),
            // Twitter
            name("twitter:card", TWITTER_CARD),
            name("twitter:url", &self.canonical_url),
            name("twitter:title", &self.title),
            name("twitter:description", &self.description),
        ]
    }
}

/// Compose the document title from the page title and the site title.
///
/// Empty or absent entries are dropped before joining, so a page without a
/// title gets the bare site title and never a dangling separator.
pub fn compose_title(page_title: Option<&str>, site_title: &str) -> String {
    [page_title, Some(site_title)]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(TITLE_SEPARATOR)
}

/// Normalize an absolute URL into its canonical spelling.
///
/// - With a query string, trailing slashes right before the `?` are removed:
///   `https://x.test/a/?q=1` → `https://x.test/a?q=1`.
/// - Without one, the path ends in exactly one slash:
///   `https://x.test/a` → `https://x.test/a/`.
///
/// Only the path is touched; `scheme://authority` is kept as given, so
/// `file:///` stays `file:///`. A `#fragment` is set aside first and
/// reattached unchanged. A run of trailing slashes collapses as a whole,
/// which keeps the function idempotent.
pub fn normalize_canonical_url(url: &str) -> String {
    let (before_fragment, fragment) = match url.find('#') {
        Some(pos) => url.split_at(pos),
        None => (url, ""),
    };
    let (origin, rest) = before_fragment.split_at(path_start(before_fragment));

    let mut normalized = origin.to_string();
    match rest.find('?') {
        Some(pos) => {
            let (path, query) = rest.split_at(pos);
            normalized.push_str(path.trim_end_matches('/'));
            normalized.push_str(query);
        }
        None => {
            normalized.push_str(rest.trim_end_matches('/'));
            normalized.push('/');
        }
    }
    normalized.push_str(fragment);
    normalized
}

/// Byte offset where the path begins: right after `scheme://authority`, or
/// after `scheme:` when the URL has no authority.
fn path_start(url: &str) -> usize {
    match url.find("://") {
        Some(pos) => {
            let authority = pos + "://".len();
            url[authority..]
                .find(['/', '?'])
                .map_or(url.len(), |end| authority + end)
        }
        None => url.find(':').map_or(0, |pos| pos + 1),
    }
}

/// Resolve a page's metadata against the site defaults.
pub fn synthesize(request: &PageMetadataRequest, site: &SiteConfig) -> ResolvedMetadata {
    let resolved = ResolvedMetadata {
        title: compose_title(request.title.as_deref(), &site.title),
        description: request.description.clone().unwrap_or_default(),
        canonical_url: normalize_canonical_url(&request.request_url),
        page_type: request.page_type,
        image: request.image.clone(),
    };

    if let Some(image) = &resolved.image {
        tracing::debug!(src = %image.src, "social image accepted but not emitted as a tag");
    }
    tracing::debug!(
        title = %resolved.title,
        canonical = %resolved.canonical_url,
        page_type = %resolved.page_type,
        "page metadata resolved"
    );
    resolved
}
