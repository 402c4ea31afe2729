//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O and no side effects.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Site
//!     Title: Field Notes
//!     Author: Jane Doe
//!     Source: site/config.toml
//!
//! Links
//!     header.nav_links: 3
//!     footer.nav_links: 1
//!     page.blog_links: 1
//!     social_links: 1
//!
//! Progress
//!     astro:before-preparation → astro:after-swap
//!
//! Warnings
//!     header.nav_links[1] has no href
//! ```
//!
//! ## Head (text format)
//!
//! ```text
//! title                My Post | Site
//! description          desc
//! canonical            https://x.test/blog/my-post/
//! og:type              article
//! ```

use crate::config::{LinkWarning, SiteConfig};
use crate::metadata::HeadTag;
use std::path::Path;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Width of the key column in [`format_tags`].
const KEY_WIDTH: usize = 20;

/// Format the head tag set as an aligned key/value listing.
pub fn format_tags(tags: &[HeadTag]) -> Vec<String> {
    tags.iter()
        .map(|tag| format!("{:<width$} {}", tag.key(), tag.value(), width = KEY_WIDTH))
        .collect()
}

pub fn print_tags(tags: &[HeadTag]) {
    for line in format_tags(tags) {
        println!("{}", line);
    }
}

/// Format the `check` command summary.
pub fn format_check_output(
    site: &SiteConfig,
    warnings: &[LinkWarning],
    source_root: &Path,
) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Site".to_string());
    lines.push(format!("{}Title: {}", indent(1), site.title));
    if !site.author.is_empty() {
        lines.push(format!("{}Author: {}", indent(1), site.author));
    }
    let config_path = source_root.join("config.toml");
    if config_path.exists() {
        lines.push(format!("{}Source: {}", indent(1), config_path.display()));
    } else {
        lines.push(format!("{}Source: (stock defaults)", indent(1)));
    }

    lines.push(String::new());
    lines.push("Links".to_string());
    for (section, count) in [
        ("header.nav_links", site.header.nav_links.len()),
        ("footer.nav_links", site.footer.nav_links.len()),
        ("page.blog_links", site.page.blog_links.len()),
        ("social_links", site.social_links.len()),
    ] {
        lines.push(format!("{}{}: {}", indent(1), section, count));
    }

    lines.push(String::new());
    lines.push("Progress".to_string());
    if site.progress.enabled {
        lines.push(format!(
            "{}{} → {}",
            indent(1),
            site.progress.start_event,
            site.progress.done_event
        ));
    } else {
        lines.push(format!("{}disabled", indent(1)));
    }

    if !warnings.is_empty() {
        lines.push(String::new());
        lines.push("Warnings".to_string());
        for warning in warnings {
            lines.push(format!("{}{}", indent(1), warning));
        }
    }

    lines
}

pub fn print_check_output(site: &SiteConfig, warnings: &[LinkWarning], source_root: &Path) {
    for line in format_check_output(site, warnings, source_root) {
        println!("{}", line);
    }
}
