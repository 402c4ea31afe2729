//! Layout partials driven by the site config.
//!
//! The host framework owns page templates; these partials cover the pieces
//! that are pure functions of [`SiteConfig`] and the resolved metadata, so
//! every page renders its head, header, and footer the same way. The
//! `preview` command stitches them into a full document for inspection.
//!
//! Link order is display order, exactly as listed in `config.toml`.

use crate::config::SiteConfig;
use crate::head::render_head_tags;
use crate::metadata::ResolvedMetadata;
use crate::progress::render_progress_indicator;
use crate::types::{Logo, NavLink, SocialLink};
use maud::{DOCTYPE, Markup, html};

/// Renders the base HTML document structure.
pub fn base_document(resolved: &ResolvedMetadata, site: &SiteConfig, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @if !site.author.is_empty() {
                    meta name="author" content=(site.author);
                }
                (render_head_tags(resolved))
            }
            body {
                (render_progress_indicator(&site.progress))
                (content)
            }
        }
    }
}

/// Renders the site header: logo plus primary navigation.
pub fn site_header(site: &SiteConfig, current_path: &str) -> Markup {
    html! {
        header.site-header {
            a.logo href="/" {
                (render_logo(&site.header.logo, &site.title))
            }
            nav.site-nav {
                (render_nav(&site.header.nav_links, current_path))
            }
        }
    }
}

fn render_logo(logo: &Logo, site_title: &str) -> Markup {
    html! {
        @if logo.src.is_empty() {
            span.site-title { (site_title) }
        } @else {
            @let alt = if logo.alt.is_empty() { site_title } else { logo.alt.as_str() };
            img src=(logo.src) alt=(alt);
        }
    }
}

/// Renders a navigation list, marking the entry that matches `current_path`.
pub fn render_nav(links: &[NavLink], current_path: &str) -> Markup {
    html! {
        ul {
            @for link in links {
                @let is_current = is_current(&link.href, current_path);
                li class=[is_current.then_some("current")] {
                    a href=(link.href) aria-current=[is_current.then_some("page")] { (link.text) }
                }
            }
        }
    }
}

/// Whether a nav link points at the page being rendered or one of its parents.
///
/// The home link (`/`) only matches the home page itself.
fn is_current(href: &str, current_path: &str) -> bool {
    if href.is_empty() {
        return false;
    }
    if href == "/" {
        return current_path == "/";
    }
    let href = href.trim_end_matches('/');
    let path = current_path.trim_end_matches('/');
    path == href || path.starts_with(&format!("{href}/"))
}

/// Renders the social icon links.
pub fn render_social_links(links: &[SocialLink]) -> Markup {
    html! {
        ul.social-links {
            @for link in links {
                li {
                    a href=(link.href) title=(link.text) target="_blank" rel="noopener me" {
                        span class={ "icon icon-" (link.icon) } aria-hidden="true" {}
                        span.visually-hidden { (link.text) }
                    }
                }
            }
        }
    }
}

/// Renders the site footer: secondary navigation, social links, author line.
pub fn site_footer(site: &SiteConfig, current_path: &str) -> Markup {
    html! {
        footer.site-footer {
            nav.footer-nav {
                (render_nav(&site.footer.nav_links, current_path))
            }
            (render_social_links(&site.social_links))
            @if !site.author.is_empty() {
                p.site-author { "© " (site.author) }
            }
        }
    }
}

/// Renders the links shown alongside blog posts.
pub fn render_blog_links(site: &SiteConfig, current_path: &str) -> Markup {
    html! {
        @if !site.page.blog_links.is_empty() {
            nav.blog-links {
                (render_nav(&site.page.blog_links, current_path))
            }
        }
    }
}

/// Renders a full preview document around an empty content area.
pub fn render_preview(
    resolved: &ResolvedMetadata,
    site: &SiteConfig,
    current_path: &str,
) -> Markup {
    let content = html! {
        (site_header(site, current_path))
        main {
            article {
                h1 { (resolved.title) }
                @if !resolved.description.is_empty() {
                    p.description { (resolved.description) }
                }
            }
            (render_blog_links(site, current_path))
        }
        (site_footer(site, current_path))
    };
    base_document(resolved, site, content)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{PageMetadataRequest, synthesize};
    use crate::test_helpers::*;

    #[test]
    fn nav_renders_items_in_order() {
        let links = vec![NavLink::new("Blog", "/blog/"), NavLink::new("Projects", "/projects/")];
        let html = render_nav(&links, "/").into_string();
        let blog = html.find("Blog").unwrap();
        let projects = html.find("Projects").unwrap();
        assert!(blog < projects);
        assert!(html.contains(r#"href="/blog/""#));
    }

    #[test]
    fn nav_marks_current_item() {
        let links = vec![NavLink::new("Blog", "/blog/"), NavLink::new("About", "/about/")];
        let html = render_nav(&links, "/about/").into_string();
        assert_eq!(html.matches(r#"class="current""#).count(), 1);
        assert!(html.contains(r#"aria-current="page""#));
    }

    #[test]
    fn nav_marks_parent_of_nested_page() {
        assert!(is_current("/blog/", "/blog/my-post/"));
        assert!(!is_current("/blog/", "/blogroll/"));
    }

    #[test]
    fn home_link_only_current_on_home() {
        assert!(is_current("/", "/"));
        assert!(!is_current("/", "/blog/"));
    }

    #[test]
    fn missing_href_renders_broken_link() {
        let links = vec![NavLink::new("Broken", "")];
        let html = render_nav(&links, "/").into_string();
        assert!(html.contains(r#"<a href="">Broken</a>"#));
    }

    #[test]
    fn logo_falls_back_to_site_title() {
        let site = sample_config();
        let mut bare = site.clone();
        bare.header.logo = Logo::default();

        assert!(site_header(&site, "/").into_string().contains(r#"src="/logo.svg""#));
        assert!(
            site_header(&bare, "/")
                .into_string()
                .contains("<span class=\"site-title\">Field Notes</span>")
        );
    }

    #[test]
    fn footer_renders_social_links() {
        let html = site_footer(&sample_config(), "/").into_string();
        assert!(html.contains("icon-github"));
        assert!(html.contains("https://github.com/jane"));
        assert!(html.contains("© Jane Doe"));
    }

    #[test]
    fn blog_links_omitted_when_empty() {
        let mut site = sample_config();
        site.page.blog_links.clear();
        assert_eq!(render_blog_links(&site, "/").into_string(), "");
    }

    #[test]
    fn base_document_includes_doctype_and_head_tags() {
        let site = sample_config();
        let resolved = synthesize(&article_request(), &site);
        let doc = base_document(&resolved, &site, html! { p { "body" } }).into_string();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(r#"<link rel="canonical""#));
        assert!(doc.contains(r#"<meta name="author" content="Jane Doe">"#));
        assert!(doc.contains("nav-progress"));
    }

    #[test]
    fn preview_renders_full_page() {
        let site = sample_config();
        let resolved = synthesize(&PageMetadataRequest::new("https://x.test/about"), &site);
        let doc = render_preview(&resolved, &site, "/about/").into_string();
        assert!(doc.contains("site-header"));
        assert!(doc.contains("site-footer"));
        assert!(doc.contains("<h1>Field Notes</h1>"));
    }
}
