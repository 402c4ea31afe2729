//! Document-head rendering.
//!
//! Turns a [`ResolvedMetadata`] into something the host can inject verbatim:
//! an HTML fragment for templates, or JSON for hosts that build their own
//! `<head>` elements.
//!
//! Uses [maud](https://maud.lambda.xyz/) so every value is escaped on the way
//! out; titles and descriptions come straight from content files.

use crate::metadata::{HeadTag, ResolvedMetadata};
use maud::{Markup, html};
use serde::Serialize;

/// Render the head tag set as an HTML fragment.
pub fn render_head_tags(resolved: &ResolvedMetadata) -> Markup {
    html! {
        @for tag in resolved.tags() {
            (render_tag(&tag))
        }
    }
}

fn render_tag(tag: &HeadTag) -> Markup {
    html! {
        @match tag {
            HeadTag::Title { text } => {
                title { (text) }
            }
            HeadTag::Canonical { href } => {
                link rel="canonical" href=(href);
            }
            HeadTag::MetaName { name, content } => {
                meta name=(name) content=(content);
            }
            HeadTag::MetaProperty { property, content } => {
                meta property=(property) content=(content);
            }
        }
    }
}

/// JSON shape of `folio head --format json`.
#[derive(Debug, Serialize)]
pub struct HeadDocument<'a> {
    #[serde(flatten)]
    pub metadata: &'a ResolvedMetadata,
    pub tags: Vec<HeadTag>,
}

/// Serialize the resolved metadata together with its tag set.
pub fn head_json(resolved: &ResolvedMetadata) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&HeadDocument {
        metadata: resolved,
        tags: resolved.tags(),
    })
}
