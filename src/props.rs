//! Page props files.
//!
//! A page's overrides can live in a small TOML file next to its content,
//! mirroring the front matter of a blog post:
//!
//! ```toml
//! title = "My Post"
//! description = "A short summary"
//! page_type = "article"
//!
//! [image]
//! src = "/images/cover.png"
//! alt = "Cover"
//! ```
//!
//! Every key is optional. The request URL is never part of the file; it comes
//! from whoever is rendering the page.

use crate::metadata::{PageMetadataRequest, PageType, SocialImage};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PropsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Page-level overrides as written in a props file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageProps {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<SocialImage>,
    pub page_type: PageType,
}

impl PageProps {
    /// Attach the request URL to produce a synthesis request.
    pub fn into_request(self, request_url: impl Into<String>) -> PageMetadataRequest {
        PageMetadataRequest {
            title: self.title,
            description: self.description,
            image: self.image,
            page_type: self.page_type,
            request_url: request_url.into(),
        }
    }
}

/// Parse props from TOML text.
pub fn parse_props(content: &str) -> Result<PageProps, PropsError> {
    Ok(toml::from_str(content)?)
}

/// Read and parse a props file.
pub fn load_props(path: &Path) -> Result<PageProps, PropsError> {
    let content = fs::read_to_string(path)?;
    let props = parse_props(&content)?;
    tracing::debug!(path = %path.display(), ?props, "page props loaded");
    Ok(props)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_file_is_all_defaults() {
        let props = parse_props("").unwrap();
        assert_eq!(props, PageProps::default());
        assert_eq!(props.page_type, PageType::Website);
    }

    #[test]
    fn parse_full_props() {
        let props = parse_props(
            r#"
title = "My Post"
description = "desc"
page_type = "article"

[image]
src = "/cover.png"
alt = "Cover"
"#,
        )
        .unwrap();
        assert_eq!(props.title.as_deref(), Some("My Post"));
        assert_eq!(props.page_type, PageType::Article);
        assert_eq!(props.image.unwrap().alt.as_deref(), Some("Cover"));
    }

    #[test]
    fn image_alt_is_optional() {
        let props = parse_props("image = { src = \"/a.png\" }").unwrap();
        assert_eq!(props.image.unwrap().alt, None);
    }

    #[test]
    fn unknown_page_type_rejected() {
        assert!(parse_props(r#"page_type = "gallery""#).is_err());
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(parse_props(r#"url = "https://x.test/""#).is_err());
    }

    #[test]
    fn into_request_keeps_every_field() {
        let props = PageProps {
            title: Some("T".to_string()),
            description: Some("D".to_string()),
            image: None,
            page_type: PageType::Article,
        };
        let request = props.into_request("https://x.test/t");
        assert_eq!(request.title.as_deref(), Some("T"));
        assert_eq!(request.description.as_deref(), Some("D"));
        assert_eq!(request.page_type, PageType::Article);
        assert_eq!(request.request_url, "https://x.test/t");
    }

    #[test]
    fn load_props_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = load_props(&tmp.path().join("missing.toml"));
        assert!(matches!(result, Err(PropsError::Io(_))));
    }

    #[test]
    fn load_props_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("post.toml");
        fs::write(&path, r#"title = "From disk""#).unwrap();
        assert_eq!(
            load_props(&path).unwrap().title.as_deref(),
            Some("From disk")
        );
    }
}
