//! End-to-end tests for the `folio` binary against `fixtures/`.

use std::path::PathBuf;
use std::process::{Command, Output};

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

fn folio(source: &str, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_folio"))
        .arg("--source")
        .arg(fixtures().join(source))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run folio")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "folio failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn head_for_article_page() {
    let out = stdout(&folio(
        "site",
        &[
            "head",
            "--url",
            "https://x.test/blog/my-post",
            "--title",
            "My Post",
            "--description",
            "desc",
            "--type",
            "article",
        ],
    ));
    assert!(out.contains("<title>My Post | Field Notes</title>"));
    assert!(out.contains(r#"<link rel="canonical" href="https://x.test/blog/my-post/">"#));
    assert!(out.contains(r#"<meta property="og:type" content="article">"#));
}

#[test]
fn head_without_title_uses_site_title() {
    let out = stdout(&folio("site", &["head", "--url", "https://x.test/"]));
    assert!(out.contains("<title>Field Notes</title>"));
    assert!(out.contains(r#"<meta property="og:type" content="website">"#));
}

#[test]
fn head_strips_slash_before_query() {
    let out = stdout(&folio("site", &["head", "--url", "https://x.test/a/?q=1"]));
    assert!(out.contains(r#"href="https://x.test/a?q=1""#));
}

#[test]
fn head_keeps_empty_authority_intact() {
    let out = stdout(&folio("site", &["head", "--url", "file:///"]));
    assert!(out.contains(r#"<link rel="canonical" href="file:///">"#));
}

#[test]
fn head_reads_props_file_and_flags_override() {
    let props = fixtures().join("site/pages/my-post.toml");
    let out = stdout(&folio(
        "site",
        &[
            "head",
            "--url",
            "https://x.test/blog/my-post",
            "--props",
            props.to_str().unwrap(),
            "--title",
            "Renamed",
            "--format",
            "json",
        ],
    ));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["title"], "Renamed | Field Notes");
    assert_eq!(value["description"], "desc");
    assert_eq!(value["page_type"], "article");
    assert_eq!(value["image"]["src"], "/images/my-post.png");
    // Accepted, but not emitted as a tag
    let tags = value["tags"].as_array().unwrap();
    assert!(tags.iter().all(|t| t["property"] != "og:image"));
}

#[test]
fn head_text_format() {
    let out = stdout(&folio(
        "site",
        &["head", "--url", "https://x.test/about", "--format", "text"],
    ));
    assert!(
        out.lines()
            .any(|l| l.starts_with("canonical") && l.ends_with("https://x.test/about/"))
    );
}

#[test]
fn head_rejects_relative_url() {
    let output = folio("site", &["head", "--url", "/blog/my-post"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("absolute URL"));
}

#[test]
fn preview_renders_layout() {
    let out = stdout(&folio("site", &["preview", "--url", "https://x.test/about"]));
    assert!(out.starts_with("<!DOCTYPE html>"));
    assert!(out.contains(
        r#"<li class="current"><a href="/about/" aria-current="page">About</a></li>"#
    ));
    assert!(out.contains("icon-mastodon"));
    assert!(out.contains(r#"data-start-event="astro:before-preparation""#));
}

#[test]
fn check_reports_link_counts() {
    let out = stdout(&folio("site", &["check"]));
    assert!(out.contains("Title: Field Notes"));
    assert!(out.contains("header.nav_links: 3"));
    assert!(out.contains("social_links: 2"));
    assert!(!out.contains("Warnings"));
}

#[test]
fn check_warns_but_succeeds_on_missing_href() {
    let out = stdout(&folio("broken-links", &["check"]));
    assert!(out.contains("header.nav_links[1] has no href"));
}

#[test]
fn gen_config_round_trips_through_check() {
    let out = stdout(&folio("site", &["gen-config"]));
    assert!(out.contains("[progress]"));

    let tmp = tempfile::TempDir::new().unwrap();
    std::fs::write(tmp.path().join("config.toml"), out).unwrap();
    let check = Command::new(env!("CARGO_BIN_EXE_folio"))
        .arg("--source")
        .arg(tmp.path())
        .arg("check")
        .output()
        .unwrap();
    assert!(stdout(&check).contains("Title: My Site"));
}
