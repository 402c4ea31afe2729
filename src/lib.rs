//! # Folio
//!
//! Page metadata synthesis and navigation progress for a personal blog and
//! portfolio site. The host framework renders the pages; this crate decides
//! what goes into every page's `<head>` and drives the progress bar shown
//! while a client-side page transition is in flight.
//!
//! # Architecture
//!
//! ```text
//! config.toml ──▶ SiteConfig (loaded once, read-only)
//!                      │
//! page props ──────────┼──▶ synthesize ──▶ ResolvedMetadata ──▶ head tags (HTML / JSON)
//! request URL ─────────┘
//!
//! start / rendered signals ──▶ ProgressController ──▶ ProgressIndicator
//! ```
//!
//! Synthesis is a pure function: the same props, config, and URL always give
//! the same tags, so it can run per request, at build time, or in parallel
//! without coordination. The only shared state is the [`config::SiteConfig`],
//! which is constructed once and passed by reference to every call.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`metadata`] | Title composition, canonical URL normalization, tag set |
//! | [`head`] | Renders the tag set as an HTML fragment (Maud) or JSON |
//! | [`progress`] | Two-state navigation progress controller and its browser binding |
//! | [`config`] | `config.toml` loading, merging onto defaults, validation, link lint |
//! | [`props`] | Page props files (title, description, image, page type) |
//! | [`layout`] | Header, footer, and nav partials driven by the site config |
//! | [`types`] | Link and logo entries shared by config and layout |
//! | [`output`] | CLI output formatting |
//! | [`logging`] | `tracing` subscriber setup for the binary |
//!
//! # Design Decisions
//!
//! ## Trailing-Slash Canonical URLs
//!
//! Internal links on the site all end in `/`. The canonical tag follows the
//! same spelling so search engines never see two URLs for one page. Query
//! strings are the exception: `/a?q=1` stays slash-free. See
//! [`metadata::normalize_canonical_url`].
//!
//! ## Maud Over Template Engines
//!
//! The head fragment is built with [Maud](https://maud.lambda.xyz/): values
//! are escaped by construction, and there is no template directory to ship.
//!
//! ## Injected Signals
//!
//! The progress controller never touches a browser API. Signals come from any
//! iterator and side effects go through [`progress::ProgressIndicator`], so
//! the full lifecycle is testable without a browser. The shipped script runs
//! the same machine against real document events.

pub mod config;
pub mod head;
pub mod layout;
pub mod logging;
pub mod metadata;
pub mod output;
pub mod progress;
pub mod props;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
