//! Theme configuration handshake
//!
//! Declares the capabilities the site exposes to its serving host and the
//! single stylesheet asset the host serves. Pure data, no logic.

use serde::{Deserialize, Serialize};

/// Href under which the registered stylesheet is served
pub const STYLESHEET_HREF: &str = "/style.css";

/// HTML5 structural-markup surfaces the theme declares support for
pub const HTML5_SURFACES: [&str; 7] = [
    "search-form",
    "comment-form",
    "comment-list",
    "gallery",
    "caption",
    "style",
    "script",
];

/// Declared theme capabilities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeSupports {
    /// Document title is rendered by the layout, not hard-coded by the host
    pub title_tag: bool,

    /// Featured images on content items
    pub post_thumbnails: bool,

    /// HTML5 structural markup surfaces
    pub html5: Vec<String>,
}

/// A single registered stylesheet asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stylesheet {
    /// Registration handle
    pub handle: String,

    /// Public href the host serves the asset under
    pub href: String,

    /// Asset version, used for cache busting
    pub version: String,
}

/// Theme configuration consumed by the serving host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub supports: ThemeSupports,
    pub stylesheet: Stylesheet,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            supports: ThemeSupports {
                title_tag: true,
                post_thumbnails: true,
                html5: HTML5_SURFACES.iter().map(|s| s.to_string()).collect(),
            },
            stylesheet: Stylesheet {
                handle: "hm-style".to_string(),
                href: STYLESHEET_HREF.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}
