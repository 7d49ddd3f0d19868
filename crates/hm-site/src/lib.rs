//! hm-site renders the Hildebrandt Management marketing site from
//! compile-time content tables into HTML markup.
//!
//! The crate exposes three render entry points: the consulting front page,
//! the investor/general-contractor partnership page, and a generic post
//! index fed by an external [`PostProvider`]. All rendering is pure: the
//! same inputs always produce byte-identical markup.

pub mod content;
pub mod error;
pub mod layout;
pub mod pages;
pub mod posts;
pub mod theme;

// Re-export core types
pub use content::{CONTACT_EMAIL, Card, Hero, MAILTO, PageMeta, SITE_LANG};
pub use error::{Result, SiteError};
pub use pages::{front_page, partnership_page};
pub use posts::{EMPTY_PLACEHOLDER, Post, PostProvider, SiteInfo, post_index};
pub use theme::Theme;

/// Get the library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
