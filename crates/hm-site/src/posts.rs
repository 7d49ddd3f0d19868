//! Post provider contract and the generic post index template
//!
//! Posts are owned by an external host; this crate only reads them and
//! projects title, permalink, and excerpt into markup. The index template
//! holds the one conditional branch in the system: an empty post sequence
//! renders a fixed placeholder instead of an empty section.

use async_trait::async_trait;
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::content::{PageMeta, SITE_LANG};
use crate::error::Result;
use crate::layout;

/// Placeholder rendered when the host supplies no posts
pub const EMPTY_PLACEHOLDER: &str = "Brak treści do wyświetlenia.";

/// A content item supplied by the external host. Read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub permalink: String,
    pub excerpt: String,
}

/// Site-level metadata supplied by the external host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    pub description: String,
}

/// Content source contract the serving host implements
///
/// The provider returns already-materialized data; retries, paging, and
/// availability are the host's concern, not this crate's.
#[async_trait]
pub trait PostProvider: Send + Sync {
    /// Site name and description for the index hero
    async fn site_info(&self) -> Result<SiteInfo>;

    /// Posts for the index, newest first
    async fn recent_posts(&self) -> Result<Vec<Post>>;
}

/// Render the post index: site hero, then one article per post.
pub fn post_index(site: &SiteInfo, posts: &[Post]) -> Markup {
    let meta = PageMeta {
        title: &site.name,
        description: &site.description,
        lang: SITE_LANG,
    };
    layout::page(
        &meta,
        html! {
            main class="hm-main" {
                section class="hm-section hm-hero" {
                    h1 class="hm-h1" { (site.name) }
                    p class="hm-lead hm-text" { (site.description) }
                }

                section class="hm-section" {
                    @if posts.is_empty() {
                        p class="hm-text" { (EMPTY_PLACEHOLDER) }
                    } @else {
                        @for post in posts {
                            article {
                                h2 class="hm-h2" {
                                    a href=(post.permalink) { (post.title) }
                                }
                                div class="hm-text" { (post.excerpt) }
                            }
                        }
                    }
                }
            }
        },
    )
}
