//! Page layout wrapper
//!
//! Wraps page body markup with the document shell: DOCTYPE, language tag,
//! head metadata, and the registered theme stylesheet. No per-request
//! variation and no computation happen here.

use maud::{DOCTYPE, Markup, html};

use crate::content::PageMeta;
use crate::theme;

/// Wrap page-specific body markup in a complete HTML document.
pub fn page(meta: &PageMeta, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(meta.lang) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="description" content=(meta.description);
                title { (meta.title) }
                link rel="stylesheet" href=(theme::STYLESHEET_HREF);
            }
            body {
                (body)
            }
        }
    }
}
