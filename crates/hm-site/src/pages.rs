//! Static page renderers
//!
//! Each function is a pure projection of the content tables in
//! [`crate::content`] into markup: no input, no state, deterministic
//! output. Section structure per page: hero, content sections, contact.

use maud::{Markup, html};

use crate::content::{
    ADVANTAGES, COLLABORATION_STEPS, FRONT_ABOUT, FRONT_CONTACT, FRONT_CTA_LABEL, FRONT_HERO,
    CONTACT_EMAIL, MAILTO, PARTNER_CASE, PARTNER_PILLS, PARTNERSHIP_CTA_HEADING,
    PARTNERSHIP_CTA_LABEL, PARTNERSHIP_CTA_TEXT, PARTNERSHIP_HERO, PARTNERSHIP_ROLE, SERVICES,
    SITE_META,
};
use crate::layout;

/// Render the consulting front page.
pub fn front_page() -> Markup {
    layout::page(
        &SITE_META,
        html! {
            main class="hm-main" {
                section class="hm-section hm-hero" {
                    p class="hm-eyebrow" { (FRONT_HERO.eyebrow) }
                    h1 class="hm-h1" { (FRONT_HERO.heading) }
                    p class="hm-lead hm-text" { (FRONT_HERO.lead) }
                    a class="hm-btn" href=(MAILTO) { (FRONT_CTA_LABEL) }
                }

                section class="hm-section" {
                    h2 class="hm-h2" { "W czym mogę pomóc?" }
                    div class="hm-grid" {
                        @for card in &SERVICES {
                            article class="hm-card" {
                                h3 class="hm-h3" { (card.title) }
                                p class="hm-text" { (card.text) }
                            }
                        }
                    }
                }

                section class="hm-section hm-about" {
                    h2 class="hm-h2" { "Dlaczego ja?" }
                    p class="hm-text" { (FRONT_ABOUT) }
                }

                section class="hm-section hm-contact" {
                    h2 class="hm-h2" { "Kontakt" }
                    p class="hm-text" { (FRONT_CONTACT) }
                    a class="hm-link" href=(MAILTO) { (CONTACT_EMAIL) }
                }
            }
        },
    )
}

/// Render the investor / general-contractor partnership presentation.
pub fn partnership_page() -> Markup {
    layout::page(
        &SITE_META,
        html! {
            main class="hm-main" {
                section class="hm-section hm-hero" {
                    p class="hm-eyebrow" { (PARTNERSHIP_HERO.eyebrow) }
                    h1 class="hm-h1" { (PARTNERSHIP_HERO.heading) }
                    p class="hm-lead hm-text" { (PARTNERSHIP_HERO.lead) }
                }

                section class="hm-section" {
                    h2 class="hm-h2" { "Kim jestem dla tego układu?" }
                    p class="hm-text" { (PARTNERSHIP_ROLE) }
                    ul class="hm-checklist" {
                        @for item in &ADVANTAGES {
                            li { (item) }
                        }
                    }
                }

                section class="hm-section" {
                    h2 class="hm-h2" { "Dlaczego DEMOCO?" }
                    p class="hm-text" { (PARTNER_CASE) }
                    div class="hm-pills" {
                        @for pill in &PARTNER_PILLS {
                            span { (pill) }
                        }
                    }
                }

                section class="hm-section" {
                    h2 class="hm-h2" { "Model współpracy inwestor – DEMOCO – ja" }
                    div class="hm-grid" {
                        @for step in &COLLABORATION_STEPS {
                            article class="hm-card" {
                                h3 class="hm-h3" { (step.title) }
                                p class="hm-text" { (step.text) }
                            }
                        }
                    }
                }

                section class="hm-section hm-contact" {
                    h2 class="hm-h2" { (PARTNERSHIP_CTA_HEADING) }
                    p class="hm-text" { (PARTNERSHIP_CTA_TEXT) }
                    a class="hm-link" href=(MAILTO) { (PARTNERSHIP_CTA_LABEL) }
                }
            }
        },
    )
}
