//! Canonical content tables for the site
//!
//! Every record here is a compile-time constant. Content is read-only at
//! render time; there is no write path anywhere in this crate. All
//! user-visible copy is Polish, matching the published site.

/// A titled content record rendered as a card inside a section grid.
///
/// The title doubles as the rendering key; records carry no other identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub text: &'static str,
}

/// Top-of-page hero block: eyebrow line, primary heading, lead paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hero {
    pub eyebrow: &'static str,
    pub heading: &'static str,
    pub lead: &'static str,
}

/// Document-level metadata, set once per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub lang: &'a str,
}

/// Site-wide document language
pub const SITE_LANG: &str = "pl";

/// The single contact address used by every contact section
pub const CONTACT_EMAIL: &str = "lukasz@hildebrandtmanagement.com";

/// `mailto:` href for [`CONTACT_EMAIL`], case-sensitive and fixed
pub const MAILTO: &str = "mailto:lukasz@hildebrandtmanagement.com";

/// Document metadata shared by the static pages
pub const SITE_META: PageMeta<'static> = PageMeta {
    title: "Hildebrandt Management | Zarządzanie i rozwój firm",
    description: "Wsparcie zarządcze dla branży budowlanej i nieruchomości: \
                  strategia, interim management, projekty i optymalizacja procesów.",
    lang: SITE_LANG,
};

/// Front page hero
pub const FRONT_HERO: Hero = Hero {
    eyebrow: "Hildebrandt Management",
    heading: "Skuteczne zarządzanie dla firm, które chcą rosnąć szybciej",
    lead: "Wspieram właścicieli i zarządy firm z branży budowlanej oraz nieruchomości \
           w porządkowaniu procesów, prowadzeniu projektów i realizacji ambitnych celów biznesowych.",
};

/// Front page call-to-action button label
pub const FRONT_CTA_LABEL: &str = "Umów konsultację";

/// Service offering cards, front page grid order
pub const SERVICES: [Card; 4] = [
    Card {
        title: "Strategia i rozwój firmy",
        text: "Pomagam właścicielom i zarządom poukładać cele, procesy oraz model działania \
               tak, aby firma rosła szybciej i stabilniej.",
    },
    Card {
        title: "Interim management",
        text: "Wchodzę do organizacji na czas transformacji, przejęcia projektu lub kryzysu \
               operacyjnego i odpowiadam za dowiezienie wyniku.",
    },
    Card {
        title: "Zarządzanie projektami budowlanymi",
        text: "Koordynuję inwestycje mieszkaniowe i komercyjne od etapu przygotowania po \
               odbiory, dbając o budżet, harmonogram i jakość.",
    },
    Card {
        title: "Optymalizacja i automatyzacje AI",
        text: "Wdrażam praktyczne usprawnienia pracy zespołów: standaryzację działań, \
               automatyzację raportowania i narzędzia AI.",
    },
];

/// Front page "Dlaczego ja?" prose
pub const FRONT_ABOUT: &str =
    "Od ponad 18 lat realizuję projekty o dużej skali i wysokiej złożoności. \
     Łączę doświadczenie strategiczne z operacyjnym podejściem: diagnozuję, \
     upraszczam i wdrażam rozwiązania, które dają mierzalny efekt.";

/// Front page contact prose
pub const FRONT_CONTACT: &str =
    "Chcesz porozmawiać o współpracy? Napisz do mnie lub umów krótką, bezpłatną konsultację.";

/// Partnership page hero
pub const PARTNERSHIP_HERO: Hero = Hero {
    eyebrow: "Prezentacja współpracy inwestor ↔ generalny wykonawca",
    heading: "DEMOCO × Hildebrandt Management",
    lead: "Zamieniam napięcie między inwestorem a wykonawcą w przewagę projektową: \
           lepszą kontrolę kosztów, krótsze ścieżki decyzyjne i przewidywalny wynik inwestycji.",
};

/// Partnership page "Kim jestem dla tego układu?" prose
pub const PARTNERSHIP_ROLE: &str =
    "Jestem partnerem, który spina strategię inwestora z realiami placu budowy. \
     Wchodzę tam, gdzie projekty potrzebują leadershipu, porządku operacyjnego i \
     twardego dowożenia efektu biznesowego.";

/// Advantage checklist entries, list order
pub const ADVANTAGES: [&str; 4] = [
    "18+ lat doświadczenia w projektach mieszkaniowych i komercyjnych",
    "Łączenie perspektywy inwestora, generalnego wykonawcy i zarządzania kontraktem",
    "Skuteczne porządkowanie projektów zagrożonych opóźnieniem lub przekroczeniem budżetu",
    "Mocny nacisk na komunikację, transparentność i szybkie decyzje",
];

/// Partnership page "Dlaczego DEMOCO?" prose
pub const PARTNER_CASE: &str =
    "DEMOCO ma DNA wykonawcze i kulturę odpowiedzialności za wynik. To idealny \
     partner dla inwestora, który oczekuje nie tylko budowy, ale sprawnego delivery \
     całej inwestycji od startu do odbiorów.";

/// Partner pill row entries
pub const PARTNER_PILLS: [&str; 4] = [
    "Jakość wykonania",
    "Przewidywalność harmonogramu",
    "Partnerskie podejście",
    "Skalowalność zespołu",
];

/// Collaboration model cards, grid order
pub const COLLABORATION_STEPS: [Card; 4] = [
    Card {
        title: "1. Strategia inwestorska",
        text: "Waliduję model inwestycji: budżet, harmonogram, ryzyka i KPI zanim ruszy wykonanie.",
    },
    Card {
        title: "2. Dowóz kontraktowy",
        text: "DEMOCO otrzymuje klarowny zakres, realistyczny plan i szybkie decyzje operacyjne.",
    },
    Card {
        title: "3. Wspólna egzekucja",
        text: "Prowadzę weekly steering, claim prevention i kontrolę cashflow po obu stronach stołu.",
    },
    Card {
        title: "4. Wynik biznesowy",
        text: "Inwestor dostaje projekt na czas, wykonawca rentowność, a relacja zostaje na kolejne inwestycje.",
    },
];

/// Partnership page closing CTA heading and prose
pub const PARTNERSHIP_CTA_HEADING: &str = "Efekt: mniej tarć, więcej wyniku";

pub const PARTNERSHIP_CTA_TEXT: &str =
    "Jeśli szukasz współpracy, w której inwestor ma kontrolę, a generalny wykonawca \
     ma przestrzeń do skutecznego dowiezienia kontraktu — zbudujmy to razem.";

/// Partnership page mail link label
pub const PARTNERSHIP_CTA_LABEL: &str = "Umów rozmowę: lukasz@hildebrandtmanagement.com";
