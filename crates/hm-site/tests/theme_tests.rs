use hm_site::Theme;
use hm_site::theme::{HTML5_SURFACES, STYLESHEET_HREF};

#[test]
fn default_theme_registers_one_stylesheet() {
    let theme = Theme::default();

    assert_eq!(theme.stylesheet.handle, "hm-style");
    assert_eq!(theme.stylesheet.href, STYLESHEET_HREF);
    assert_eq!(theme.stylesheet.version, hm_site::version());
}

#[test]
fn default_theme_declares_expected_capabilities() {
    let theme = Theme::default();

    assert!(theme.supports.title_tag);
    assert!(theme.supports.post_thumbnails);
    assert_eq!(theme.supports.html5.len(), HTML5_SURFACES.len());
    for surface in HTML5_SURFACES {
        assert!(theme.supports.html5.iter().any(|s| s == surface));
    }
}
