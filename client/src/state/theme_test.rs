use super::*;

#[test]
fn dark_uses_orange_primary() {
    assert_eq!(Theme::for_scheme(ColorScheme::Dark).primary_color, "orange");
}

#[test]
fn light_uses_blue_primary() {
    assert_eq!(Theme::for_scheme(ColorScheme::Light).primary_color, "blue");
}

#[test]
fn typography_is_scheme_independent() {
    let dark = Theme::for_scheme(ColorScheme::Dark);
    let light = Theme::for_scheme(ColorScheme::Light);
    assert_eq!(dark.primary_shade, 5);
    assert_eq!(dark.font_family, light.font_family);
    assert_eq!(dark.heading_font_weight, 800);
}

#[test]
fn css_vars_reference_primary_shade_and_scheme() {
    let css = Theme::for_scheme(ColorScheme::Light).css_vars();
    assert!(css.contains("--primary-color: var(--color-blue-5);"));
    assert!(css.contains("--heading-font-weight: 800;"));
    assert!(css.ends_with("color-scheme: light;"));
}
