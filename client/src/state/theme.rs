//! Presentation values derived from the active color scheme.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::color_scheme::ColorScheme;

/// Typography and accent settings for one color scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub color_scheme: ColorScheme,
    pub primary_color: &'static str,
    pub primary_shade: u8,
    pub font_family: &'static str,
    pub font_family_monospace: &'static str,
    pub heading_font_family: &'static str,
    pub heading_font_weight: u16,
}

impl Theme {
    pub fn for_scheme(color_scheme: ColorScheme) -> Self {
        Self {
            color_scheme,
            primary_color: match color_scheme {
                ColorScheme::Dark => "orange",
                ColorScheme::Light => "blue",
            },
            primary_shade: 5,
            font_family: "'Noto Sans', sans-serif",
            font_family_monospace: "'Noto Sans Mono', monospace",
            heading_font_family: "'Poppins', sans-serif",
            heading_font_weight: 800,
        }
    }

    /// Inline CSS custom properties for the app shell element.
    pub fn css_vars(&self) -> String {
        format!(
            "--primary-color: var(--color-{color}-{shade}); \
             --font-family: {font}; \
             --font-family-monospace: {mono}; \
             --heading-font-family: {heading}; \
             --heading-font-weight: {weight}; \
             color-scheme: {scheme};",
            color = self.primary_color,
            shade = self.primary_shade,
            font = self.font_family,
            mono = self.font_family_monospace,
            heading = self.heading_font_family,
            weight = self.heading_font_weight,
            scheme = self.color_scheme,
        )
    }
}
