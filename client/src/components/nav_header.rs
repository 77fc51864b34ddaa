//! Site header with brand, primary navigation, and the color-scheme toggle.

use leptos::prelude::*;

use crate::config::{NAV_LINKS, SITE_TITLE};
use crate::state::color_scheme::{ColorScheme, use_color_scheme};

/// Top navigation bar.
#[component]
pub fn NavHeader() -> impl IntoView {
    let color_scheme = use_color_scheme();

    let on_toggle = move |_| {
        color_scheme.toggle(None);
    };

    view! {
        <header class="nav-header">
            <a href="/" class="nav-header__brand">{SITE_TITLE}</a>
            <nav class="nav-header__links">
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a href=link.link class="nav-header__link">
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <button
                class="nav-header__scheme-toggle"
                title="Toggle color scheme (Ctrl/Cmd + J)"
                on:click=on_toggle
            >
                {move || if color_scheme.get() == ColorScheme::Dark { "☀" } else { "☾" }}
            </button>
        </header>
    }
}
