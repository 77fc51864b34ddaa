//! Root application shell with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{analytics::Analytics, footer::Footer, nav_header::NavHeader};
use crate::config::{ANALYTICS_MEASUREMENT_ID, FOOTER_LINK_GROUPS, SITE_TITLE};
use crate::pages::home::HomePage;
use crate::state::color_scheme::{ColorSchemeContext, provide_color_scheme};
use crate::state::theme::Theme;
use crate::util::dark_mode;

/// HTML document rendered on the server for SSR + hydration.
///
/// The request's color scheme is resolved here and written onto `<html>` so
/// the first paint already uses it; the hydrated app reads it back.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let preference = dark_mode::initial_preference();

    view! {
        <!DOCTYPE html>
        <html
            lang="en"
            data-mantine-color-scheme=preference.value.as_str()
            data-color-scheme-source=preference.source.as_str()
        >
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="minimum-scale=1, initial-scale=1, width=device-width"/>
                <link rel="shortcut icon" href="/favicon.ico"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the color-scheme context, binds the global toggle shortcut, and
/// lays out header, routed page, footer, and analytics.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let color_scheme = provide_color_scheme(dark_mode::initial_preference());
    bind_toggle_hotkey(color_scheme);

    Effect::new(move |_| dark_mode::apply(color_scheme.get()));

    let shell_class = move || format!("app-shell app-shell--{}", color_scheme.get());
    let theme_vars = move || Theme::for_scheme(color_scheme.get()).css_vars();

    view! {
        <Stylesheet id="leptos" href="/pkg/open-auburn.css"/>
        <Title text=SITE_TITLE/>

        <div class=shell_class style=theme_vars>
            <NavHeader/>
            <main class="app-shell__main">
                <Router>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                    </Routes>
                </Router>
            </main>
            <Footer groups=FOOTER_LINK_GROUPS/>
            <Analytics measurement_id=ANALYTICS_MEASUREMENT_ID/>
        </div>
    }
}

/// Listen for the color-scheme shortcut on the window for the app's lifetime.
fn bind_toggle_hotkey(color_scheme: ColorSchemeContext) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        use crate::util::hotkeys::{self, Hotkey, KeyStroke, TOGGLE_COLOR_SCHEME};

        let hotkey = match TOGGLE_COLOR_SCHEME.parse::<Hotkey>() {
            Ok(hotkey) => hotkey,
            Err(e) => {
                log::error!("color scheme shortcut disabled: {e}");
                return;
            }
        };

        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            let ignored = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .is_some_and(|el| {
                    let editable = el
                        .dyn_ref::<web_sys::HtmlElement>()
                        .is_some_and(web_sys::HtmlElement::is_content_editable);
                    hotkeys::is_ignored_target(&el.tag_name(), editable)
                });
            if ignored || !hotkey.matches(&KeyStroke::from(&ev)) {
                return;
            }
            ev.prevent_default();
            color_scheme.toggle(None);
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = color_scheme;
    }
}
