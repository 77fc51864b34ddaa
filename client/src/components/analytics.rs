//! Analytics tag injection.
//!
//! The loader and bootstrap scripts are only mounted once the app is
//! interactive, so they never block the server render or hydration.

use leptos::prelude::*;

use crate::config::{analytics_bootstrap, analytics_loader_src};

/// Mounts the gtag scripts for `measurement_id` after hydration.
#[component]
pub fn Analytics(measurement_id: &'static str) -> impl IntoView {
    let (interactive, set_interactive) = signal(false);

    // Effects only run in the browser.
    Effect::new(move |_| set_interactive.set(true));

    view! {
        <Show when=move || interactive.get()>
            <script src=analytics_loader_src(measurement_id)></script>
            <script id="google-analytics" inner_html=analytics_bootstrap(measurement_id)></script>
        </Show>
    }
}
