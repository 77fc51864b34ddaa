//! Landing page.

use leptos::prelude::*;

use crate::config::SITE_TITLE;

/// Root route content.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home">
            <h1 class="home__title">{SITE_TITLE}</h1>
            <p class="home__tagline">"Open data and open source for the Auburn community."</p>
        </section>
    }
}
