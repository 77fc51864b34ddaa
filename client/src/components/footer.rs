//! Footer rendering static link groups.

use leptos::prelude::*;

use crate::config::{Link, LinkGroup};

/// Footer with one column per link group, in the given order.
#[component]
pub fn Footer(groups: &'static [LinkGroup]) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__groups">
                {groups
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="footer__group">
                                <h3 class="footer__title">{group.title}</h3>
                                <ul class="footer__links">
                                    {group
                                        .links
                                        .iter()
                                        .map(|link| view! { <li><FooterLink link=*link/></li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </footer>
    }
}

#[component]
fn FooterLink(link: Link) -> impl IntoView {
    let external = link.is_external();
    view! {
        <a
            class="footer__link"
            href=link.link
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
        >
            {link.label}
        </a>
    }
}
