use leptos::prelude::*;

use crate::scroll::jump_to_anchor;

/// `<a href="#...">` that smooth-scrolls under the fixed navbar.
#[component]
pub fn Anchor(
    href: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href class=class on:click=move |ev| jump_to_anchor(&ev, href)>
            {children()}
        </a>
    }
}
