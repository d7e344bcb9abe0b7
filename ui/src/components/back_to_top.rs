use leptos::prelude::*;

use crate::scroll::{back_to_top, use_scroll_state};

#[component]
pub fn BackToTop() -> impl IntoView {
    let scroll = use_scroll_state();

    view! {
        <button
            id="backToTop"
            class="back-to-top"
            class=("show", move || scroll.back_to_top.get())
            on:click=move |_| back_to_top()
        >
            "↑"
        </button>
    }
}
