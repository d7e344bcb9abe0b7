use leptos::prelude::*;

use crate::scroll::{jump_to_anchor, use_scroll_state};

const LINKS: &[(&str, &str)] = &[
    ("home", "Start"),
    ("about", "Über uns"),
    ("menu", "Speisekarte"),
    ("gallery", "Galerie"),
    ("reservation", "Reservierung"),
    ("contact", "Kontakt"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let scroll = use_scroll_state();
    let menu_open = RwSignal::new(false);

    let links = LINKS
        .iter()
        .map(|&(section, label)| {
            let href = format!("#{section}");
            let target = href.clone();
            view! {
                <li>
                    <a
                        href=href
                        class="nav-link"
                        class=("active", move || scroll.is_active(section))
                        on:click=move |ev| {
                            menu_open.set(false);
                            jump_to_anchor(&ev, &target);
                        }
                    >
                        {label}
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav
            id="navbar"
            class="navbar"
            class=("scrolled", move || scroll.navbar.get().scrolled)
            style=("transform", move || scroll.navbar.get().transform())
        >
            <div class="nav-container">
                <a href="#home" class="nav-logo" on:click=|ev| jump_to_anchor(&ev, "#home")>
                    <span class="logo-icon">"🍴"</span>
                    <span class="logo-text">"The Golden Fork"</span>
                </a>

                <ul id="navMenu" class="nav-menu" class=("active", move || menu_open.get())>
                    {links}
                </ul>

                <div
                    id="navToggle"
                    class="nav-toggle"
                    class=("active", move || menu_open.get())
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </div>
            </div>
        </nav>
    }
}
