use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::Router;

use crate::components::{
    anchor::Anchor, back_to_top::BackToTop, loading::LoadingScreen, navbar::Navbar,
    newsletter::NewsletterForm,
};
use crate::config::{RevealConfig, ScrollConfig};
use crate::reveal;
use crate::routes::RoutesMenu;
use crate::scroll::{provide_scroll_state, track_window_scroll};

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <span class="logo-text">"The Golden Fork"</span>
                    <p>"Saisonale Küche in der Altstadt."</p>
                </div>
                <nav class="footer-links">
                    <Anchor href="#menu">"Speisekarte"</Anchor>
                    <Anchor href="#reservation">"Reservierung"</Anchor>
                    <Anchor href="#contact">"Kontakt"</Anchor>
                </nav>
                <div class="footer-newsletter">
                    <h4>"Newsletter"</h4>
                    <p>"Neue Karten und Weinabende zuerst erfahren."</p>
                    <NewsletterForm/>
                </div>
            </div>
            <p class="footer-bottom">"© 2026 The Golden Fork"</p>
        </footer>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let scroll = provide_scroll_state();

    // effects run after mount, so the sections are in the DOM by now
    Effect::new(move |_| {
        if let Err(e) = track_window_scroll(scroll, ScrollConfig::default()) {
            error!("scroll tracking disabled: {e:#}");
        }
        match reveal::observe(&RevealConfig::default()) {
            Ok(n) => log!("reveal: observing {n} elements"),
            Err(e) => error!("reveal animations disabled: {e:#}"),
        }
    });

    view! {
      <Title text="The Golden Fork – Restaurant"/>
      <Stylesheet href="/assets/css/style.css"/>
      <LoadingScreen/>
      <Router>
        <Navbar/>
        <main>
          <RoutesMenu/>
        </main>
        <Footer/>
        <BackToTop/>
      </Router>
    }
}
