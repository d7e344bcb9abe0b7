use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::components::anchor::Anchor;
use crate::config::HERO_SLIDE_MS;
use crate::scroll::use_scroll_state;

const SLIDES: &[&str] = &[
    "/assets/img/hero-1.jpg",
    "/assets/img/hero-2.jpg",
    "/assets/img/hero-3.jpg",
];

pub fn next_slide(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

pub fn parallax_transform(px: f64) -> String {
    format!("translateY({px}px)")
}

/// Inline style of a slide; every slide moves so the active one always follows the scroll.
pub fn slide_style(src: &str, parallax_px: f64) -> String {
    format!(
        "background-image: url('{src}'); transform: {};",
        parallax_transform(parallax_px)
    )
}

#[component]
pub fn Hero() -> impl IntoView {
    let scroll = use_scroll_state();
    let current = RwSignal::new(0usize);

    // lives as long as the hero; a single slide has nothing to rotate
    let ticker = (SLIDES.len() > 1).then(|| {
        Interval::new(HERO_SLIDE_MS, move || {
            current.update(|i| *i = next_slide(*i, SLIDES.len()))
        })
    });
    StoredValue::new_local(ticker);

    let slides = SLIDES
        .iter()
        .enumerate()
        .map(|(i, src)| {
            view! {
                <div
                    class="hero-slide"
                    class=("active", move || current.get() == i)
                    style=move || slide_style(src, scroll.parallax_px.get())
                ></div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="home" class="hero">
            <div class="hero-slider">{slides}</div>
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <span class="hero-subtitle">"Seit 1998 in der Altstadt"</span>
                <h1 class="hero-title">"The Golden Fork"</h1>
                <p class="hero-description">
                    "Saisonale Küche, ehrliche Zutaten und ein Abend, der in Erinnerung bleibt."
                </p>
                <div class="hero-buttons">
                    <Anchor href="#reservation" class="btn btn-primary">"Tisch reservieren"</Anchor>
                    <Anchor href="#menu" class="btn btn-secondary">"Speisekarte"</Anchor>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_wraps_around() {
        assert_eq!(next_slide(0, 3), 1);
        assert_eq!(next_slide(2, 3), 0);
        assert_eq!(next_slide(0, 1), 0);
        assert_eq!(next_slide(5, 0), 0);
    }

    #[test]
    fn every_slide_gets_the_same_parallax_offset() {
        let styles: Vec<_> = SLIDES.iter().map(|src| slide_style(src, 60.0)).collect();
        for (style, src) in styles.iter().zip(SLIDES) {
            assert!(style.starts_with(&format!("background-image: url('{src}');")));
            assert!(style.ends_with("transform: translateY(60px);"));
        }
    }

    #[test]
    fn parallax_formats_pixels() {
        assert_eq!(parallax_transform(0.0), "translateY(0px)");
        assert_eq!(parallax_transform(120.5), "translateY(120.5px)");
    }
}
