//! Thresholds and timings for the page's interactive behaviour.

/// Scroll-position thresholds, all in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// Past this the navbar switches to its compact `scrolled` style.
    pub scrolled_after: u32,
    /// Past this the navbar hides while scrolling down.
    pub hide_after: u32,
    /// Past this the back-to-top button is shown.
    pub back_to_top_after: u32,
    /// Added on top of the header height when probing for the active section.
    pub highlight_lead: i32,
    /// Quiescence window for the active-link highlight.
    pub highlight_debounce_ms: u32,
    /// Hero translate per scrolled pixel.
    pub parallax_speed: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            scrolled_after: 100,
            hide_after: 300,
            back_to_top_after: 300,
            highlight_lead: 50,
            highlight_debounce_ms: 100,
            parallax_speed: 0.5,
        }
    }
}

/// IntersectionObserver setup for reveal-on-scroll.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    pub selector: &'static str,
    pub threshold: f64,
    pub root_margin: &'static str,
    /// Delay between parking the element at opacity 0 and starting the transition.
    pub settle_ms: u32,
    pub transition: &'static str,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".section-header, .feature-card, .menu-item, .gallery-item, \
                       .testimonial-card, .about-content, .reservation-content",
            threshold: 0.1,
            root_margin: "0px 0px -100px 0px",
            settle_ms: 100,
            transition: "all 0.8s cubic-bezier(0.4, 0, 0.2, 1)",
        }
    }
}

pub const RESERVATION_REVERT_MS: u32 = 5_000;
pub const NEWSLETTER_REVERT_MS: u32 = 3_000;
pub const LIGHTBOX_FADE_MS: u32 = 300;
pub const HERO_SLIDE_MS: u32 = 5_000;
pub const LOADER_DELAY_MS: u32 = 500;
pub const LOADER_FADE_MS: u32 = 300;
