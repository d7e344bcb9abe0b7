pub mod smooth;
pub mod tracker;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Result, anyhow};
use leptos::prelude::*;
use web_sys::{Event, MouseEvent};

use crate::config::ScrollConfig;
use crate::dom;
use crate::timer::{Debounced, Scheduler, WebScheduler};
use tracker::{NavbarMode, ScrollTracker, SectionBounds};

/// Scroll-derived state the page binds classes and styles to.
#[derive(Clone, Copy)]
pub struct ScrollState {
    pub navbar: RwSignal<NavbarMode>,
    pub back_to_top: RwSignal<bool>,
    pub active_section: RwSignal<Option<String>>,
    pub parallax_px: RwSignal<f64>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            navbar: RwSignal::new(NavbarMode::default()),
            back_to_top: RwSignal::new(false),
            active_section: RwSignal::new(None),
            parallax_px: RwSignal::new(0.0),
        }
    }

    pub fn is_active(&self, section: &str) -> bool {
        self.active_section
            .with(|active| active.as_deref() == Some(section))
    }
}

pub fn provide_scroll_state() -> ScrollState {
    let state = ScrollState::new();
    provide_context(state);
    state
}

pub fn use_scroll_state() -> ScrollState {
    expect_context::<ScrollState>()
}

fn set_if_changed<T: PartialEq + Send + Sync + 'static>(sig: RwSignal<T>, value: T) {
    if sig.with_untracked(|old| *old != value) {
        sig.set(value);
    }
}

/// Feeds scroll signals through a [`ScrollTracker`] into [`ScrollState`].
///
/// Navbar, back-to-top and parallax update on every call; the active nav
/// link goes through a debounce so it settles once scrolling pauses.
pub struct ScrollDriver<S: Scheduler> {
    tracker: ScrollTracker,
    state: ScrollState,
    highlight: Debounced<S, Option<String>>,
}

impl<S: Scheduler> ScrollDriver<S> {
    pub fn new(state: ScrollState, config: ScrollConfig, scheduler: S) -> Self {
        let highlight = Debounced::new(
            scheduler,
            config.highlight_debounce_ms,
            move |active: Option<String>| set_if_changed(state.active_section, active),
        );

        Self {
            tracker: ScrollTracker::new(config),
            state,
            highlight,
        }
    }

    pub fn on_scroll(&mut self, position: u32, header_height: i32, sections: &[SectionBounds]) {
        let frame = self.tracker.on_scroll(position, header_height, sections);

        set_if_changed(self.state.navbar, frame.navbar);
        set_if_changed(self.state.back_to_top, frame.back_to_top);
        set_if_changed(self.state.parallax_px, frame.parallax_px);
        self.highlight.call(frame.active_section);
    }
}

/// Hooks the window `scroll` event up to a [`ScrollDriver`].
pub fn track_window_scroll(state: ScrollState, config: ScrollConfig) -> Result<()> {
    let win = dom::window().ok_or_else(|| anyhow!("no window"))?;

    let driver = Rc::new(RefCell::new(ScrollDriver::new(state, config, WebScheduler)));

    let on_scroll = move || {
        let position = dom::scroll_position();
        let header = dom::query("#navbar").map(|n| n.offset_height()).unwrap_or(0);
        let sections = dom::section_layout();

        driver.borrow_mut().on_scroll(position, header, &sections);
    };

    // page may be restored mid-scroll
    on_scroll();
    dom::add_listener(&win, "scroll", move |_: Event| on_scroll())
}

/// Click handler for in-page links: smooth-scroll so the section lands under the navbar.
pub fn jump_to_anchor(ev: &MouseEvent, href: &str) {
    ev.prevent_default();

    let Some(target) = smooth::anchor_target(href) else {
        return;
    };
    let Some(section) = dom::query(target) else {
        return;
    };
    let nav_height = dom::query("#navbar").map(|n| n.offset_height()).unwrap_or(0);
    dom::smooth_scroll_to(smooth::scroll_target(section.offset_top(), nav_height));
}

pub fn back_to_top() {
    dom::smooth_scroll_to(0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::manual::ManualScheduler;
    use leptos::reactive::owner::Owner;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("about", 0, 500),
            SectionBounds::new("menu", 500, 500),
        ]
    }

    #[test]
    fn highlight_settles_after_burst_while_navbar_follows_every_event() {
        Owner::new().with(|| {
            let clock = ManualScheduler::default();
            let state = ScrollState::new();
            let mut driver = ScrollDriver::new(state, ScrollConfig::default(), clock.clone());
            let layout = sections();

            driver.on_scroll(550, 80, &layout);
            assert!(state.navbar.get_untracked().scrolled);
            assert!(state.navbar.get_untracked().hidden);
            assert!(state.back_to_top.get_untracked());
            assert_eq!(state.active_section.get_untracked(), None);

            clock.advance(50);
            driver.on_scroll(560, 80, &layout);
            assert!(state.navbar.get_untracked().hidden);
            assert_eq!(state.active_section.get_untracked(), None);

            clock.advance(50);
            driver.on_scroll(300, 80, &layout);
            assert!(!state.navbar.get_untracked().hidden, "scrolling up shows it again");
            assert!(state.navbar.get_untracked().scrolled);
            assert!(!state.back_to_top.get_untracked());
            assert_eq!(state.parallax_px.get_untracked(), 150.0);

            clock.advance(99);
            assert_eq!(state.active_section.get_untracked(), None, "burst not quiet yet");

            clock.advance(1);
            // 300 + 80 + 50 = 430
            assert_eq!(state.active_section.get_untracked().as_deref(), Some("about"));
            assert!(state.is_active("about"));
            assert!(!state.is_active("menu"));
        });
    }

    #[test]
    fn highlight_clears_when_no_section_matches() {
        Owner::new().with(|| {
            let clock = ManualScheduler::default();
            let state = ScrollState::new();
            let mut driver = ScrollDriver::new(state, ScrollConfig::default(), clock.clone());
            let layout = sections();

            driver.on_scroll(600, 80, &layout);
            clock.advance(100);
            assert_eq!(state.active_section.get_untracked().as_deref(), Some("menu"));

            driver.on_scroll(5_000, 80, &layout);
            clock.advance(100);
            assert_eq!(state.active_section.get_untracked(), None);
        });
    }
}
