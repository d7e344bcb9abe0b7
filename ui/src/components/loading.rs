use leptos::logging::error;
use leptos::prelude::*;
use web_sys::Event;

use crate::config::{LOADER_DELAY_MS, LOADER_FADE_MS};
use crate::dom;
use crate::timer::{Scheduler, TaskSlot, WebScheduler};

/// Page-load overlay: shown, then faded to opacity 0, then unmounted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Loader {
    #[default]
    Shown,
    Fading,
    Gone,
}

impl Loader {
    pub fn opacity(self) -> &'static str {
        match self {
            Loader::Shown => "1",
            _ => "0",
        }
    }

    pub fn is_mounted(self) -> bool {
        self != Loader::Gone
    }
}

/// Two slots so neither timer has to re-arm itself from inside its own callback.
pub struct LoaderTimers<S: Scheduler> {
    fade: TaskSlot<S>,
    remove: TaskSlot<S>,
}

impl<S: Scheduler + Clone> LoaderTimers<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            fade: TaskSlot::new(scheduler.clone()),
            remove: TaskSlot::new(scheduler),
        }
    }
}

impl<S: Scheduler> LoaderTimers<S> {
    pub fn start(&mut self, state: RwSignal<Loader>) {
        self.fade
            .arm(LOADER_DELAY_MS, move || state.set(Loader::Fading));
        self.remove
            .arm(LOADER_DELAY_MS + LOADER_FADE_MS, move || state.set(Loader::Gone));
    }
}

#[component]
pub fn LoadingScreen() -> impl IntoView {
    let state = RwSignal::new(Loader::default());
    let timers = StoredValue::new_local(LoaderTimers::new(WebScheduler));

    Effect::new(move |_| {
        let start = move || timers.update_value(|t| t.start(state));

        let loaded = dom::document().is_some_and(|d| d.ready_state() == "complete");
        if loaded {
            start();
            return;
        }
        let Some(win) = dom::window() else {
            start();
            return;
        };
        if let Err(e) = dom::add_listener(&win, "load", move |_: Event| start()) {
            error!("loading screen: {e:#}");
            start();
        }
    });

    move || {
        let current = state.get();
        current.is_mounted().then(|| {
            view! {
                <div class="loading" style=("opacity", current.opacity())>
                    <div class="loading-spinner"></div>
                </div>
            }
        })
    }
}
