use leptos::logging::{error, log};
use leptos::prelude::*;
use serde::Serialize;

use crate::config::NEWSLETTER_REVERT_MS;
use crate::timer::{Scheduler, TaskSlot, WebScheduler};

const SUBSCRIBE: &str = "Abonnieren";
const SUBSCRIBED: &str = "Abonniert!";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewsletterSignup {
    pub email: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewsletterState {
    pub email: String,
    pub subscribed: bool,
}

impl NewsletterState {
    pub fn submit(&mut self) -> NewsletterSignup {
        self.subscribed = true;
        NewsletterSignup {
            email: self.email.clone(),
        }
    }

    pub fn revert(&mut self) {
        *self = Self::default();
    }

    pub fn button_label(&self) -> &'static str {
        if self.subscribed { SUBSCRIBED } else { SUBSCRIBE }
    }

    pub fn button_background(&self) -> &'static str {
        if self.subscribed { "var(--accent-warm)" } else { "" }
    }
}

/// Flips the button, logs the signup and (re)arms the reset.
pub fn subscribe<S: Scheduler>(
    state: RwSignal<NewsletterState>,
    revert: &mut TaskSlot<S>,
) -> Option<NewsletterSignup> {
    let signup = state.try_update(|s| s.submit())?;
    match serde_json::to_string(&signup) {
        Ok(json) => log!("Newsletter subscription: {json}"),
        Err(e) => error!("could not serialize signup: {e}"),
    }

    revert.arm(NEWSLETTER_REVERT_MS, move || state.update(NewsletterState::revert));
    Some(signup)
}

#[component]
pub fn NewsletterForm() -> impl IntoView {
    let state = RwSignal::new(NewsletterState::default());
    let revert = StoredValue::new_local(TaskSlot::new(WebScheduler));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        revert.update_value(|slot| {
            subscribe(state, slot);
        });
    };

    view! {
        <form class="newsletter-form" on:submit=on_submit>
            <input
                type="email"
                placeholder="Ihre E-Mail-Adresse"
                required=true
                prop:value=move || state.with(|s| s.email.clone())
                on:input=move |ev| state.update(|s| s.email = event_target_value(&ev))
            />
            <button
                type="submit"
                style=("background", move || state.with(|s| s.button_background()))
            >
                {move || state.with(|s| s.button_label())}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::manual::ManualScheduler;
    use leptos::reactive::owner::Owner;

    fn with_email(email: &str) -> NewsletterState {
        NewsletterState {
            email: email.into(),
            ..Default::default()
        }
    }

    #[test]
    fn button_flips_then_restores() {
        Owner::new().with(|| {
            let clock = ManualScheduler::default();
            let mut slot = TaskSlot::new(clock.clone());
            let state = RwSignal::new(with_email("gast@example.org"));

            let signup = subscribe(state, &mut slot).unwrap();
            assert_eq!(signup.email, "gast@example.org");
            assert_eq!(state.get_untracked().button_label(), "Abonniert!");
            assert_eq!(state.get_untracked().button_background(), "var(--accent-warm)");

            clock.advance(2_999);
            assert!(state.get_untracked().subscribed);
            clock.advance(1);
            let after = state.get_untracked();
            assert_eq!(after.button_label(), "Abonnieren");
            assert_eq!(after.button_background(), "");
            assert!(after.email.is_empty());
        });
    }

    #[test]
    fn second_signup_restarts_the_reset() {
        Owner::new().with(|| {
            let clock = ManualScheduler::default();
            let mut slot = TaskSlot::new(clock.clone());
            let state = RwSignal::new(with_email("a@example.org"));

            subscribe(state, &mut slot);
            clock.advance(2_000);
            state.update(|s| s.email = "b@example.org".into());
            subscribe(state, &mut slot);

            clock.advance(2_000);
            assert!(state.get_untracked().subscribed);
            clock.advance(1_000);
            assert!(!state.get_untracked().subscribed);
        });
    }

    #[test]
    fn signup_logs_as_json() {
        let json = serde_json::to_value(with_email("gast@example.org").submit()).unwrap();
        assert_eq!(json, serde_json::json!({ "email": "gast@example.org" }));
    }
}
