//! One-shot fade/slide-in for elements as they first scroll into view.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Result, anyhow};
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue, prelude::Closure};
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::RevealConfig;
use crate::dom;

const KEY_ATTR: &str = "data-reveal-key";

/// Arena of elements waiting to be revealed, addressed by a stable key.
///
/// A key can be revealed once; afterwards it's gone for good.
pub struct RevealRegistry<T> {
    slots: Vec<Option<T>>,
}

impl<T> RevealRegistry<T> {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn register(&mut self, item: T) -> usize {
        self.slots.push(Some(item));
        self.slots.len() - 1
    }

    /// Takes the item out if it was still pending.
    pub fn reveal(&mut self, key: usize) -> Option<T> {
        self.slots.get_mut(key)?.take()
    }

    pub fn is_pending(&self, key: usize) -> bool {
        matches!(self.slots.get(key), Some(Some(_)))
    }

    pub fn pending(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

impl<T> Default for RevealRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Registers every element matching `config.selector` with an IntersectionObserver.
///
/// Returns the number of observed elements.
pub fn observe(config: &RevealConfig) -> Result<usize> {
    let elements = dom::query_all(config.selector);
    if elements.is_empty() {
        return Ok(0);
    }

    let registry: Rc<RefCell<RevealRegistry<HtmlElement>>> = Rc::default();

    let reg = registry.clone();
    let cfg = config.clone();
    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }

                let target = entry.target();
                let Some(key) = target
                    .get_attribute(KEY_ATTR)
                    .and_then(|k| k.parse::<usize>().ok())
                else {
                    continue;
                };

                let Some(el) = reg.borrow_mut().reveal(key) else {
                    continue;
                };
                observer.unobserve(&target);
                animate_in(el, &cfg);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.threshold));
    init.set_root_margin(config.root_margin);

    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)
        .map_err(|e| anyhow!("IntersectionObserver: {e:?}"))?;
    cb.forget();

    let count = elements.len();
    for el in elements {
        let key = registry.borrow_mut().register(el.clone());
        el.set_attribute(KEY_ATTR, &key.to_string())
            .map_err(|e| anyhow!("tag reveal element: {e:?}"))?;
        observer.observe(&el);
    }

    Ok(count)
}

fn animate_in(el: HtmlElement, cfg: &RevealConfig) {
    // park it invisible first so the transition has somewhere to start from
    let style = el.style();
    let _ = style.set_property("opacity", "0");
    let _ = style.set_property("transform", "translateY(30px)");

    let transition = cfg.transition;
    Timeout::new(cfg.settle_ms, move || {
        let style = el.style();
        let _ = style.set_property("transition", transition);
        let _ = style.set_property("opacity", "1");
        let _ = style.set_property("transform", "translateY(0)");
    })
    .forget();
}
