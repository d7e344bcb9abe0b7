//! Thin helpers over web-sys for the bits the page reads imperatively.

use anyhow::{Result, anyhow};
use wasm_bindgen::{JsCast, convert::FromWasmAbi, prelude::Closure};
use web_sys::{Document, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::scroll::tracker::{SectionBounds, clamp_position};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Attaches `f` for the lifetime of the page.
pub fn add_listener<T, F>(target: &EventTarget, ty: &str, f: F) -> Result<()>
where
    T: 'static + JsCast + FromWasmAbi,
    F: 'static + FnMut(T),
{
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(_)>);
    target
        .add_event_listener_with_callback(ty, cb.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("add {ty} listener: {e:?}"))?;
    cb.forget();
    Ok(())
}

/// Every element matching `selector` that is an `HtmlElement`, in document order.
pub fn query_all(selector: &str) -> Vec<HtmlElement> {
    let Some(doc) = document() else {
        return Vec::new();
    };
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn query(selector: &str) -> Option<HtmlElement> {
    document()?
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Current layout of all `section[id]`; read fresh each time so it follows reflows.
pub fn section_layout() -> Vec<SectionBounds> {
    query_all("section[id]")
        .into_iter()
        .filter(|s| !s.id().is_empty())
        .map(|s| SectionBounds::new(s.id(), s.offset_top(), s.offset_height()))
        .collect()
}

pub fn scroll_position() -> u32 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .map(clamp_position)
        .unwrap_or(0)
}

pub fn smooth_scroll_to(top: f64) {
    let Some(win) = window() else { return };
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&opts);
}
