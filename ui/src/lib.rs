use leptos::prelude::*;
use leptos::mount::mount_to_body;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <App/> });
}

pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod pages;
pub mod reveal;
pub mod routes;
pub mod scroll;
pub mod timer;

pub use crate::app::App;
