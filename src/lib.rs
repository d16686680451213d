//! Browser front-end for the terminal CV.
//!
//! Renders a [`cvterm_core::Session`] with Leptos and maps keystrokes onto
//! it. All command semantics live in `cvterm-core`.

mod app;
mod components;
mod config;

pub use app::{App, AppContext};

use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Mount the application on the `#app` element.
///
/// # Panics
///
/// Panics if the page has no element with id `app`.
pub fn mount() {
    console_error_panic_hook::set_once();

    let root = document()
        .get_element_by_id(config::ROOT_ELEMENT_ID)
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, App).forget();
}
