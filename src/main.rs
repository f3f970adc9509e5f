//! Theme switcher entry point: mounts [`App`] onto the `#app` element.

mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Element id the switcher app mounts into (see `index.html`).
const MOUNT_ID: &str = "app";

fn main() {
    console_error_panic_hook::set_once();

    let Some(root) = document().get_element_by_id(MOUNT_ID) else {
        utils::console::warn("no #app element; theme switcher not mounted");
        return;
    };

    mount_to(root.unchecked_into::<web_sys::HtmlElement>(), App).forget();
}
