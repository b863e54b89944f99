//! Browser entry point: installs the panic hook and mounts [`App`].

mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let mount_point = document()
        .get_element_by_id("app")
        .expect("missing #app mount element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(mount_point, App).forget();
}
