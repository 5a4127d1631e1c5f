//! Quake-Ready Frontend Entry Point

mod models;
mod content;
mod storage;
mod store;
mod navigation;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
