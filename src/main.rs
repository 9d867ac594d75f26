#![allow(warnings)]
//! TaskAsk Frontend Entry Point

mod actions;
mod api;
mod app;
mod components;
mod error;
mod loader;
mod models;
mod session;
mod store;
mod view;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
