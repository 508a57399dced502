#![allow(warnings)]
//! Grocery Bud Frontend Entry Point

mod models;
mod reducer;
mod storage;
mod config;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init_logger("GroceryBud", log::LevelFilter::Info) {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", e).into());
    }
    mount_to_body(App);
}
