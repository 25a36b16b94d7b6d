#![allow(warnings)]
//! Voto Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod models;
mod storage;
mod store;
mod timer;

use app::App;
use leptos::prelude::*;
use rolling_logger::LoggerConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = config::AppConfig::from_env();
    if let Err(e) = rolling_logger::init(LoggerConfig { level: config.log_level, ..Default::default() }) {
        web_sys::console::warn_1(&format!("[MAIN] Logger already installed: {}", e).into());
    }
    log::info!("[MAIN] Starting, API at {}", config.api_base);

    mount_to_body(App);
}
