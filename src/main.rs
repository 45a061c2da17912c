#![allow(warnings)]
//! Tasks Frontend Entry Point

mod api;
mod app;
mod auth;
mod components;
mod config;
mod context;
mod models;
mod pages;
mod session;
mod store;
mod sync;

use app::App;
use config::AppConfig;
use context::AppContext;
use leptos::prelude::*;
use session::SessionContext;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(log::LevelFilter::Info) {
        web_sys::console::warn_1(&format!("Logger already installed: {}", e).into());
    }

    let ctx = AppContext::new(AppConfig::from_env(), SessionContext::browser());
    log::info!("Starting with API at {}", ctx.config.api_base_url);
    mount_to_body(move || view! { <App ctx=ctx.clone() /> });
}
