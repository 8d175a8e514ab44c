//! To-do List Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod logging;
mod view_model;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    logging::init(config.level_filter());
    log::info!("Starting to-do list for user {}", config.user_id);

    mount_to_body(move || view! { <App config=config /> });
}
