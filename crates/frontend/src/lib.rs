pub mod app;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;
pub mod usecases;

use leptos::prelude::*;
use shared::config::{load_app_config, log_level};
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let (config, config_error) = load_app_config();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log_level(&config));
    console_error_panic_hook::set_once();

    if let Some(e) = config_error {
        log::warn!("config override ignored, using defaults: {:#}", e);
    }
    log::debug!("starting with organization '{}'", config.organization_name);

    leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
