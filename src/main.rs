//! SmartChecklist Frontend Entry Point

mod models;
mod tree;
mod config;
mod logging;
mod commands;
mod view;
mod sync;
mod context;
mod components;
mod app;

use app::{App, BootstrapFailed};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    match config::load_bootstrap() {
        Ok(bootstrap) => {
            logging::init(&bootstrap.config);
            mount_to_body(move || view! { <App bootstrap=bootstrap /> });
        }
        Err(e) => {
            logging::init(&config::ClientConfig::default());
            tracing::error!("[APP] {}", e);
            let message = e.to_string();
            mount_to_body(move || view! { <BootstrapFailed message=message /> });
        }
    }
}
