//! VoyageAI Marketing Site
//!
//! A Leptos CSR landing page.

mod app;
mod components;
mod pages;
mod reveal;

use leptos::*;
use tracing_wasm::WASMLayerConfigBuilder;

fn main() {
    console_error_panic_hook::set_once();

    let max_level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_wasm::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new().set_max_level(max_level).build(),
    );

    mount_to_body(|| {
        view! {
            <app::App/>
        }
    });
}
