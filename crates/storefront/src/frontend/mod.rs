//! Leptos frontend for the storefront widget.

pub mod app;

use wasm_bindgen::prelude::*;

use crate::App;
use crate::config::StorefrontConfig;

use self::app::Storefront;

/// WASM entry point; runs when the module loads.
#[wasm_bindgen(start)]
pub fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // No environment in the browser: premium shipping and the built-in catalog.
    match App::bootstrap(&StorefrontConfig::default()) {
        Ok(storefront) => leptos::mount_to_body(move || {
            leptos::view! { <Storefront storefront=storefront/> }
        }),
        Err(e) => leptos::logging::error!("storefront failed to start: {e:#}"),
    }
}
