//! BlockVote browser frontend.
//!
//! Leptos CSR app over the `wallet-session` core: the UI renders the
//! session view, and the browser adapters in [`services`] supply the
//! provider, confirmation, and reset capabilities the core consumes.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Readable panics in the browser console.
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("BlockVote starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
