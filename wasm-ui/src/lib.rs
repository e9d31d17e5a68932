//! Web UI for payslip-rs
//!
//! A Yew-based payslip editor: header form, line-item rows, live preview,
//! print and email actions.

mod app;
mod components;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    console_error_panic_hook::set_once();

    yew::Renderer::<app::App>::new().render();
}
