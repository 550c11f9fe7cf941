//! Cura Portal
//!
//! Patient/doctor care portal frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Role-aware dashboard with appointments and care connections
//! - Community Health Talk feed with a post composer
//! - Direct messaging entry point with a sign-in gate
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the Cura REST API via HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;
mod util;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
