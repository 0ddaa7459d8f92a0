//! EcoNeighbor Dashboard
//!
//! Neighborhood sustainability dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Air quality map with per-area status classification
//! - Energy/water habit tracker with live eco scores
//! - Searchable waste segregation guide with rewards
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All state lives in the EcoNeighbor API; the UI fetches panel
//! snapshots and posts intent events.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
