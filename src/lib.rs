//! # natakahii-client
//!
//! Leptos + WASM storefront for the Nataka Hii marketplace. Pages talk to
//! the REST backend through an authenticated request pipeline that attaches
//! the stored bearer token and transparently refreshes it once on a 401.

#![allow(async_fn_in_trait)]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entrypoint: installs logging and mounts the app to `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
