//! # labtrack-client
//!
//! Leptos + WASM single-page client for the LabTrack experiment-management
//! platform (students browse and submit lab experiments, teachers create
//! and grade them).
//!
//! The interesting core is the session/authorization state machine:
//! [`state::session`] owns login, rehydration, and logout with durable
//! persistence, and [`router::guard`] enforces authentication, role
//! scoping, and the profile-completion gate on every navigation.

pub mod app;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
