//! Shared Dioxus components and D3.js bridge for MLB narrative chart apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js narrative chart via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals around the `NarrativeController`
//! - `components`: Reusable RSX components (nav, narrative panel, tooltip, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
