//! Shared Dioxus components and D3.js bridge for the weather chart apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the host page's D3.js chart functions via `js_sys::eval()`
//! - `renderer`: `ChartRenderer` implementations that draw through the bridge
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, chart sections, status)

pub mod components;
pub mod js_bridge;
pub mod renderer;
pub mod state;
