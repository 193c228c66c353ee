//! Platform abstraction layer
//!
//! The browser build exposes the controller to JavaScript; the host page owns
//! the canvas, input polling and the frame loop.

#[cfg(target_arch = "wasm32")]
pub mod web;
