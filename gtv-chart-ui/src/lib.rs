//! Shared Dioxus components for the heat map app.
//!
//! This crate provides:
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: RSX components (heat map surface, axes, legend, tooltip, status)

pub mod components;
pub mod state;
