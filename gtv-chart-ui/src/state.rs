//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use gtv_chart::{tooltip::Tooltip, ChartConfig};
use gtv_data::Dataset;

/// The cell under the pointer and where to anchor its tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct HoveredCell {
    pub tooltip: Tooltip,
    /// Horizontal center of the cell in surface pixels
    pub x: f64,
    /// Top edge of the cell in surface pixels
    pub y: f64,
}

/// Shared application state for the heat map app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Fetched dataset (None until loaded)
    pub dataset: Signal<Option<Dataset>>,
    /// Whether the fetch is still in flight
    pub loading: Signal<bool>,
    /// Error message if the fetch failed
    pub error_msg: Signal<Option<String>>,
    /// Surface size and palette
    pub config: Signal<ChartConfig>,
    /// Cell currently hovered, if any
    pub hovered: Signal<Option<HoveredCell>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            config: Signal::new(ChartConfig::default()),
            hovered: Signal::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
