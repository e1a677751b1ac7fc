//! Heat map layout for monthly temperature variance.
//!
//! This crate handles turning a [`gtv_data::Dataset`] into shapes:
//! - `scale`: linear and band scales
//! - `color`: five-band variance classifier
//! - `layout`: cells, axes and legend for a dataset (`HeatMap`)
//! - `svg`: standalone SVG writer for a `HeatMap`

pub mod axis;
pub mod color;
pub mod config;
pub mod layout;
pub mod legend;
pub mod scale;
pub mod svg;
pub mod tooltip;

pub use color::ColorBand;
pub use config::{ChartConfig, Dimensions, Palette};
pub use layout::{Cell, HeatMap, Scales};
