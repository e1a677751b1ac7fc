//! Chart dimensions and color palette.

use crate::color::ColorBand;
use serde::{Deserialize, Serialize};

/// Pixel size of the drawing surface. `padding` is applied on all four
/// sides and holds the axes.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions {
            width: 1400.0,
            height: 600.0,
            padding: 80.0,
        }
    }
}

impl Dimensions {
    pub fn plot_width(&self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - 2.0 * self.padding).max(0.0)
    }
}

/// Fill colors for the five variance bands, as CSS color strings.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Palette {
    pub lowlow: String,
    pub low: String,
    pub base: String,
    pub high: String,
    pub highhigh: String,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            lowlow: "#355C7D".to_string(),
            low: "#6C5B7B".to_string(),
            base: "#C06C84".to_string(),
            high: "#F8B195".to_string(),
            highhigh: "#F67280".to_string(),
        }
    }
}

impl Palette {
    pub fn color(&self, band: ColorBand) -> &str {
        match band {
            ColorBand::LowLow => &self.lowlow,
            ColorBand::Low => &self.low,
            ColorBand::Base => &self.base,
            ColorBand::High => &self.high,
            ColorBand::HighHigh => &self.highhigh,
        }
    }

    /// Fill color for a variance value.
    pub fn fill(&self, variance: f64) -> &str {
        self.color(ColorBand::classify(variance))
    }
}

/// Everything the layout needs besides the data.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct ChartConfig {
    pub dimensions: Dimensions,
    pub palette: Palette,
}
