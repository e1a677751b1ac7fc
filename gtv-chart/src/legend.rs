use crate::{
    axis::{Axis, Orientation, Tick},
    color::ColorBand,
    config::{Dimensions, Palette},
    scale::BandScale,
};
use serde::Serialize;

/// Swatch width in pixels.
pub const SWATCH_WIDTH: f64 = 30.0;

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Swatch {
    pub band: ColorBand,
    pub fill: String,
    pub y: f64,
    pub height: f64,
}

/// Color key drawn to the right of the plot, coldest band at the bottom.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Legend {
    pub x: f64,
    pub swatch_width: f64,
    pub swatches: Vec<Swatch>,
    pub axis: Axis,
}

impl Legend {
    pub fn new(dimensions: &Dimensions, palette: &Palette) -> Self {
        let x = dimensions.width - dimensions.padding / 2.0;
        let scale = BandScale::new(
            ColorBand::ALL.len(),
            (dimensions.height - dimensions.padding, dimensions.padding),
        );
        let height = dimensions.plot_height() / ColorBand::ALL.len() as f64;
        let mut swatches = Vec::with_capacity(ColorBand::ALL.len());
        let mut ticks = Vec::with_capacity(ColorBand::ALL.len());
        for (index, band) in ColorBand::ALL.iter().enumerate() {
            if let (Some(y), Some(center)) = (scale.apply(index), scale.center(index)) {
                swatches.push(Swatch {
                    band: *band,
                    fill: palette.color(*band).to_string(),
                    y,
                    height,
                });
                ticks.push(Tick {
                    position: center,
                    label: band.key().to_string(),
                });
            }
        }
        Legend {
            x,
            swatch_width: SWATCH_WIDTH,
            swatches,
            axis: Axis {
                id: "legend-axis",
                orientation: Orientation::Left,
                offset: x,
                extent: scale.range,
                ticks,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_layout() {
        let legend = Legend::new(&Dimensions::default(), &Palette::default());
        assert_eq!(legend.x, 1360.0);
        assert_eq!(legend.swatches.len(), 5);
        assert_eq!(legend.swatches[0].band, ColorBand::LowLow);
        assert_eq!(legend.swatches[0].fill, "#355C7D");
        assert_eq!(legend.swatches[0].height, 88.0);
        // Coldest at the bottom, warmest at the top
        assert_eq!(legend.swatches[4].y, 80.0);
        assert!((legend.swatches[0].y - 432.0).abs() < 1e-9);
        let labels: Vec<&str> = legend.axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["-2", "-1", "0", "1", "2"]);
    }
}
