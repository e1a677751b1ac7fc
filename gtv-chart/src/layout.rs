//! Data to shape layout for the heat map.
//!
//! `Scales::build` derives the year and month scales from a record slice,
//! and `HeatMap::layout` turns a whole dataset into a declarative list of
//! cells, axes and a legend. Nothing here paints pixels; see [`crate::svg`]
//! and the Dioxus components for that.

use crate::{
    axis::{default_month_axis, year_axis, Axis},
    color::ColorBand,
    config::{ChartConfig, Dimensions},
    legend::Legend,
    scale::{BandScale, LinearScale},
    tooltip::Tooltip,
};
use gtv_data::{
    record::{VarianceRecord, MONTHS_PER_YEAR},
    Dataset, YearRange,
};
use log::warn;
use serde::Serialize;

pub const TITLE: &str = "Monthly Global Land-Surface Temperature";

/// Year and month scales for one dataset and surface size.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Scales {
    pub years: YearRange,
    pub x: LinearScale,
    pub y: BandScale,
}

impl Scales {
    pub fn build(records: &[VarianceRecord], dimensions: &Dimensions) -> Self {
        let years = YearRange::from_records(records);
        let Dimensions {
            width,
            height,
            padding,
        } = *dimensions;
        let x = LinearScale::new(
            (years.min as f64, years.max as f64 + 1.0),
            (padding, width - padding),
        );
        let y = BandScale::new(MONTHS_PER_YEAR, (height - padding, padding));
        Scales { years, x, y }
    }

    /// Cell width: the plot width divided by `max - min`. A single-year
    /// dataset divides by the x domain span (one year) instead of zero.
    pub fn cell_width(&self, dimensions: &Dimensions) -> f64 {
        let span = match self.years.span() {
            0 => 1,
            span => span,
        };
        dimensions.plot_width() / span as f64
    }

    pub fn cell_height(&self, dimensions: &Dimensions) -> f64 {
        dimensions.plot_height() / MONTHS_PER_YEAR as f64
    }
}

/// One rectangle in the grid, tagged with the record it came from.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Cell {
    pub year: i32,
    /// 0-based month band
    pub month: usize,
    pub variance: f64,
    pub temperature: f64,
    pub band: ColorBand,
    pub fill: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub tooltip: Tooltip,
}

/// Everything needed to draw the chart.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct HeatMap {
    pub dimensions: Dimensions,
    pub years: YearRange,
    pub base_temperature: f64,
    pub title: String,
    pub description: String,
    pub cells: Vec<Cell>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Legend,
}

impl HeatMap {
    pub fn layout(dataset: &Dataset, config: &ChartConfig) -> HeatMap {
        let dimensions = config.dimensions;
        let scales = Scales::build(&dataset.records, &dimensions);
        let width = scales.cell_width(&dimensions);
        let height = scales.cell_height(&dimensions);

        let mut cells = Vec::with_capacity(dataset.records.len());
        for record in &dataset.records {
            if !record.is_valid() {
                warn!(
                    "Skipping record {}-{}: month out of range or variance not finite",
                    record.year, record.month
                );
                continue;
            }
            let (Some(month), Some(tooltip)) = (
                record.band(),
                Tooltip::for_record(record, dataset.base_temperature),
            ) else {
                continue;
            };
            let Some(y) = scales.y.apply(month) else {
                continue;
            };
            let band = ColorBand::classify(record.variance);
            cells.push(Cell {
                year: record.year,
                month,
                variance: record.variance,
                temperature: record.temperature(dataset.base_temperature),
                band,
                fill: config.palette.color(band).to_string(),
                x: scales.x.apply(record.year as f64),
                y,
                width,
                height,
                tooltip,
            });
        }

        HeatMap {
            dimensions,
            years: scales.years,
            base_temperature: dataset.base_temperature,
            title: TITLE.to_string(),
            description: format!(
                "{} - {}: base temperature {}℃",
                scales.years.min, scales.years.max, dataset.base_temperature
            ),
            cells,
            x_axis: year_axis(&scales.x, dimensions.height - dimensions.padding),
            y_axis: default_month_axis(&scales.y, dimensions.padding),
            legend: Legend::new(&dimensions, &config.palette),
        }
    }

    /// Number of cells per color band, coldest first.
    pub fn band_counts(&self) -> [(ColorBand, usize); 5] {
        ColorBand::ALL.map(|band| (band, self.cells.iter().filter(|c| c.band == band).count()))
    }

    /// The cell drawn for a given year and 0-based month, if any.
    pub fn cell_at(&self, year: i32, month: usize) -> Option<&Cell> {
        self.cells.iter().find(|c| c.year == year && c.month == month)
    }
}
