//! Dataset summary.

use crate::{source::load_dataset, SourceArgs};
use gtv_chart::{ChartConfig, ColorBand, HeatMap};
use gtv_data::{Dataset, YearRange};
use log::info;
use std::fmt;

#[derive(Debug, PartialEq, Clone)]
pub struct Summary {
    pub records: usize,
    pub invalid: usize,
    pub years: YearRange,
    pub base_temperature: f64,
    pub bands: [(ColorBand, usize); 5],
}

impl Summary {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let heat_map = HeatMap::layout(dataset, &ChartConfig::default());
        Summary {
            records: dataset.records.len(),
            invalid: dataset.invalid_records().len(),
            years: heat_map.years,
            base_temperature: dataset.base_temperature,
            bands: heat_map.band_counts(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "records:          {}", self.records)?;
        writeln!(f, "invalid records:  {}", self.invalid)?;
        writeln!(f, "years:            {} - {}", self.years.min, self.years.max)?;
        writeln!(f, "base temperature: {}℃", self.base_temperature)?;
        for (band, count) in &self.bands {
            writeln!(f, "  {:<9} {}", band.name(), count)?;
        }
        Ok(())
    }
}

pub async fn run_summary(source: &SourceArgs) -> anyhow::Result<()> {
    let dataset = load_dataset(source).await?;
    let summary = Summary::from_dataset(&dataset);
    info!(
        "Summarized {} records ({} invalid)",
        summary.records, summary.invalid
    );
    print!("{}", summary);
    Ok(())
}
