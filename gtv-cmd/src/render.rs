//! Render the heat map to an SVG file.

use crate::{source::load_dataset, SourceArgs};
use anyhow::Context;
use gtv_chart::{svg::render_svg, ChartConfig, HeatMap};
use gtv_data::Dataset;
use log::info;

/// Lay out and serialize a dataset. Pure, for callers that already hold one.
pub fn render_dataset(dataset: &Dataset, config: &ChartConfig) -> (HeatMap, String) {
    let heat_map = HeatMap::layout(dataset, config);
    let svg = render_svg(&heat_map);
    (heat_map, svg)
}

pub async fn run_render(
    source: &SourceArgs,
    config: ChartConfig,
    output: &str,
) -> anyhow::Result<()> {
    let dataset = load_dataset(source).await?;
    let (heat_map, svg) = render_dataset(&dataset, &config);
    tokio::fs::write(output, svg)
        .await
        .with_context(|| format!("Failed to write {}", output))?;
    info!(
        "Rendered {} cells ({} - {}) to {}",
        heat_map.cells.len(),
        heat_map.years.min,
        heat_map.years.max,
        output
    );
    Ok(())
}
