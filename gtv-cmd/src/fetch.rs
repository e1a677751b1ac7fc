//! Download the dataset to disk.

use anyhow::Context;
use gtv_data::{source::DataSource, Dataset};
use log::info;

/// Fetch the JSON document from `url` and write it to `output` unchanged.
/// When `csv_path` is given, the parsed records are also written as CSV.
pub async fn run_fetch(url: &str, output: &str, csv_path: Option<&str>) -> anyhow::Result<()> {
    let source = DataSource::new(url);
    let body = source.fetch_body().await?;
    // Parse before writing so a broken document never lands on disk.
    let dataset = Dataset::from_json(&body)?;

    tokio::fs::write(output, &body)
        .await
        .with_context(|| format!("Failed to write {}", output))?;
    info!(
        "Wrote {} records ({} bytes) to {}",
        dataset.records.len(),
        body.len(),
        output
    );

    if let Some(csv_path) = csv_path {
        write_csv(&dataset, csv_path).await?;
    }
    Ok(())
}

pub async fn write_csv(dataset: &Dataset, csv_path: &str) -> anyhow::Result<()> {
    let mut buf = Vec::new();
    dataset.write_csv(&mut buf)?;
    tokio::fs::write(csv_path, &buf)
        .await
        .with_context(|| format!("Failed to write {}", csv_path))?;
    info!("Wrote CSV export to {}", csv_path);
    Ok(())
}
