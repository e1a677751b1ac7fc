//! Dataset loading shared by the subcommands.

use crate::SourceArgs;
use anyhow::Context;
use gtv_data::{source::DataSource, Dataset};
use log::info;

/// Load the dataset from `--input` if given, otherwise fetch it from `--url`.
pub async fn load_dataset(source: &SourceArgs) -> anyhow::Result<Dataset> {
    match &source.input {
        Some(path) => {
            let body = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read {}", path))?;
            let dataset = Dataset::from_json(&body)?;
            info!("Loaded {} records from {}", dataset.records.len(), path);
            Ok(dataset)
        }
        None => DataSource::new(&source.url).fetch().await,
    }
}
