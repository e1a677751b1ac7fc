//! Core types and data source for monthly global temperature variance.
//!
//! The dataset is a single JSON document: a base temperature plus one
//! variance record per (year, month). This crate parses it, validates it,
//! and (behind the `api` feature) fetches it over HTTP.

pub mod dataset;
pub mod record;
#[cfg(feature = "api")]
pub mod source;

/// Location of the reference dataset.
pub const DEFAULT_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

pub use dataset::{Dataset, YearRange};
pub use record::VarianceRecord;
