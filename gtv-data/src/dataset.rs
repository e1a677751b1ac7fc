use crate::record::VarianceRecord;
use anyhow::Context;
use log::warn;
use serde::{Deserialize, Serialize};
use std::io;

/// The parsed temperature document: a base temperature and the monthly
/// deviations from it, in source order.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(rename = "baseTemperature")]
    pub base_temperature: f64,
    #[serde(rename = "monthlyVariance")]
    pub records: Vec<VarianceRecord>,
}

/// Inclusive range of years present in a dataset.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    /// Scan records for the first and last year. An empty slice yields
    /// `0..=0`.
    pub fn from_records(records: &[VarianceRecord]) -> Self {
        let mut years = records.iter().map(|r| r.year);
        match years.next() {
            Some(first) => {
                let (min, max) = years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));
                YearRange { min, max }
            }
            None => YearRange::default(),
        }
    }

    /// Number of years between the first and last, `max - min`. Widened to
    /// `i64` so the full `i32` year range cannot overflow.
    pub fn span(&self) -> i64 {
        i64::from(self.max) - i64::from(self.min)
    }
}

impl Dataset {
    pub fn new(base_temperature: f64, records: Vec<VarianceRecord>) -> Self {
        Dataset {
            base_temperature,
            records,
        }
    }

    /// Parse the JSON document body.
    pub fn from_json(body: &str) -> anyhow::Result<Dataset> {
        let dataset: Dataset =
            serde_json::from_str(body).context("Failed to parse temperature dataset JSON")?;
        dataset.log_invalid();
        Ok(dataset)
    }

    pub fn year_range(&self) -> YearRange {
        YearRange::from_records(&self.records)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose month is outside 1..=12 or whose variance is not finite.
    pub fn invalid_records(&self) -> Vec<&VarianceRecord> {
        self.records.iter().filter(|r| !r.is_valid()).collect()
    }

    /// Write the records as CSV with a `year,month,variance` header.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for record in &self.records {
            wtr.serialize(record)?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn log_invalid(&self) {
        let invalid = self.invalid_records();
        if !invalid.is_empty() {
            warn!(
                "{} of {} records have an out-of-range month or non-finite variance and will not be drawn",
                invalid.len(),
                self.records.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // First rows of global-temperature.json
    const SAMPLE_JSON: &str = r#"{
  "baseTemperature": 8.66,
  "monthlyVariance": [
    { "year": 1753, "month": 1, "variance": -1.366 },
    { "year": 1753, "month": 2, "variance": -2.223 },
    { "year": 1753, "month": 3, "variance": 0.211 },
    { "year": 1754, "month": 1, "variance": -0.843 },
    { "year": 2015, "month": 9, "variance": 1.079 }
  ]
}"#;

    #[test]
    fn test_from_json() {
        let dataset = Dataset::from_json(SAMPLE_JSON).unwrap();
        assert_eq!(dataset.base_temperature, 8.66);
        assert_eq!(dataset.records.len(), 5);
        assert_eq!(dataset.records[1], VarianceRecord::new(1753, 2, -2.223));
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(Dataset::from_json("{\"baseTemperature\": 8.66").is_err());
        assert!(Dataset::from_json("{\"monthlyVariance\": []}").is_err());
    }

    #[test]
    fn test_year_range() {
        let dataset = Dataset::from_json(SAMPLE_JSON).unwrap();
        let range = dataset.year_range();
        assert_eq!(range, YearRange { min: 1753, max: 2015 });
        assert_eq!(range.span(), 262);
    }

    #[test]
    fn test_year_range_span_extreme_years() {
        let records = vec![
            VarianceRecord::new(i32::MIN, 1, 0.1),
            VarianceRecord::new(i32::MAX, 1, 0.1),
        ];
        let range = YearRange::from_records(&records);
        assert_eq!(range.span(), u32::MAX as i64);
    }

    #[test]
    fn test_year_range_empty() {
        let dataset = Dataset::new(8.66, Vec::new());
        assert!(dataset.is_empty());
        assert_eq!(dataset.year_range(), YearRange { min: 0, max: 0 });
    }

    #[test]
    fn test_invalid_records() {
        let dataset = Dataset::new(
            8.66,
            vec![
                VarianceRecord::new(1800, 1, 0.1),
                VarianceRecord::new(1800, 0, 0.1),
                VarianceRecord::new(1800, 13, 0.1),
            ],
        );
        let invalid = dataset.invalid_records();
        assert_eq!(invalid.len(), 2);
        assert_eq!(invalid[0].month, 0);
        assert_eq!(invalid[1].month, 13);
    }

    #[test]
    fn test_write_csv() {
        let dataset = Dataset::new(
            8.66,
            vec![
                VarianceRecord::new(1753, 1, -1.366),
                VarianceRecord::new(1753, 2, 0.5),
            ],
        );
        let mut out = Vec::new();
        dataset.write_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "year,month,variance\n1753,1,-1.366\n1753,2,0.5\n");
    }
}
