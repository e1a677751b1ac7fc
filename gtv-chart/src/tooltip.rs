//! Hover text for a single cell.

use gtv_data::record::{band_name, VarianceRecord};
use serde::Serialize;
use std::fmt;

/// Round to one decimal place, halves toward positive infinity.
pub fn round1(value: f64) -> f64 {
    // Adding 0.0 turns -0.0 into 0.0 so it prints without a sign.
    ((value * 10.0 + 0.5).floor() / 10.0) + 0.0
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Tooltip {
    pub year: i32,
    /// "<Month> - <year>"
    pub heading: String,
    /// Absolute temperature, e.g. "7.3℃"
    pub temperature: String,
    /// Deviation from base, e.g. "-1.4℃"
    pub variance: String,
}

impl Tooltip {
    /// Tooltip for a record, or `None` if its month is out of range.
    pub fn for_record(record: &VarianceRecord, base_temperature: f64) -> Option<Tooltip> {
        let month = band_name(record.band()?)?;
        Some(Tooltip {
            year: record.year,
            heading: format!("{} - {}", month, record.year),
            temperature: format!("{}℃", round1(record.temperature(base_temperature))),
            variance: format!("{}℃", round1(record.variance)),
        })
    }
}

impl fmt::Display for Tooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}\n{}", self.heading, self.temperature, self.variance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1() {
        assert_eq!(round1(7.294), 7.3);
        assert_eq!(round1(-1.366), -1.4);
        assert_eq!(round1(-0.04), 0.0);
        assert_eq!(round1(2.0), 2.0);
        assert_eq!(format!("{}", round1(-0.04)), "0");
    }

    #[test]
    fn test_tooltip_for_record() {
        let record = VarianceRecord::new(1753, 1, -1.366);
        let tip = Tooltip::for_record(&record, 8.66).unwrap();
        assert_eq!(tip.year, 1753);
        assert_eq!(tip.heading, "January - 1753");
        assert_eq!(tip.temperature, "7.3℃");
        assert_eq!(tip.variance, "-1.4℃");
        assert_eq!(tip.to_string(), "January - 1753\n7.3℃\n-1.4℃");
    }

    #[test]
    fn test_tooltip_whole_number() {
        let record = VarianceRecord::new(1900, 12, 0.34);
        let tip = Tooltip::for_record(&record, 8.66).unwrap();
        assert_eq!(tip.heading, "December - 1900");
        assert_eq!(tip.temperature, "9℃");
    }

    #[test]
    fn test_tooltip_invalid_month() {
        let record = VarianceRecord::new(1900, 13, 0.34);
        assert!(Tooltip::for_record(&record, 8.66).is_none());
    }
}
