use chrono::Month;
use serde::{Deserialize, Serialize};

/// Number of month bands on the vertical axis.
pub const MONTHS_PER_YEAR: usize = 12;

/// One monthly temperature deviation from the dataset's base temperature.
///
/// `month` is 1-based as delivered by the source document. Use
/// [`month_to_band`] to get the 0-based band index used for layout.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct VarianceRecord {
    pub year: i32,
    pub month: u32,
    /// Degrees Celsius relative to the base temperature
    pub variance: f64,
}

impl VarianceRecord {
    pub fn new(year: i32, month: u32, variance: f64) -> Self {
        VarianceRecord {
            year,
            month,
            variance,
        }
    }

    /// The 0-based band index, or `None` if `month` is outside 1..=12.
    pub fn band(&self) -> Option<usize> {
        month_to_band(self.month)
    }

    pub fn is_valid(&self) -> bool {
        self.band().is_some() && self.variance.is_finite()
    }

    /// Absolute temperature for this month given the dataset's base.
    pub fn temperature(&self, base_temperature: f64) -> f64 {
        base_temperature + self.variance
    }
}

/// Convert a 1-based calendar month into a 0-based band index.
pub fn month_to_band(month: u32) -> Option<usize> {
    match month {
        1..=12 => Some(month as usize - 1),
        _ => None,
    }
}

/// Convert a 0-based band index back into a 1-based calendar month.
pub fn band_to_month(band: usize) -> Option<u32> {
    if band < MONTHS_PER_YEAR {
        Some(band as u32 + 1)
    } else {
        None
    }
}

/// Full English month name for a 0-based band index.
pub fn band_name(band: usize) -> Option<&'static str> {
    let month = band_to_month(band)?;
    Month::try_from(month as u8).ok().map(|m| m.name())
}

/// The twelve full month names in calendar order.
pub fn month_names() -> [&'static str; MONTHS_PER_YEAR] {
    let mut names = [""; MONTHS_PER_YEAR];
    let mut month = Month::January;
    for name in names.iter_mut() {
        *name = month.name();
        month = month.succ();
    }
    names
}
