use serde::{Deserialize, Serialize};

/// The five variance classes, coldest first.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ColorBand {
    LowLow,
    Low,
    Base,
    High,
    HighHigh,
}

impl ColorBand {
    pub const ALL: [ColorBand; 5] = [
        ColorBand::LowLow,
        ColorBand::Low,
        ColorBand::Base,
        ColorBand::High,
        ColorBand::HighHigh,
    ];

    /// Classify a variance in °C. Upper bounds are inclusive, so the
    /// thresholds -2, -1, 0 and 1 fall into the colder band. Anything that
    /// fails every bound (including NaN) is `HighHigh`.
    pub fn classify(variance: f64) -> ColorBand {
        if variance <= -2.0 {
            ColorBand::LowLow
        } else if variance <= -1.0 {
            ColorBand::Low
        } else if variance <= 0.0 {
            ColorBand::Base
        } else if variance <= 1.0 {
            ColorBand::High
        } else {
            ColorBand::HighHigh
        }
    }

    /// Legend key for the band: its threshold value.
    pub fn key(&self) -> i32 {
        match self {
            ColorBand::LowLow => -2,
            ColorBand::Low => -1,
            ColorBand::Base => 0,
            ColorBand::High => 1,
            ColorBand::HighHigh => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorBand::LowLow => "lowlow",
            ColorBand::Low => "low",
            ColorBand::Base => "base",
            ColorBand::High => "high",
            ColorBand::HighHigh => "highhigh",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ColorBand;

    #[test]
    fn test_classify_boundaries_fall_low() {
        assert_eq!(ColorBand::classify(-2.0), ColorBand::LowLow);
        assert_eq!(ColorBand::classify(-1.0), ColorBand::Low);
        assert_eq!(ColorBand::classify(0.0), ColorBand::Base);
        assert_eq!(ColorBand::classify(1.0), ColorBand::High);
    }

    #[test]
    fn test_classify_interior() {
        assert_eq!(ColorBand::classify(-6.976), ColorBand::LowLow);
        assert_eq!(ColorBand::classify(-1.999), ColorBand::Low);
        assert_eq!(ColorBand::classify(-0.5), ColorBand::Base);
        assert_eq!(ColorBand::classify(-0.0), ColorBand::Base);
        assert_eq!(ColorBand::classify(0.001), ColorBand::High);
        assert_eq!(ColorBand::classify(1.001), ColorBand::HighHigh);
        assert_eq!(ColorBand::classify(5.228), ColorBand::HighHigh);
    }

    #[test]
    fn test_classify_is_total() {
        assert_eq!(ColorBand::classify(f64::NEG_INFINITY), ColorBand::LowLow);
        assert_eq!(ColorBand::classify(f64::INFINITY), ColorBand::HighHigh);
        assert_eq!(ColorBand::classify(f64::NAN), ColorBand::HighHigh);
    }

    #[test]
    fn test_classify_is_monotonic() {
        let mut previous = ColorBand::LowLow;
        let mut v = -4.0;
        while v <= 4.0 {
            let band = ColorBand::classify(v);
            assert!(band >= previous, "band dropped at {}", v);
            previous = band;
            v += 0.05;
        }
        assert_eq!(previous, ColorBand::HighHigh);
    }

    #[test]
    fn test_keys_ascend() {
        let keys: Vec<i32> = ColorBand::ALL.iter().map(|b| b.key()).collect();
        assert_eq!(keys, vec![-2, -1, 0, 1, 2]);
    }
}
