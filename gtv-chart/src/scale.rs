//! Domain to pixel mappings.
//!
//! `LinearScale` is a continuous map between two intervals. `BandScale`
//! splits a pixel range into `n` equal slots, one per discrete key, with no
//! padding between them. Both accept reversed ranges.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        LinearScale { domain, range }
    }

    /// Map a domain value into the range. Values outside the domain are
    /// extrapolated. A zero-width domain maps everything to the range
    /// midpoint.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if d1 == d0 { 0.5 } else { (value - d0) / (d1 - d0) };
        r0 + t * (r1 - r0)
    }

    /// Roughly `count` evenly spaced, human-friendly values inside the
    /// domain. Steps are 1, 2 or 5 times a power of ten.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        let (lo, hi) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };
        let mut values = ticks(lo, hi, count);
        if d1 < d0 {
            values.reverse();
        }
        values
    }
}

/// Step between ticks for the interval `[start, stop]`.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let raw = (stop - start).abs() / count.max(1) as f64;
    let power = raw.log10().floor();
    let error = raw / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}

/// Tick values in `[start, stop]` for an ascending interval.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !(start.is_finite() && stop.is_finite()) || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let step = tick_step(start, stop, count);
    ticks_with_step(start, stop, step)
}

pub(crate) fn ticks_with_step(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if !(step.is_finite() && step > 0.0) {
        return Vec::new();
    }
    let first = (start / step).ceil() as i64;
    let last = (stop / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct BandScale {
    pub count: usize,
    pub range: (f64, f64),
}

impl BandScale {
    pub fn new(count: usize, range: (f64, f64)) -> Self {
        BandScale { count, range }
    }

    /// Height (or width) of one band.
    pub fn bandwidth(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        (self.range.1 - self.range.0).abs() / self.count as f64
    }

    /// Start coordinate of band `index`, or `None` if the index has no band.
    ///
    /// Bands are laid out from the low end of the range upward and then
    /// listed in range order, so with a reversed range `[high, low]` band 0
    /// sits against `high` and the last band against `low`.
    pub fn apply(&self, index: usize) -> Option<f64> {
        if index >= self.count {
            return None;
        }
        let (r0, r1) = self.range;
        let start = r0.min(r1);
        let slot = if r1 < r0 {
            self.count - 1 - index
        } else {
            index
        };
        Some(start + self.bandwidth() * slot as f64)
    }

    /// Center coordinate of band `index`.
    pub fn center(&self, index: usize) -> Option<f64> {
        self.apply(index).map(|y| y + self.bandwidth() / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_linear_endpoints() {
        let x = LinearScale::new((1753.0, 2016.0), (80.0, 1320.0));
        assert!(close(x.apply(1753.0), 80.0));
        assert!(close(x.apply(2016.0), 1320.0));
        assert!(close(x.apply(1884.5), 700.0));
    }

    #[test]
    fn test_linear_degenerate_domain() {
        let x = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(x.apply(5.0), 50.0);
        assert_eq!(x.apply(-10.0), 50.0);
    }

    #[test]
    fn test_tick_step() {
        assert_eq!(tick_step(1753.0, 2016.0, 10), 20.0);
        assert_eq!(tick_step(0.0, 100.0, 10), 10.0);
        assert_eq!(tick_step(0.0, 40.0, 10), 5.0);
    }

    #[test]
    fn test_ticks_years() {
        let x = LinearScale::new((1753.0, 2016.0), (80.0, 1320.0));
        let ticks = x.ticks(10);
        assert_eq!(ticks.first(), Some(&1760.0));
        assert_eq!(ticks.last(), Some(&2000.0));
        assert_eq!(ticks.len(), 13);
    }

    #[test]
    fn test_ticks_reversed_and_empty() {
        let x = LinearScale::new((10.0, 0.0), (0.0, 100.0));
        assert_eq!(x.ticks(5), vec![10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
        assert!(ticks(0.0, 1.0, 0).is_empty());
        assert_eq!(ticks(3.0, 3.0, 10), vec![3.0]);
    }

    #[test]
    fn test_band_reversed_range() {
        let y = BandScale::new(12, (520.0, 80.0));
        let bandwidth = 440.0 / 12.0;
        assert!(close(y.bandwidth(), bandwidth));
        assert!(close(y.apply(11).unwrap(), 80.0));
        assert!(close(y.apply(0).unwrap(), 520.0 - bandwidth));
        assert_eq!(y.apply(12), None);
    }

    #[test]
    fn test_band_forward_range() {
        let y = BandScale::new(4, (0.0, 100.0));
        assert_eq!(y.apply(0), Some(0.0));
        assert_eq!(y.apply(3), Some(75.0));
        assert_eq!(y.center(1), Some(37.5));
    }

    #[test]
    fn test_band_empty() {
        let y = BandScale::new(0, (0.0, 100.0));
        assert_eq!(y.bandwidth(), 0.0);
        assert_eq!(y.apply(0), None);
    }
}
