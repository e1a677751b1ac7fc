//! Axis tick generation for the year and month scales.

use crate::scale::{tick_step, ticks_with_step, BandScale, LinearScale};
use gtv_data::record::{month_names, MONTHS_PER_YEAR};
use serde::Serialize;

/// Preferred number of year ticks.
pub const YEAR_TICK_COUNT: usize = 10;

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub enum Orientation {
    Bottom,
    Left,
}

/// A labeled tick. `position` is the pixel coordinate along the axis.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Axis {
    pub id: &'static str,
    pub orientation: Orientation,
    /// Where the axis line sits: the y coordinate for a bottom axis, the x
    /// coordinate for a left axis.
    pub offset: f64,
    /// Extent of the axis line along its own direction.
    pub extent: (f64, f64),
    pub ticks: Vec<Tick>,
}

/// Bottom axis with whole-year labels.
pub fn year_axis(scale: &LinearScale, offset: f64) -> Axis {
    let (d0, d1) = scale.domain;
    let (lo, hi) = (d0.min(d1), d0.max(d1));
    // Years are integers; never step by less than one.
    let step = if hi > lo {
        tick_step(lo, hi, YEAR_TICK_COUNT).max(1.0)
    } else {
        1.0
    };
    let ticks = ticks_with_step(lo, hi, step)
        .into_iter()
        .map(|year| Tick {
            position: scale.apply(year),
            label: format!("{}", year.round() as i64),
        })
        .collect();
    Axis {
        id: "x-axis",
        orientation: Orientation::Bottom,
        offset,
        extent: scale.range,
        ticks,
    }
}

/// Left axis with one tick per month band, labeled in calendar order.
pub fn month_axis(scale: &BandScale, names: &[&str; MONTHS_PER_YEAR], offset: f64) -> Axis {
    let ticks = names
        .iter()
        .enumerate()
        .filter_map(|(band, name)| {
            scale.center(band).map(|position| Tick {
                position,
                label: name.to_string(),
            })
        })
        .collect();
    Axis {
        id: "y-axis",
        orientation: Orientation::Left,
        offset,
        extent: scale.range,
        ticks,
    }
}

/// Month axis using the default English month names.
pub fn default_month_axis(scale: &BandScale, offset: f64) -> Axis {
    month_axis(scale, &month_names(), offset)
}
