//! The heat map surface: cells, axes and legend in one SVG.
//!
//! Layout is done by `gtv_chart::HeatMap`; this component only turns the
//! shapes into elements and tracks the hovered cell in AppState.

use super::{AxisView, LegendView, TooltipBox};
use crate::state::{AppState, HoveredCell};
use dioxus::prelude::*;
use gtv_chart::{tooltip::round1, HeatMap};

#[derive(Props, Clone, PartialEq)]
pub struct HeatMapChartProps {
    pub heat_map: HeatMap,
}

#[component]
pub fn HeatMapChart(props: HeatMapChartProps) -> Element {
    let mut state = use_context::<AppState>();
    let heat_map = &props.heat_map;
    let dims = heat_map.dimensions;

    let cells = heat_map.cells.iter().map(|cell| {
        let temp = round1(cell.temperature);
        let hovered = HoveredCell {
            tooltip: cell.tooltip.clone(),
            x: cell.x + cell.width / 2.0,
            y: cell.y,
        };
        rsx! {
            rect {
                key: "{cell.year}-{cell.month}",
                class: "cell",
                "data-month": "{cell.month}",
                "data-year": "{cell.year}",
                "data-temp": "{temp}",
                fill: "{cell.fill}",
                x: "{cell.x}",
                y: "{cell.y}",
                width: "{cell.width}",
                height: "{cell.height}",
                onmouseenter: move |_| state.hovered.set(Some(hovered.clone())),
                onmouseleave: move |_| state.hovered.set(None),
            }
        }
    });

    let wrapper_style = format!("position: relative; width: {}px;", dims.width);
    rsx! {
        div {
            id: "wrapper",
            style: "{wrapper_style}",
            svg {
                width: "{dims.width}",
                height: "{dims.height}",
                AxisView { axis: heat_map.x_axis.clone() }
                AxisView { axis: heat_map.y_axis.clone() }
                g { class: "cells", {cells} }
                LegendView { legend: heat_map.legend.clone() }
            }
            TooltipBox {}
        }
    }
}
