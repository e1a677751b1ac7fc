//! Color key for the five variance bands.

use super::AxisView;
use dioxus::prelude::*;
use gtv_chart::legend::Legend;

#[derive(Props, Clone, PartialEq)]
pub struct LegendViewProps {
    pub legend: Legend,
}

#[component]
pub fn LegendView(props: LegendViewProps) -> Element {
    let legend = &props.legend;
    let swatches = legend.swatches.iter().map(|swatch| {
        rsx! {
            rect {
                class: "legend-swatch",
                fill: "{swatch.fill}",
                x: "{legend.x}",
                y: "{swatch.y}",
                width: "{legend.swatch_width}",
                height: "{swatch.height}",
            }
        }
    });
    rsx! {
        g {
            id: "legend",
            {swatches}
            AxisView { axis: legend.axis.clone() }
        }
    }
}
