//! SVG axis drawn from precomputed ticks.

use dioxus::prelude::*;
use gtv_chart::axis::{Axis, Orientation};

const TICK_SIZE: f64 = 6.0;

#[derive(Props, Clone, PartialEq)]
pub struct AxisViewProps {
    pub axis: Axis,
}

#[component]
pub fn AxisView(props: AxisViewProps) -> Element {
    let axis = &props.axis;
    let (e0, e1) = axis.extent;
    match axis.orientation {
        Orientation::Bottom => {
            let transform = format!("translate(0,{})", axis.offset);
            let domain = format!("M{},0H{}", e0, e1);
            let ticks = axis.ticks.iter().map(|tick| {
                let transform = format!("translate({},0)", tick.position);
                rsx! {
                    g {
                        class: "tick",
                        transform: "{transform}",
                        line { stroke: "currentColor", "y2": "{TICK_SIZE}" }
                        text { fill: "currentColor", y: "9", "dy": "0.71em", "{tick.label}" }
                    }
                }
            });
            rsx! {
                g {
                    id: "{axis.id}",
                    transform: "{transform}",
                    "font-size": "10",
                    "text-anchor": "middle",
                    path { class: "domain", stroke: "currentColor", "d": "{domain}" }
                    {ticks}
                }
            }
        }
        Orientation::Left => {
            let transform = format!("translate({},0)", axis.offset);
            let domain = format!("M0,{}V{}", e0, e1);
            let ticks = axis.ticks.iter().map(|tick| {
                let transform = format!("translate(0,{})", tick.position);
                rsx! {
                    g {
                        class: "tick",
                        transform: "{transform}",
                        line { stroke: "currentColor", "x2": "-{TICK_SIZE}" }
                        text { fill: "currentColor", x: "-9", "dy": "0.32em", "{tick.label}" }
                    }
                }
            });
            rsx! {
                g {
                    id: "{axis.id}",
                    transform: "{transform}",
                    "font-size": "10",
                    "text-anchor": "end",
                    path { class: "domain", stroke: "currentColor", "d": "{domain}" }
                    {ticks}
                }
            }
        }
    }
}
