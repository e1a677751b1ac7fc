//! Hover tooltip anchored above the hovered cell.

use crate::state::AppState;
use dioxus::prelude::*;

/// Vertical gap between the tooltip and the top of the cell.
const OFFSET_Y: f64 = 2.0;

/// Reads the hovered cell from AppState. Renders nothing when no cell is
/// hovered.
#[component]
pub fn TooltipBox() -> Element {
    let state = use_context::<AppState>();
    let Some(hovered) = (state.hovered)() else {
        return rsx! {};
    };
    let style = format!(
        "position: absolute; left: {}px; top: {}px; transform: translate(-50%, -100%); \
         pointer-events: none; padding: 6px 10px; background: rgba(0, 0, 0, 0.8); \
         color: #fff; border-radius: 4px; font-size: 12px; display: flex; \
         flex-direction: column; align-items: center;",
        hovered.x,
        hovered.y - OFFSET_Y
    );
    let tip = hovered.tooltip;
    rsx! {
        div {
            id: "tooltip",
            "data-year": "{tip.year}",
            style: "{style}",
            span { "{tip.heading}" }
            span { "{tip.temperature}" }
            span { "{tip.variance}" }
        }
    }
}
