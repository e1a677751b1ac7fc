//! Failed-load panel. The chart is replaced by this when the fetch or the
//! JSON parse fails; nothing is retried.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    /// The error chain, already formatted with `{:#}`.
    pub message: String,
    /// Where the dataset was requested from.
    pub url: String,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            id: "error",
            role: "alert",
            style: "padding: 12px 16px; margin: 16px; background: #FFEBEE; color: #C62828; border-left: 4px solid #C62828; font-family: sans-serif;",
            h3 { style: "margin: 0 0 8px 0;", "Monthly variance data unavailable" }
            p { style: "margin: 0 0 4px 0;", "{props.message}" }
            p {
                style: "margin: 0; font-size: 12px; color: #8E2424;",
                "Source: "
                code { "{props.url}" }
            }
        }
    }
}
