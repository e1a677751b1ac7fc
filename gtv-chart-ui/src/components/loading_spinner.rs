//! Placeholder while the dataset request is in flight.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    pub url: String,
}

#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            id: "loading",
            style: "padding: 40px; text-align: center; color: #666; font-family: sans-serif;",
            p { style: "margin: 0 0 4px 0; font-size: 16px;", "Fetching monthly temperature variance" }
            p { style: "margin: 0; font-size: 12px;", code { "{props.url}" } }
        }
    }
}
