//! Chart header component with title and dataset description.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// Year range and base temperature line
    #[props(default = String::new())]
    pub description: String,
}

/// Header above the heat map.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px; text-align: center;",
            h1 {
                id: "title",
                style: "margin: 0 0 4px 0; font-size: 22px;",
                "{props.title}"
            }
            if !props.description.is_empty() {
                p {
                    id: "description",
                    style: "margin: 0; font-size: 14px; color: #666;",
                    "{props.description}"
                }
            }
        }
    }
}
