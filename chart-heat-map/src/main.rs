//! Monthly Global Land-Surface Temperature heat map
//!
//! One cell per (year, month), colored by the month's deviation from the
//! dataset's base temperature. Years run along the x-axis and months along
//! the y-axis; hovering a cell shows its date, absolute temperature and
//! variance.
//!
//! Data flow:
//! 1. On mount, the JSON document is fetched once from `gtv_data::DEFAULT_URL`.
//! 2. The dataset lands in `AppState`; a failed fetch sets `error_msg` instead.
//! 3. `HeatMap::layout` is memoized on the dataset and chart config, and the
//!    resulting shapes are rendered by `HeatMapChart`.

use dioxus::prelude::*;
use gtv_chart::HeatMap;
use gtv_chart_ui::components::{ChartHeader, ErrorDisplay, HeatMapChart, LoadingSpinner};
use gtv_chart_ui::state::AppState;
use gtv_data::{source::DataSource, DEFAULT_URL};
use log::{error, info};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("heat-map-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Single fetch on mount, no retry
    use_future(move || async move {
        match DataSource::default().fetch().await {
            Ok(dataset) => {
                info!("Loaded {} variance records", dataset.records.len());
                state.dataset.set(Some(dataset));
            }
            Err(e) => {
                error!("Failed to fetch temperature data: {:#}", e);
                state.error_msg.set(Some(format!("{:#}", e)));
            }
        }
        state.loading.set(false);
    });

    let heat_map = use_memo(move || {
        let config = (state.config)();
        let layout = state
            .dataset
            .read()
            .as_ref()
            .map(|dataset| HeatMap::layout(dataset, &config));
        layout
    });

    if (state.loading)() {
        return rsx! { LoadingSpinner { url: DEFAULT_URL.to_string() } };
    }
    if let Some(message) = (state.error_msg)() {
        return rsx! { ErrorDisplay { message, url: DEFAULT_URL.to_string() } };
    }

    match heat_map() {
        Some(heat_map) => rsx! {
            div {
                style: "font-family: sans-serif; padding: 16px;",
                ChartHeader {
                    title: heat_map.title.clone(),
                    description: heat_map.description.clone(),
                }
                HeatMapChart { heat_map }
            }
        },
        None => rsx! { LoadingSpinner { url: DEFAULT_URL.to_string() } },
    }
}
