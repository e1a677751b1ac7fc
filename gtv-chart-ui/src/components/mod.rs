mod axis_view;
mod chart_header;
mod error_display;
mod heat_map_chart;
mod legend_view;
mod loading_spinner;
mod tooltip_box;

pub use axis_view::AxisView;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use heat_map_chart::HeatMapChart;
pub use legend_view::LegendView;
pub use loading_spinner::LoadingSpinner;
pub use tooltip_box::TooltipBox;
