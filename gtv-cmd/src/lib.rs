//! Command implementations for the GTV CLI.
//!
//! Provides subcommands for downloading the temperature dataset, rendering
//! it as an SVG heat map, and summarizing it.

use clap::{Args, Subcommand};
use gtv_chart::{ChartConfig, Dimensions, Palette};
use gtv_data::DEFAULT_URL;

pub mod fetch;
pub mod render;
pub mod source;
pub mod summary;

#[derive(Subcommand)]
pub enum Command {
    /// Download the temperature dataset to disk
    Fetch {
        /// Output path for the JSON document
        #[arg(short = 'o', long)]
        output: String,

        /// Also export the records as CSV (year,month,variance)
        #[arg(long)]
        csv: Option<String>,

        /// Dataset URL
        #[arg(long, default_value = DEFAULT_URL)]
        url: String,
    },

    /// Render the heat map as an SVG file
    Render {
        /// Output path for the SVG
        #[arg(short = 'o', long)]
        output: String,

        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        chart: ChartArgs,
    },

    /// Print record count, year range and color band totals
    Summary {
        #[command(flatten)]
        source: SourceArgs,
    },
}

/// Where to read the dataset from: a local JSON file, or the URL.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Read a previously fetched JSON document instead of the network
    #[arg(short = 'i', long)]
    pub input: Option<String>,

    /// Dataset URL, used when no input file is given
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,
}

/// Surface size and band colors.
#[derive(Args, Debug, Clone)]
pub struct ChartArgs {
    #[arg(long, default_value_t = 1400.0)]
    pub width: f64,
    #[arg(long, default_value_t = 600.0)]
    pub height: f64,
    #[arg(long, default_value_t = 80.0)]
    pub padding: f64,

    /// Fill for variance <= -2
    #[arg(long, default_value = "#355C7D")]
    pub lowlow: String,
    /// Fill for -2 < variance <= -1
    #[arg(long, default_value = "#6C5B7B")]
    pub low: String,
    /// Fill for -1 < variance <= 0
    #[arg(long, default_value = "#C06C84")]
    pub base: String,
    /// Fill for 0 < variance <= 1
    #[arg(long, default_value = "#F8B195")]
    pub high: String,
    /// Fill for variance > 1
    #[arg(long, default_value = "#F67280")]
    pub highhigh: String,
}

impl From<ChartArgs> for ChartConfig {
    fn from(args: ChartArgs) -> Self {
        ChartConfig {
            dimensions: Dimensions {
                width: args.width,
                height: args.height,
                padding: args.padding,
            },
            palette: Palette {
                lowlow: args.lowlow,
                low: args.low,
                base: args.base,
                high: args.high,
                highhigh: args.highhigh,
            },
        }
    }
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch { output, csv, url } => {
            fetch::run_fetch(&url, &output, csv.as_deref()).await
        }
        Command::Render {
            output,
            source,
            chart,
        } => render::run_render(&source, chart.into(), &output).await,
        Command::Summary { source } => summary::run_summary(&source).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn test_render_defaults_match_chart_defaults() {
        let cli = TestCli::try_parse_from(["gtv-cli", "render", "-o", "out.svg"]).unwrap();
        match cli.command {
            Command::Render {
                output,
                source,
                chart,
            } => {
                assert_eq!(output, "out.svg");
                assert_eq!(source.input, None);
                assert_eq!(source.url, DEFAULT_URL);
                assert_eq!(ChartConfig::from(chart), ChartConfig::default());
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_render_overrides() {
        let cli = TestCli::try_parse_from([
            "gtv-cli", "render", "-o", "out.svg", "-i", "data.json", "--width", "800",
            "--highhigh", "red",
        ])
        .unwrap();
        let Command::Render { source, chart, .. } = cli.command else {
            panic!("expected render");
        };
        assert_eq!(source.input.as_deref(), Some("data.json"));
        let config = ChartConfig::from(chart);
        assert_eq!(config.dimensions.width, 800.0);
        assert_eq!(config.palette.highhigh, "red");
        assert_eq!(config.palette.lowlow, Palette::default().lowlow);
    }

    #[test]
    fn test_fetch_args() {
        let cli =
            TestCli::try_parse_from(["gtv-cli", "fetch", "-o", "d.json", "--csv", "d.csv"]).unwrap();
        let Command::Fetch { output, csv, url } = cli.command else {
            panic!("expected fetch");
        };
        assert_eq!(output, "d.json");
        assert_eq!(csv.as_deref(), Some("d.csv"));
        assert_eq!(url, DEFAULT_URL);
    }
}
