//! Command implementations for the weather charts CLI.
//!
//! Each subcommand loads the weather CSV once, then runs the same grouping,
//! aggregation and chart-model code the browser dashboard uses.

use clap::{Subcommand, ValueEnum};
use wx_data::grouping::Metric;
use wx_weather::selection::{ALL_CITIES, ALL_DATA};

pub mod export;
pub mod load;
pub mod report;

#[derive(Subcommand)]
pub enum Command {
    /// Print total precipitation per city, ascending
    Summary {
        /// Path to the weather CSV
        #[arg(short = 'c', long)]
        csv: String,

        /// Four-digit year, or "All Data"
        #[arg(short = 'y', long, default_value = ALL_DATA)]
        year: String,
    },

    /// Print per-city daily values as CSV (city,date,value)
    Series {
        /// Path to the weather CSV
        #[arg(short = 'c', long)]
        csv: String,

        /// City name, or "All Cities"
        #[arg(long, default_value = ALL_CITIES)]
        city: String,

        /// Which measurement to print
        #[arg(short = 'm', long, value_enum, default_value_t = MetricArg::Precipitation)]
        metric: MetricArg,
    },

    /// Write the three chart models as one JSON document
    Export {
        /// Path to the weather CSV
        #[arg(short = 'c', long)]
        csv: String,

        /// Output JSON path
        #[arg(short = 'o', long)]
        out: String,

        /// Year for the precipitation totals chart
        #[arg(short = 'y', long, default_value = ALL_DATA)]
        year: String,

        /// City for the daily precipitation chart
        #[arg(long, default_value = ALL_CITIES)]
        city: String,

        /// Optional chart layout JSON (margins, outer size)
        #[arg(short = 'l', long)]
        layout: Option<String>,

        /// Scale the bar chart to the largest total instead of the fixed 0-50 axis
        #[arg(long)]
        derive_bar_domain: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricArg {
    MaxTemp,
    Precipitation,
}

impl From<MetricArg> for Metric {
    fn from(value: MetricArg) -> Self {
        match value {
            MetricArg::MaxTemp => Metric::MaxTemp,
            MetricArg::Precipitation => Metric::Precipitation,
        }
    }
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { csv, year } => report::run_summary(&csv, &year).await,
        Command::Series { csv, city, metric } => {
            report::run_series(&csv, &city, metric.into()).await
        }
        Command::Export {
            csv,
            out,
            year,
            city,
            layout,
            derive_bar_domain,
        } => {
            let options = export::ExportOptions {
                year,
                city,
                layout_path: layout,
                derive_bar_domain,
            };
            export::run_export(&csv, &out, &options).await
        }
    }
}
