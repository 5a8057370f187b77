//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use shiprate_model::{MergeMode, TableKind};

#[derive(Parser)]
#[command(
    name = "shiprate",
    version,
    about = "Shipping rate quotes from CSV reference tables",
    long_about = "Quote carrier prices for a destination and parcel, and maintain the\n\
                  reference tables (countries, services, carrier zones, rates,\n\
                  settings, boxes) that drive them."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the table CSV files (default: $SHIPRATE_DATA_DIR, then ./DB).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Price every service for a destination and parcel.
    Quote(QuoteArgs),

    /// Check an upload file without writing anything.
    Validate(BatchArgs),

    /// Validate an upload file and write the resulting table.
    Upload(BatchArgs),

    /// List carrier/country pairs without a zone mapping.
    Coverage {
        /// Append placeholder rows (zone=TODO) for every missing pair.
        #[arg(long)]
        fill: bool,
    },

    /// List country codes mapped to a carrier zone.
    ZoneCountries {
        #[arg(value_name = "CARRIER")]
        carrier: String,
        #[arg(value_name = "ZONE")]
        zone: String,
    },

    /// Show the box-size guide.
    Boxes,

    /// Show row counts for every table.
    Tables,
}

#[derive(Args)]
pub struct QuoteArgs {
    /// Destination country code.
    #[arg(value_name = "COUNTRY")]
    pub country: String,

    /// Actual parcel weight in kg.
    #[arg(long, short = 'w', value_name = "KG")]
    pub weight: f64,

    #[arg(long, value_name = "CM", default_value_t = 0.0)]
    pub length: f64,

    #[arg(long, value_name = "CM", default_value_t = 0.0)]
    pub width: f64,

    #[arg(long, value_name = "CM", default_value_t = 0.0)]
    pub height: f64,
}

#[derive(Args)]
pub struct BatchArgs {
    /// Target table (countries, services, carrier_zones, rates, settings, boxes).
    #[arg(value_name = "TABLE")]
    pub table: TableKind,

    /// CSV file with a header row.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// replace: the file becomes the table; append: merge into current rows.
    #[arg(long, value_name = "MODE", default_value = "replace")]
    pub mode: MergeMode,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
