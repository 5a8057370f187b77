//! `shiprate` command-line entry point.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use shiprate_cli::commands::{
    run_boxes, run_coverage, run_quote, run_tables, run_upload, run_validate, run_zone_countries,
};
use shiprate_cli::logging::{LogConfig, LogFormat, init_logging};
use shiprate_cli::report::{
    boxes_table, coverage_lines, diagnostic_lines, outcome_line, quote_table, tables_table,
    weight_lines,
};
use shiprate_core::QuoteRequest;
use shiprate_store::CsvStore;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<()> {
    let mut store = CsvStore::from_config(cli.data_dir.as_deref());
    tracing::debug!(data_dir = %store.root().display(), "data directory resolved");
    match cli.command {
        Command::Quote(args) => {
            let request = QuoteRequest::new(args.country, args.weight).with_dimensions(
                args.length,
                args.width,
                args.height,
            );
            let quote = run_quote(&store, &request)?;
            for line in weight_lines(&quote) {
                println!("{line}");
            }
            println!("{}", quote_table(&quote));
            for line in diagnostic_lines(&quote) {
                eprintln!("warning: {line}");
            }
        }
        Command::Validate(args) => {
            let outcome = run_validate(&store, args.table, &args.file, args.mode)?;
            println!("{}", outcome_line(args.table, &outcome, false));
        }
        Command::Upload(args) => {
            let outcome = run_upload(&mut store, args.table, &args.file, args.mode)?;
            println!("{}", outcome_line(args.table, &outcome, true));
        }
        Command::Coverage { fill } => {
            let report = run_coverage(&mut store, fill)?;
            for line in coverage_lines(&report) {
                println!("{line}");
            }
        }
        Command::ZoneCountries { carrier, zone } => {
            let codes = run_zone_countries(&store, &carrier, &zone)?;
            if codes.is_empty() {
                println!("No countries mapped to {carrier} {zone}.");
            } else {
                println!("{}", codes.join(", "));
            }
        }
        Command::Boxes => {
            let entries = run_boxes(&store)?;
            if entries.is_empty() {
                println!("No boxes configured.");
            } else {
                println!("{}", boxes_table(&entries));
            }
        }
        Command::Tables => {
            let counts = run_tables(&store)?;
            println!("Data directory: {}", store.root().display());
            println!("{}", tables_table(&counts));
        }
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
