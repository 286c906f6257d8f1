//! Chart graph CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use chart_cli::commands::{domain_table, load_data, render_patient, write_patients};
use chart_cli::logging::{LogConfig, LogFormat, init_logging};
use chart_cli::summary::{build_summaries, print_summary};

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
    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    if let Command::Domains = cli.command {
        println!("{}", domain_table());
        return Ok(0);
    }
    let records = load_data(&cli.data_dir)?;
    match &cli.command {
        Command::Rdf(args) => {
            print!("{}", render_patient(&records, &args.patient_id, args.format.into())?);
            Ok(0)
        }
        Command::Write(args) => {
            println!("Writing files to {}", args.output_dir.display());
            let outcome = write_patients(&records, &args.output_dir, args.format.into())?;
            println!("Done writing {} patient files", outcome.written.len());
            for failure in &outcome.failures {
                eprintln!("error: patient {}: {:#}", failure.patient_id, failure.error);
            }
            Ok(if outcome.has_errors() { 1 } else { 0 })
        }
        Command::Summary(args) => {
            let summaries = build_summaries(&records, args.patient_id.as_deref())?;
            print_summary(&summaries);
            Ok(0)
        }
        Command::Domains => Ok(0),
    }
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
