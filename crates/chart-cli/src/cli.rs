//! CLI argument definitions for the chart graph tool.

use std::path::PathBuf;

use chart_graph::SerializationFormat;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

/// Patient used by `rdf` when none is given.
pub const DEFAULT_PATIENT_ID: &str = "1520204";

#[derive(Parser)]
#[command(
    name = "chart-rdf",
    version,
    about = "Assemble patient chart graphs from clinical fixture files",
    long_about = "Assemble one RDF graph per patient from flat clinical fixture files.\n\n\
                  Graphs can be printed or written as RDF/XML, Turtle, or N-Triples."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the per-domain CSV files.
    #[arg(long = "data-dir", value_name = "DIR", default_value = "data", global = true)]
    pub data_dir: PathBuf,

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
    /// Print one patient's graph to stdout.
    Rdf(RdfArgs),

    /// Write every patient's graph into a directory.
    Write(WriteArgs),

    /// Summarize one patient, or all patients.
    Summary(SummaryArgs),

    /// List the clinical domains mapped into each graph.
    Domains,
}

#[derive(Parser)]
pub struct RdfArgs {
    /// Patient identifier.
    #[arg(value_name = "PID", default_value = DEFAULT_PATIENT_ID)]
    pub patient_id: String,

    /// Serialization format.
    #[arg(long = "format", value_enum, default_value = "xml")]
    pub format: RdfFormatArg,
}

#[derive(Parser)]
pub struct WriteArgs {
    /// Existing output directory.
    #[arg(value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Serialization format.
    #[arg(long = "format", value_enum, default_value = "xml")]
    pub format: RdfFormatArg,
}

#[derive(Parser)]
pub struct SummaryArgs {
    /// Patient identifier (all patients when omitted).
    #[arg(value_name = "PID")]
    pub patient_id: Option<String>,
}

/// CLI serialization format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum RdfFormatArg {
    #[value(aliases = ["rdf/xml", "rdfxml"])]
    Xml,
    #[value(alias = "ttl")]
    Turtle,
    #[value(aliases = ["ntriples", "n-triples"])]
    Nt,
}

impl From<RdfFormatArg> for SerializationFormat {
    fn from(format: RdfFormatArg) -> Self {
        match format {
            RdfFormatArg::Xml => SerializationFormat::RdfXml,
            RdfFormatArg::Turtle => SerializationFormat::Turtle,
            RdfFormatArg::Nt => SerializationFormat::NTriples,
        }
    }
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
