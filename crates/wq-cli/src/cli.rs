//! CLI argument definitions for the water quality tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use wq_model::WaterSource;

#[derive(Parser)]
#[command(
    name = "wq",
    version,
    about = "Water Quality Analyzer - Compare sample readings to WHO and ECR'2023 guidelines",
    long_about = "Compare water quality sample readings to WHO and ECR'2023 guideline limits.\n\n\
                  Reads up to three replicate readings per parameter from a CSV file,\n\
                  averages them, classifies the mean against both guidelines, and can\n\
                  request a narrative analysis and treatment recommendation from a\n\
                  chat-completion service (requires OPENAI_API_KEY)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Analyze a samples file against WHO and ECR'2023 guidelines.
    Analyze(AnalyzeArgs),

    /// List the supported parameters and their guideline limits.
    Parameters,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the samples CSV file (columns: parameter,sample_1,sample_2,sample_3).
    #[arg(value_name = "SAMPLES_CSV")]
    pub samples_file: PathBuf,

    /// Type of water source the samples were taken from.
    #[arg(long = "source", value_enum, default_value = "unspecified")]
    pub source: SourceArg,

    /// Optional sample source and location, forwarded into the advisory prompt.
    #[arg(long = "location", value_name = "TEXT")]
    pub location: Option<String>,

    /// Emit the comparison report as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,

    /// Skip the narrative advisory request.
    ///
    /// The comparison report is always produced; this only suppresses the
    /// chat-completion call.
    #[arg(long = "no-advisory")]
    pub no_advisory: bool,

    /// Override the advisory model name.
    #[arg(long = "model", value_name = "NAME")]
    pub model: Option<String>,
}

/// CLI water source choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum SourceArg {
    River,
    Lake,
    Sea,
    AquiferGroundwater,
    NaturalSpring,
    Unspecified,
}

impl From<SourceArg> for WaterSource {
    fn from(value: SourceArg) -> Self {
        match value {
            SourceArg::River => Self::River,
            SourceArg::Lake => Self::Lake,
            SourceArg::Sea => Self::Sea,
            SourceArg::AquiferGroundwater => Self::AquiferGroundwater,
            SourceArg::NaturalSpring => Self::NaturalSpring,
            SourceArg::Unspecified => Self::Unspecified,
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
