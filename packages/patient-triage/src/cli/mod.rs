use crate::config::{LogConfig, LogFormat, LogLevel};
use clap::{Parser, Subcommand};

const DEFAULT_CONFIG_FILE: &str = "patient-triage.toml";

#[derive(Clone, Debug, Parser)]
#[command(version, about, verbatim_doc_comment)]
///
/// Patient Triage
///
/// Retrieves patient vitals from the assessment API, scores clinical risk and
/// reports the patients needing review.
///
pub struct Args {
    /// Optional path to a Patient Triage configuration file.
    ///
    /// Default is "patient-triage.toml".
    /// Configuration is loaded from this file, if present.
    /// Environment variables are used instead of the file or to override any values defined in the file.
    #[arg(short = 'p', long, default_value = DEFAULT_CONFIG_FILE, verbatim_doc_comment, global = true)]
    pub config_file_path: String,

    ///
    /// Optional log level.
    ///
    #[arg(short, long, value_enum, default_value_t = LogConfig::default_log_level(), env = "TRIAGE_LOG__LEVEL", global = true)]
    pub log_level: LogLevel,

    ///
    /// Optional log format. Default level is "pretty" if running in a terminal session, otherwise "structured".
    ///
    #[arg(short='f', long, value_enum, default_value_t = LogConfig::default_log_format(), env = "TRIAGE_LOG__FORMAT", global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the assessment and submit the alert lists to the API.
    ///
    /// Without this subcommand the assessment runs and the summary is
    /// reported, but nothing is sent.
    Submit,
}

impl Args {
    pub fn should_submit(&self) -> bool {
        matches!(self.command, Some(Commands::Submit))
    }
}
