mod log;
mod triage;

pub use log::{LogConfig, LogFormat, LogLevel, LogOutput};
pub use triage::{ApiConfig, TriageConfig};

pub const TRIAGE_PREFIX: &str = "TRIAGE";
pub const DEFAULT_CONFIG_FILE_PATH: &str = "patient-triage.toml";
