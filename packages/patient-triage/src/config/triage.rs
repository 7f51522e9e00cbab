use std::path::PathBuf;
use std::time::Duration;

use config::{Config, Environment};
use regex::Regex;
use serde::Deserialize;

use super::{LogConfig, LogFormat, TRIAGE_PREFIX};
use crate::error::{ConfigError, Error};
use crate::Args;

#[derive(Clone, Debug, Deserialize)]
pub struct TriageConfig {
    pub api: ApiConfig,

    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,

    pub api_key: String,

    #[serde(default = "ApiConfig::default_page_limit")]
    pub page_limit: u32,

    /// Pause between page requests, in milliseconds.
    #[serde(default = "ApiConfig::default_page_delay")]
    pub page_delay: u64,

    /// Per-request timeout, in seconds.
    #[serde(default = "ApiConfig::default_request_timeout")]
    pub request_timeout: u64,
}

impl ApiConfig {
    pub const fn default_page_limit() -> u32 {
        20
    }

    pub const fn default_page_delay() -> u64 {
        1000
    }

    pub const fn default_request_timeout() -> u64 {
        30
    }

    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

/// Config defaults to a file called `patient-triage.toml` in the current
/// directory. Supports TOML, JSON, YAML.
/// Variable names should match the struct field names.
///
/// ENV vars can be used to override file settings.
///
/// ENV vars must be prefixed with `TRIAGE_`.
///
impl TriageConfig {
    pub fn load(args: &Args) -> Result<TriageConfig, Error> {
        // Log a warning to user that config file is missing
        if !PathBuf::from(&args.config_file_path).exists() {
            println!(
                "Configuration file was not found: {}",
                args.config_file_path
            );
            println!("Loading config values from environment variables.");
        }
        let mut config = TriageConfig::build(&args.config_file_path)?;

        // If log level is default, it has not been set by the user in config
        if config.log.level == LogConfig::default_log_level() {
            config.log.level = args.log_level;
        }

        // If log format is default, it has not been set by the user in config
        if config.log.format == LogConfig::default_log_format() {
            config.log.format = args.log_format;
        }

        Ok(config)
    }

    pub fn build(path: &str) -> Result<Self, Error> {
        // For parsing nested env values such as TRIAGE_API__BASE_URL,
        // TRIAGE_API__PAGE_LIMIT
        let triage_env_source = Environment::with_prefix(TRIAGE_PREFIX)
            .try_parsing(true)
            .separator("__")
            .prefix_separator("_");

        let config: Self = Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(triage_env_source)
            .build()?
            .try_deserialize()
            .map_err(|err| match err {
                config::ConfigError::Message(ref s) => match s {
                    s if s.contains("missing field") => {
                        let mut name = extract_field_name(s).map_or("unknown".to_string(), |s| s);

                        // The required fields live in the [api] table; report
                        // them with their full path.
                        if name == "base_url" || name == "api_key" {
                            name = format!("api.{name}");
                        }

                        ConfigError::MissingParameter { name }
                    }
                    s if s.contains("does not have variant constructor") => {
                        let (name, value) = extract_invalid_field(s);
                        ConfigError::InvalidParameter { name, value }
                    }
                    _ => err.into(),
                },
                _ => err.into(),
            })?;

        Ok(config)
    }

    pub fn use_structured_logging(&self) -> bool {
        matches!(self.log.format, LogFormat::Structured)
    }

    pub fn default_path() -> String {
        super::DEFAULT_CONFIG_FILE_PATH.to_string()
    }
}

///
/// Extracts a field name (if present) from a config::ConfigError::Message
/// This is called in `build` if a ConfigError message contains the string `missing field`
///
fn extract_field_name(input: &str) -> Option<String> {
    let re = Regex::new(r"`(\w+)`").unwrap();
    re.captures(input)
        .and_then(|caps| caps.get(1).map(|m| m.as_str().to_string()))
}

///
/// Extracts a field name (if present) from a config::ConfigError::Message
/// This is called in `build` if a ConfigError message contains the string `does not have variant constructor`
///
/// Error string is `enum {name} does not have variant constructor {value}`
///
fn extract_invalid_field(input: &str) -> (String, String) {
    let words = input.split(" ").collect::<Vec<_>>();

    let default_name = "unknown".to_string();
    let default_val = "".to_string();

    if !input.starts_with("enum") {
        return (default_name, default_val);
    }

    let name = words
        .get(1)
        .map_or(default_name.to_owned(), |w| w.to_string());

    let value = words
        .last()
        .map_or(default_val.to_owned(), |w| w.to_string());

    (name, value)
}
