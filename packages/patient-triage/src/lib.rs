pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod log;
pub mod triage;

pub use crate::api::ApiClient;
pub use crate::cli::Args;
pub use crate::config::{ApiConfig, LogConfig, TriageConfig};
pub use crate::log::init;
pub use crate::triage::{
    AlertBuckets, DataQualityTag, PatientAssessment, RawPatientRecord, RiskLevel,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
pub mod test_helpers;
