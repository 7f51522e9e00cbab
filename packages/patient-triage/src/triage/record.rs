use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::triage::quality::DataQualityTag;

/// One patient record as returned by the assessment API.
///
/// The three clinical fields are untrusted and arrive in whatever shape the
/// upstream system produced, so they are kept as raw JSON values until the
/// evaluators coerce them. The remaining fields pass through unexamined.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RawPatientRecord {
    #[serde(default)]
    pub patient_id: String,

    #[serde(default)]
    pub name: String,

    pub age: Option<Value>,

    pub blood_pressure: Option<Value>,

    pub temperature: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_date: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medications: Option<Value>,
}

/// Coarse three-band classification of the total risk score, for reporting.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Low ≤ 2, Medium 3-4, High ≥ 5.
    pub fn from_total(total: u8) -> Self {
        match total {
            0..=2 => RiskLevel::Low,
            3..=4 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }
}

impl Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        };
        write!(f, "{s}")
    }
}

/// The raw clinical values retained on an assessment for later inspection.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RawClinicalValues {
    pub blood_pressure: Option<Value>,
    pub temperature: Option<Value>,
    pub age: Option<Value>,
}

/// Derived per-patient assessment. Created once per record, never mutated.
///
/// A field risk of 0 means either a genuinely normal reading or a value that
/// could not be evaluated; `quality_tags` carries the distinction.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PatientAssessment {
    pub patient_id: String,
    pub name: String,
    pub blood_pressure_risk: u8,
    pub temperature_risk: u8,
    pub age_risk: u8,
    pub total_risk_score: u8,
    pub risk_level: RiskLevel,
    pub quality_tags: Vec<DataQualityTag>,
    pub raw: RawClinicalValues,
}
