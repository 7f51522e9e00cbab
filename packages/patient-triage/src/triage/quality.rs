use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::triage::coerce;
use crate::triage::record::RawPatientRecord;

/// Why a clinical field could not be used, in the names the review endpoint
/// expects. Detection is independent of risk scoring: a field that fails to
/// parse scores 0 and is tagged here, and the two facts travel separately.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum DataQualityTag {
    #[serde(rename = "BP_MISSING")]
    BpMissing,
    #[serde(rename = "BP_MALFORMED")]
    BpMalformed,
    #[serde(rename = "BP_INVALID")]
    BpInvalid,
    #[serde(rename = "TEMP_MISSING")]
    TempMissing,
    #[serde(rename = "TEMP_INVALID")]
    TempInvalid,
    #[serde(rename = "AGE_MISSING")]
    AgeMissing,
    #[serde(rename = "AGE_INVALID")]
    AgeInvalid,
}

impl DataQualityTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataQualityTag::BpMissing => "BP_MISSING",
            DataQualityTag::BpMalformed => "BP_MALFORMED",
            DataQualityTag::BpInvalid => "BP_INVALID",
            DataQualityTag::TempMissing => "TEMP_MISSING",
            DataQualityTag::TempInvalid => "TEMP_INVALID",
            DataQualityTag::AgeMissing => "AGE_MISSING",
            DataQualityTag::AgeInvalid => "AGE_INVALID",
        }
    }
}

impl Display for DataQualityTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inspects the three clinical fields and returns the detected defects in
/// evaluation order: blood pressure, then temperature, then age. At most one
/// tag per field; an empty list means no detected issues.
pub fn detect(record: &RawPatientRecord) -> Vec<DataQualityTag> {
    let mut tags = Vec::new();

    tags.extend(blood_pressure_tag(record.blood_pressure.as_ref()));
    tags.extend(temperature_tag(record.temperature.as_ref()));
    tags.extend(age_tag(record.age.as_ref()));

    tags
}

fn blood_pressure_tag(raw: Option<&Value>) -> Option<DataQualityTag> {
    let reading = match raw {
        Some(Value::String(s)) if !s.is_empty() => s,
        _ => return Some(DataQualityTag::BpMissing),
    };

    let parts = reading.split('/').collect::<Vec<_>>();
    if parts.len() != 2 {
        return Some(DataQualityTag::BpMalformed);
    }

    let systolic = parts[0].trim().parse::<i64>();
    let diastolic = parts[1].trim().parse::<i64>();

    match (systolic, diastolic) {
        (Ok(s), Ok(d)) if s > 0 && d > 0 => None,
        _ => Some(DataQualityTag::BpInvalid),
    }
}

fn temperature_tag(raw: Option<&Value>) -> Option<DataQualityTag> {
    if coerce::is_falsy(raw) {
        return Some(DataQualityTag::TempMissing);
    }

    match coerce::to_float(raw) {
        Some(_) => None,
        None => Some(DataQualityTag::TempInvalid),
    }
}

fn age_tag(raw: Option<&Value>) -> Option<DataQualityTag> {
    if coerce::is_falsy(raw) {
        return Some(DataQualityTag::AgeMissing);
    }

    match coerce::to_int(raw) {
        Some(_) => None,
        None => Some(DataQualityTag::AgeInvalid),
    }
}
