use crate::triage::record::{PatientAssessment, RawClinicalValues, RawPatientRecord, RiskLevel};
use crate::triage::{quality, score};

/// Scores one raw record. This never fails: an unevaluable field contributes
/// 0 to the total and surfaces as a data quality tag instead.
pub fn assess(record: &RawPatientRecord) -> PatientAssessment {
    let blood_pressure_risk = score::blood_pressure_risk(record.blood_pressure.as_ref());
    let temperature_risk = score::temperature_risk(record.temperature.as_ref());
    let age_risk = score::age_risk(record.age.as_ref());

    let total_risk_score = blood_pressure_risk + temperature_risk + age_risk;

    PatientAssessment {
        patient_id: record.patient_id.clone(),
        name: record.name.clone(),
        blood_pressure_risk,
        temperature_risk,
        age_risk,
        total_risk_score,
        risk_level: RiskLevel::from_total(total_risk_score),
        quality_tags: quality::detect(record),
        raw: RawClinicalValues {
            blood_pressure: record.blood_pressure.clone(),
            temperature: record.temperature.clone(),
            age: record.age.clone(),
        },
    }
}

/// Scores a full batch, one assessment per record, preserving input order.
pub fn assess_all(records: &[RawPatientRecord]) -> Vec<PatientAssessment> {
    records.iter().map(assess).collect()
}
