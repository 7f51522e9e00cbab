use std::collections::BTreeMap;

use serde::Serialize;

use crate::triage::coerce;
use crate::triage::record::PatientAssessment;

/// Total score at or above which a patient lands on the high-risk list.
/// Alerting cuts at 4 while the `High` risk level starts at 5; the two
/// thresholds are separate contracts.
pub const HIGH_RISK_THRESHOLD: u8 = 4;

/// Fahrenheit reading at or above which a patient lands on the fever list.
pub const FEVER_THRESHOLD: f64 = 99.6;

/// The three alert lists the submission endpoint expects. Buckets are
/// independent: a patient may appear in any combination of them, or none.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AlertBuckets {
    pub high_risk_patients: Vec<String>,
    pub fever_patients: Vec<String>,
    pub data_quality_issues: Vec<String>,
}

/// Buckets patient identifiers from a full batch of assessments, preserving
/// input order. Each predicate is evaluated independently for every patient.
pub fn partition(assessments: &[PatientAssessment]) -> AlertBuckets {
    let mut buckets = AlertBuckets::default();

    for assessment in assessments {
        if assessment.total_risk_score >= HIGH_RISK_THRESHOLD {
            buckets
                .high_risk_patients
                .push(assessment.patient_id.clone());
        }

        // Fever membership re-reads the retained raw temperature. A reading
        // that cannot be coerced keeps the patient off this list even if the
        // temperature contributed to the risk score.
        if let Some(temperature) = coerce::to_float(assessment.raw.temperature.as_ref()) {
            if temperature >= FEVER_THRESHOLD {
                buckets.fever_patients.push(assessment.patient_id.clone());
            }
        }

        if !assessment.quality_tags.is_empty() {
            buckets
                .data_quality_issues
                .push(assessment.patient_id.clone());
        }
    }

    buckets
}

/// Patient count per total risk score, for the run summary.
pub fn score_distribution(assessments: &[PatientAssessment]) -> BTreeMap<u8, usize> {
    let mut distribution = BTreeMap::new();
    for assessment in assessments {
        *distribution.entry(assessment.total_risk_score).or_insert(0) += 1;
    }
    distribution
}
