mod client;

use serde::Deserialize;
use serde_json::Value;

use crate::triage::RawPatientRecord;

pub use client::ApiClient;

/// One page of the patients listing.
#[derive(Debug, Deserialize)]
pub struct PatientPage {
    #[serde(default)]
    pub data: Vec<RawPatientRecord>,

    #[serde(default)]
    pub pagination: Pagination,
}

/// Pagination metadata as the assessment API reports it. Fields are
/// defaulted so a sparse payload terminates the walk instead of failing it.
#[derive(Debug, Default, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub page: u32,

    #[serde(default)]
    pub limit: u32,

    #[serde(default)]
    pub total: u32,

    #[serde(default, rename = "totalPages")]
    pub total_pages: u32,

    #[serde(default, rename = "hasNext")]
    pub has_next: bool,

    #[serde(default, rename = "hasPrevious")]
    pub has_previous: bool,
}

/// Result of posting the alert lists.
#[derive(Debug, Deserialize)]
pub struct SubmissionOutcome {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub message: String,

    pub results: Option<SubmissionResults>,
}

/// Grading detail on a submission. Decoded loosely; the endpoint adds fields
/// over time and `feedback` is free-form.
#[derive(Debug, Deserialize)]
pub struct SubmissionResults {
    pub score: Option<f64>,

    pub percentage: Option<f64>,

    pub status: Option<String>,

    pub attempt_number: Option<u32>,

    pub remaining_attempts: Option<u32>,

    pub feedback: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_deserializes_from_listing_response() {
        let page: PatientPage = serde_json::from_value(json!({
            "data": [
                {
                    "patient_id": "DEMO001",
                    "name": "TestPatient, John",
                    "age": 45,
                    "gender": "M",
                    "blood_pressure": "120/80",
                    "temperature": 98.6,
                    "visit_date": "2024-01-15",
                    "diagnosis": "Sample_Hypertension",
                    "medications": "DemoMed_A 10mg, TestDrug_B 500mg"
                }
            ],
            "pagination": {
                "page": 1,
                "limit": 5,
                "total": 50,
                "totalPages": 10,
                "hasNext": true,
                "hasPrevious": false
            },
            "metadata": {
                "timestamp": "2025-07-15T23:01:05.059Z",
                "version": "v1.0"
            }
        }))
        .expect("page should deserialize");

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].patient_id, "DEMO001");
        assert_eq!(page.pagination.total_pages, 10);
        assert!(page.pagination.has_next);
    }

    #[test]
    fn sparse_page_terminates_pagination() {
        let page: PatientPage =
            serde_json::from_value(json!({ "data": [] })).expect("page should deserialize");

        assert!(page.data.is_empty());
        assert!(!page.pagination.has_next);
    }

    #[test]
    fn submission_outcome_decodes_loosely() {
        let outcome: SubmissionOutcome = serde_json::from_value(json!({
            "success": true,
            "message": "Assessment submitted successfully",
            "results": {
                "score": 91.94,
                "percentage": 92,
                "status": "PASS",
                "attempt_number": 1,
                "remaining_attempts": 2,
                "is_personal_best": true,
                "feedback": { "strengths": [], "issues": [] }
            }
        }))
        .expect("outcome should deserialize");

        assert!(outcome.success);
        let results = outcome.results.expect("results should be present");
        assert_eq!(results.score, Some(91.94));
        assert_eq!(results.status.as_deref(), Some("PASS"));
        assert_eq!(results.remaining_attempts, Some(2));
    }
}
