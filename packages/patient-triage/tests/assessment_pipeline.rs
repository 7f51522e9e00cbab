use patient_triage::triage::{alerts, assess, DataQualityTag, RawPatientRecord, RiskLevel};
use serde_json::json;

fn batch() -> Vec<RawPatientRecord> {
    // A representative page of the assessment feed: clean records, numeric
    // strings, and the usual breakage.
    serde_json::from_value(json!([
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
        },
        {
            "patient_id": "DEMO002",
            "name": "AssessmentUser, Jane",
            "age": 67,
            "gender": "F",
            "blood_pressure": "140/90",
            "temperature": 99.2,
            "visit_date": "2024-01-16",
            "diagnosis": "Eval_Diabetes",
            "medications": "FakeMed 1000mg"
        },
        {
            "patient_id": "DEMO003",
            "name": "Stringly, Typed",
            "age": "70",
            "blood_pressure": "150/95",
            "temperature": "101.2",
            "visit_date": "2024-01-17"
        },
        {
            "patient_id": "DEMO004",
            "name": "Broken, Record",
            "age": "oops",
            "blood_pressure": "not-a-bp",
            "temperature": null,
            "visit_date": "2024-01-18"
        }
    ]))
    .expect("batch should deserialize")
}

#[test]
fn full_batch_is_assessed_and_partitioned() {
    let records = batch();
    let assessments = assess::assess_all(&records);

    // Every record produces exactly one assessment, in input order.
    assert_eq!(assessments.len(), records.len());
    let ids = assessments
        .iter()
        .map(|a| a.patient_id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["DEMO001", "DEMO002", "DEMO003", "DEMO004"]);

    // DEMO001: elevated BP (120/80 is Stage 1 on diastolic), normal
    // temperature, middle age band.
    assert_eq!(assessments[0].blood_pressure_risk, 3);
    assert_eq!(assessments[0].temperature_risk, 0);
    assert_eq!(assessments[0].age_risk, 1);
    assert_eq!(assessments[0].risk_level, RiskLevel::Medium);

    // DEMO002: Stage 2, normal temperature (99.2 is under the fever line),
    // over 65.
    assert_eq!(assessments[1].total_risk_score, 6);
    assert_eq!(assessments[1].risk_level, RiskLevel::High);

    // DEMO003: numeric strings score like numbers.
    assert_eq!(assessments[2].total_risk_score, 8);
    assert_eq!(assessments[2].risk_level, RiskLevel::High);

    // DEMO004: nothing parseable, still assessed, fully tagged.
    assert_eq!(assessments[3].total_risk_score, 0);
    assert_eq!(assessments[3].risk_level, RiskLevel::Low);
    assert_eq!(
        assessments[3].quality_tags,
        vec![
            DataQualityTag::BpMalformed,
            DataQualityTag::TempMissing,
            DataQualityTag::AgeInvalid,
        ]
    );

    let buckets = alerts::partition(&assessments);
    assert_eq!(
        buckets.high_risk_patients,
        vec!["DEMO001", "DEMO002", "DEMO003"]
    );
    assert_eq!(buckets.fever_patients, vec!["DEMO003"]);
    assert_eq!(buckets.data_quality_issues, vec!["DEMO004"]);
}

#[test]
fn reassessment_is_idempotent() {
    let records = batch();
    assert_eq!(assess::assess_all(&records), assess::assess_all(&records));
}
