use clap::Parser;
use patient_triage::api::ApiClient;
use patient_triage::cli::Args;
use patient_triage::config::TriageConfig;
use patient_triage::log::{self, SUBMIT, TRIAGE};
use patient_triage::triage::{alerts, assess};
use tracing::{debug, error, info, warn};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match TriageConfig::load(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration Error: {}", err);
            std::process::exit(exitcode::CONFIG);
        }
    };

    log::init(config.log.clone());

    info!(msg = "Starting Patient Triage", version = patient_triage::VERSION);

    let client = match ApiClient::new(&config.api) {
        Ok(client) => client,
        Err(err) => {
            error!(
                msg = "Could not build the assessment API client",
                error = err.to_string()
            );
            std::process::exit(exitcode::CONFIG);
        }
    };

    let patients = client.fetch_all_patients().await;
    if patients.is_empty() {
        warn!(msg = "No patient records retrieved");
    }

    let assessments = assess::assess_all(&patients);

    for assessment in &assessments {
        let flagged = assessment.total_risk_score >= alerts::HIGH_RISK_THRESHOLD
            || !assessment.quality_tags.is_empty();
        if flagged {
            debug!(
                target: TRIAGE,
                msg = "Flagged patient",
                patient = assessment.patient_id.to_owned(),
                blood_pressure = assessment.blood_pressure_risk,
                temperature = assessment.temperature_risk,
                age = assessment.age_risk,
                total = assessment.total_risk_score,
                level = assessment.risk_level.to_string(),
                tags = ?assessment.quality_tags,
            );
        }
    }

    let buckets = alerts::partition(&assessments);

    info!(
        target: TRIAGE,
        msg = "Assessment complete",
        patients = assessments.len(),
        high_risk = buckets.high_risk_patients.len(),
        fever = buckets.fever_patients.len(),
        data_quality = buckets.data_quality_issues.len(),
    );

    for (score, count) in alerts::score_distribution(&assessments) {
        debug!(target: TRIAGE, msg = "Risk score distribution", score, count);
    }

    if !args.should_submit() {
        info!(msg = "Dry run. Use the submit subcommand to send the alert lists");
        return;
    }

    match client.submit_assessment(&buckets).await {
        Ok(outcome) => {
            info!(
                target: SUBMIT,
                msg = "Assessment submitted",
                success = outcome.success,
                message = outcome.message,
            );

            if let Some(results) = outcome.results {
                info!(
                    target: SUBMIT,
                    msg = "Submission graded",
                    score = results.score.unwrap_or_default(),
                    status = results.status.unwrap_or_default(),
                    remaining_attempts = results.remaining_attempts.unwrap_or_default(),
                );

                if let Some(feedback) = results.feedback {
                    info!(target: SUBMIT, msg = "Feedback", feedback = feedback.to_string());
                }
            }
        }
        Err(err) => {
            error!(
                target: SUBMIT,
                msg = "Could not submit assessment",
                error = err.to_string()
            );
            std::process::exit(exitcode::UNAVAILABLE);
        }
    }
}
