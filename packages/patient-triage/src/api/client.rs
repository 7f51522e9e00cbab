use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use tokio::time;
use tracing::{debug, info, warn};

use super::{PatientPage, SubmissionOutcome};
use crate::config::ApiConfig;
use crate::error::{ApiError, Error};
use crate::log::{FETCH, SUBMIT};
use crate::triage::{AlertBuckets, RawPatientRecord};

const API_KEY_HEADER: &str = "x-api-key";
const PATIENTS_PATH: &str = "/patients";
const SUBMIT_ASSESSMENT_PATH: &str = "/submit-assessment";

/// Client for the patient assessment API. Holds the authenticated reqwest
/// client plus the pagination settings from config.
#[derive(Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    page_limit: u32,
    page_delay: Duration,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, Error> {
        let mut api_key =
            HeaderValue::from_str(&config.api_key).map_err(|_| ApiError::InvalidApiKey)?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout())
            .build()
            .map_err(ApiError::from)?;

        Ok(ApiClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page_limit: config.page_limit,
            page_delay: config.page_delay(),
        })
    }

    /// Fetches one page of the patients listing.
    pub async fn get_patients(&self, page: u32) -> Result<PatientPage, Error> {
        let url = format!("{}{}", self.base_url, PATIENTS_PATH);

        let response = self
            .client
            .get(&url)
            .query(&[("page", page), ("limit", self.page_limit)])
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::from)?;

        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let listing = serde_json::from_str::<PatientPage>(&body).map_err(ApiError::from)?;

        Ok(listing)
    }

    /// Walks the paginated listing to the end, carrying the accumulated
    /// records between iterations, with a fixed pause between pages.
    ///
    /// Pagination is fail-fast: any page error ends the walk as "no further
    /// pages" and whatever was accumulated is returned for assessment.
    pub async fn fetch_all_patients(&self) -> Vec<RawPatientRecord> {
        let mut patients: Vec<RawPatientRecord> = Vec::new();
        let mut page = 1;

        loop {
            debug!(target: FETCH, msg = "Fetching page", page);

            match self.get_patients(page).await {
                Ok(listing) if !listing.data.is_empty() => {
                    info!(
                        target: FETCH,
                        msg = "Fetched page",
                        page,
                        count = listing.data.len(),
                    );

                    patients.extend(listing.data);

                    if !listing.pagination.has_next {
                        break;
                    }

                    page += 1;
                    time::sleep(self.page_delay).await;
                }
                Ok(_) => {
                    info!(target: FETCH, msg = "No more records available", page);
                    break;
                }
                Err(err) => {
                    warn!(
                        target: FETCH,
                        msg = "Page fetch failed, stopping pagination",
                        page,
                        error = err.to_string(),
                    );
                    break;
                }
            }
        }

        info!(target: FETCH, msg = "Fetch complete", total = patients.len());

        patients
    }

    /// Posts the three alert lists to the submission endpoint.
    pub async fn submit_assessment(
        &self,
        buckets: &AlertBuckets,
    ) -> Result<SubmissionOutcome, Error> {
        let url = format!("{}{}", self.base_url, SUBMIT_ASSESSMENT_PATH);

        debug!(
            target: SUBMIT,
            msg = "Submitting assessment",
            high_risk = buckets.high_risk_patients.len(),
            fever = buckets.fever_patients.len(),
            data_quality = buckets.data_quality_issues.len(),
        );

        let response = self
            .client
            .post(&url)
            .json(buckets)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::from)?;

        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let outcome = serde_json::from_str::<SubmissionOutcome>(&body).map_err(ApiError::from)?;

        Ok(outcome)
    }
}
