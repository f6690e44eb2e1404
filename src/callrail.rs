use chrono::{DateTime, Duration, Utc};
use reqwest::Client;

use crate::callrail_models::CallRailCallsResponse;
use crate::config::Config;
use crate::errors::AppError;
use crate::models::ConversionRecord;

/// Fields requested from the calls listing. Keeps response payloads small.
const CALL_FIELDS: &str =
    "id,start_time,duration,tracking_phone_number,customer_phone_number,qualifying,value,tags,gclid";

pub struct CallRailService {
    client: Client,
    base_url: String,
    api_key: String,
    account_id: String,
}

impl CallRailService {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.callrail_base_url.clone(),
            api_key: config.callrail_api_key.clone(),
            account_id: config.callrail_account_id.clone(),
        }
    }

    /// Fetch qualified call conversions from CallRail for the window
    /// `[now - since_minutes, now]`.
    ///
    /// Only calls carrying a GCLID are returned; calls without one cannot be
    /// attributed to an ad click and are skipped with a debug log.
    pub async fn fetch_new_conversions(
        &self,
        since_minutes: i64,
        now: DateTime<Utc>,
    ) -> Result<Vec<ConversionRecord>, AppError> {
        let start_date = now - Duration::minutes(since_minutes);

        // Build URL with proper parameter encoding
        let url = reqwest::Url::parse_with_params(
            &format!("{}/a/{}/calls.json", self.base_url, self.account_id),
            &[
                (
                    "start_date",
                    start_date.format("%Y-%m-%dT%H:%M:%S").to_string().as_str(),
                ),
                (
                    "end_date",
                    now.format("%Y-%m-%dT%H:%M:%S").to_string().as_str(),
                ),
                ("fields", CALL_FIELDS),
                // Only fetch qualified leads
                ("qualifying", "true"),
            ],
        )
        .map_err(|e| AppError::ExternalApiError(format!("Failed to build URL: {}", e)))?;

        tracing::info!(
            "Fetching CallRail conversions for the last {} minutes",
            since_minutes
        );

        let response = self
            .client
            .get(url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Token token={}", self.api_key),
            )
            .send()
            .await
            .map_err(|e| AppError::ExternalApiError(format!("CallRail request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!("CallRail API returned error {}: {}", status, error_text);
            return Err(AppError::ExternalApiError(format!(
                "CallRail API returned status {}: {}",
                status, error_text
            )));
        }

        let calls_data: CallRailCallsResponse = response.json().await.map_err(|e| {
            AppError::ExternalApiError(format!("Failed to parse CallRail response: {}", e))
        })?;

        let mut conversions = Vec::new();
        for call in calls_data.calls {
            // Only include calls with GCLID tracking
            let gclid = match call.gclid {
                Some(ref gclid) if !gclid.is_empty() => gclid.clone(),
                _ => {
                    tracing::debug!("Skipping call {} without GCLID", call.id);
                    continue;
                }
            };

            let conversion_date_time = match DateTime::parse_from_rfc3339(&call.start_time) {
                Ok(parsed) => parsed.with_timezone(&Utc),
                Err(e) => {
                    tracing::warn!(
                        "Skipping call {} with unparseable start_time '{}': {}",
                        call.id,
                        call.start_time,
                        e
                    );
                    continue;
                }
            };

            conversions.push(ConversionRecord {
                gclid,
                conversion_date_time,
                conversion_value: call.value,
                call_id: call.id,
            });
        }

        tracing::info!("Fetched {} conversions from CallRail", conversions.len());
        Ok(conversions)
    }
}
