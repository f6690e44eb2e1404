use reqwest::Client;

use crate::config::Config;
use crate::errors::AppError;
use crate::google_ads_models::{
    conversion_action_path, ClickConversion, UploadClickConversionsRequest,
    UploadClickConversionsResponse,
};
use crate::models::{ConversionRecord, UploadSummary};

pub struct GoogleAdsService {
    client: Client,
    base_url: String,
    customer_id: String,
    conversion_action_id: String,
}

impl GoogleAdsService {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.google_ads_base_url.clone(),
            customer_id: config.google_ads_customer_id.clone(),
            conversion_action_id: config.conversion_action_id.clone(),
        }
    }

    /// Upload a batch of click conversions with partial-failure semantics.
    ///
    /// Returns how many conversions the API accepted and rejected. An empty
    /// batch short-circuits to an empty summary without a request.
    pub async fn upload_click_conversions(
        &self,
        records: &[ConversionRecord],
    ) -> Result<UploadSummary, AppError> {
        if records.is_empty() {
            return Ok(UploadSummary::default());
        }

        let conversions: Vec<ClickConversion> = records
            .iter()
            .map(|record| ClickConversion {
                gclid: record.gclid.clone(),
                conversion_action: conversion_action_path(
                    &self.customer_id,
                    &self.conversion_action_id,
                ),
                conversion_date_time: record.google_ads_date_time(),
                conversion_value: record.conversion_value,
            })
            .collect();

        let request = UploadClickConversionsRequest {
            conversions,
            // Continue even if some conversions fail
            partial_failure: true,
        };

        let url = format!(
            "{}/v17/customers/{}:uploadClickConversions",
            self.base_url, self.customer_id
        );

        tracing::info!(
            "Uploading {} click conversions to Google Ads",
            records.len()
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::ExternalApiError(format!("Google Ads request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!("Google Ads API returned error {}: {}", status, error_text);
            return Err(AppError::ExternalApiError(format!(
                "Google Ads API returned status {}: {}",
                status, error_text
            )));
        }

        let result: UploadClickConversionsResponse = response.json().await.map_err(|e| {
            AppError::ExternalApiError(format!("Failed to parse Google Ads response: {}", e))
        })?;

        if let Some(ref partial_failure) = result.partial_failure_error {
            tracing::warn!(
                "Partial failure during upload: {}",
                partial_failure
                    .message
                    .as_deref()
                    .unwrap_or("no message provided")
            );
        }

        // Under partial failure, rejected conversions come back as empty
        // result entries; accepted ones echo their gclid.
        let successful = result
            .results
            .iter()
            .filter(|entry| entry.gclid.is_some())
            .count();
        let failed = records.len() - successful;

        let summary = UploadSummary { successful, failed };
        tracing::info!(
            "Upload complete: {} successful, {} failed (of {})",
            summary.successful,
            summary.failed,
            summary.total()
        );

        Ok(summary)
    }
}
