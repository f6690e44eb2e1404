use serde::{Deserialize, Serialize};

/// A single click conversion in Google Ads' upload format.
/// Documentation: https://developers.google.com/google-ads/api/docs/conversions/upload-clicks
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickConversion {
    /// Google Click Identifier tying the conversion back to the ad click.
    pub gclid: String,

    /// Resource name of the conversion action, e.g.
    /// `customers/1234567890/conversionActions/987654321`.
    pub conversion_action: String,

    /// Conversion timestamp, `YYYY-MM-DD HH:MM:SS+TZ`.
    pub conversion_date_time: String,

    /// Conversion value in account currency (revenue tracking).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_value: Option<f64>,
}

/// Request body for `uploadClickConversions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadClickConversionsRequest {
    pub conversions: Vec<ClickConversion>,

    /// Continue even if some conversions in the batch fail.
    pub partial_failure: bool,
}

/// Response body for `uploadClickConversions`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadClickConversionsResponse {
    #[serde(default)]
    pub results: Vec<ClickConversionResult>,

    #[serde(default)]
    pub partial_failure_error: Option<PartialFailureError>,
}

/// One entry of the upload response, mirroring the request order.
///
/// Entries that failed come back empty under partial failure, so every
/// field is optional.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickConversionResult {
    #[serde(default)]
    pub gclid: Option<String>,

    #[serde(default)]
    pub conversion_action: Option<String>,

    #[serde(default)]
    pub conversion_date_time: Option<String>,
}

/// Partial-failure status attached to the response when some conversions
/// in the batch were rejected.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PartialFailureError {
    #[serde(default)]
    pub code: Option<i32>,

    #[serde(default)]
    pub message: Option<String>,
}

/// Builds the conversion action resource name for a customer.
pub fn conversion_action_path(customer_id: &str, conversion_action_id: &str) -> String {
    format!(
        "customers/{}/conversionActions/{}",
        customer_id, conversion_action_id
    )
}
