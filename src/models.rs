use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A qualified call conversion ready for upload.
///
/// Built once from the CallRail fetch and read-only afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionRecord {
    /// Google Click Identifier captured by the tracking number pool.
    pub gclid: String,
    /// When the call (the conversion event) happened.
    pub conversion_date_time: DateTime<Utc>,
    /// Optional revenue attached to the call, in account currency.
    pub conversion_value: Option<f64>,
    /// CallRail call ID, kept for log correlation.
    pub call_id: String,
}

impl ConversionRecord {
    /// Formats the conversion timestamp the way Google Ads expects:
    /// `YYYY-MM-DD HH:MM:SS+TZ` (e.g. `2025-12-19 10:30:00+00:00`).
    pub fn google_ads_date_time(&self) -> String {
        self.conversion_date_time
            .format("%Y-%m-%d %H:%M:%S%:z")
            .to_string()
    }
}

/// One row of the four-column conversion-upload CSV.
///
/// CSV format:
/// `gclid,conversion_action_id,conversion_date_time,conversion_value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRow {
    pub gclid: String,
    pub conversion_action_id: String,
    pub conversion_date_time: String,
    #[serde(default)]
    pub conversion_value: String,
}

/// Outcome of one upload batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadSummary {
    pub successful: usize,
    pub failed: usize,
}

impl UploadSummary {
    pub fn total(&self) -> usize {
        self.successful + self.failed
    }
}
