use chrono::{DateTime, Utc};

use crate::callrail::CallRailService;
use crate::config::Config;
use crate::errors::AppError;
use crate::google_ads::GoogleAdsService;
use crate::models::{ConversionRecord, UploadSummary};
use crate::sync_state::SyncStateTracker;
use crate::validator;

/// Outcome of one sync run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncReport {
    /// Conversions fetched from CallRail.
    pub fetched: usize,
    /// Records rejected for GCLID format problems.
    pub rejected_format: usize,
    /// Records rejected for being outside the attribution window.
    pub rejected_age: usize,
    /// Upload batch outcome.
    pub upload: UploadSummary,
}

/// One fetch → validate → upload cycle.
///
/// Flow:
/// 1. Compute the fetch window from the sync-state watermark.
/// 2. Fetch qualified call conversions from CallRail.
/// 3. Validate each GCLID's format and the conversion's age; rejects are
///    logged and skipped, never fatal.
/// 4. Upload the valid remainder to Google Ads.
/// 5. On at least one successful upload, advance the watermark to the run's
///    start time. A failed state write is a warning, not a failed run.
///
/// `now` is the run's reference time, passed explicitly so the window
/// computation and age checks stay deterministic under test.
pub async fn run_sync(
    config: &Config,
    callrail: &CallRailService,
    google_ads: &GoogleAdsService,
    tracker: &SyncStateTracker,
    now: DateTime<Utc>,
) -> Result<SyncReport, AppError> {
    // Step 1: Fetch window from the watermark
    let since_minutes = tracker.minutes_since_last_sync(now, config.default_lookback_minutes);

    // Step 2: Fetch from CallRail
    let records = callrail.fetch_new_conversions(since_minutes, now).await?;
    let mut report = SyncReport {
        fetched: records.len(),
        ..SyncReport::default()
    };

    if records.is_empty() {
        tracing::info!("No new conversions to process");
        return Ok(report);
    }

    // Step 3: Validate before upload
    let valid: Vec<ConversionRecord> = records
        .into_iter()
        .filter(|record| {
            let (format_ok, message) = validator::validate_format(&record.gclid);
            if !format_ok {
                tracing::warn!("Rejecting call {}: {}", record.call_id, message);
                report.rejected_format += 1;
                return false;
            }

            let (age_ok, message) = validator::validate_age(
                record.conversion_date_time,
                now,
                config.max_conversion_age_days,
            );
            if !age_ok {
                tracing::warn!("Rejecting call {}: {}", record.call_id, message);
                report.rejected_age += 1;
                return false;
            }

            true
        })
        .collect();

    if valid.is_empty() {
        tracing::warn!(
            "All {} fetched conversions were rejected by validation",
            report.fetched
        );
        return Ok(report);
    }

    // Step 4: Upload to Google Ads
    report.upload = google_ads.upload_click_conversions(&valid).await?;

    // Step 5: Advance the watermark only after real progress, so a fully
    // failed run refetches the same window next time
    if report.upload.successful > 0 {
        if let Err(e) = tracker.save_last_sync_time(now) {
            tracing::warn!("Could not save last sync time: {}", e);
        }
    }

    tracing::info!(
        "Sync run complete: fetched={}, rejected_format={}, rejected_age={}, uploaded={}, failed={}",
        report.fetched,
        report.rejected_format,
        report.rejected_age,
        report.upload.successful,
        report.upload.failed
    );

    Ok(report)
}
