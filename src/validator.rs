use chrono::{DateTime, Duration, Utc};
use regex::Regex;

/// GCLID validation: format checks and conversion-window checks
///
/// Google click identifiers are opaque tokens; the only contract we can hold
/// them to is shape (length, character class) and age (Google Ads rejects
/// conversions older than the attribution window). Malformed GCLIDs are the
/// expected case for data coming out of tracking templates, so every check
/// reports a `(valid, message)` pair instead of an error.

/// Maximum age of a conversion accepted by Google Ads, in days.
pub const MAX_CONVERSION_AGE_DAYS: i64 = 90;

const MIN_GCLID_LEN: usize = 20;
const MAX_GCLID_LEN: usize = 200;

/// Validation result for a single GCLID in a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct GclidValidation {
    pub gclid: String,
    pub valid: bool,
    pub message: String,
}

/// Check if a GCLID matches the expected format.
///
/// Valid GCLIDs contain only alphanumeric characters, hyphens, and
/// underscores, and are between 20 and 200 characters long.
///
/// Returns: (is_valid, message)
pub fn validate_format(gclid: &str) -> (bool, String) {
    if gclid.is_empty() {
        return (false, "GCLID is empty".to_string());
    }

    if gclid.len() < MIN_GCLID_LEN {
        return (
            false,
            format!(
                "GCLID too short ({} chars), expected {}+",
                gclid.len(),
                MIN_GCLID_LEN
            ),
        );
    }

    if gclid.len() > MAX_GCLID_LEN {
        return (
            false,
            format!(
                "GCLID too long ({} chars), expected <{}",
                gclid.len(),
                MAX_GCLID_LEN
            ),
        );
    }

    let pattern = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();
    if !pattern.is_match(gclid) {
        return (false, "GCLID contains invalid characters".to_string());
    }

    (true, "Valid GCLID format".to_string())
}

/// Check if a conversion timestamp is still inside the attribution window.
///
/// `now` is an explicit parameter so the check stays deterministic.
/// Timestamps in the future are treated as age 0 and accepted; the upstream
/// clock skew that produces them is not this module's problem to reject.
///
/// Returns: (is_valid, message)
pub fn validate_age(
    occurred_at: DateTime<Utc>,
    now: DateTime<Utc>,
    max_age_days: i64,
) -> (bool, String) {
    let age = now.signed_duration_since(occurred_at);
    let age_days = age.num_days().max(0);

    if age > Duration::days(max_age_days) {
        return (
            false,
            format!("GCLID is {} days old (max: {} days)", age_days, max_age_days),
        );
    }

    (
        true,
        format!("GCLID is {} days old (within window)", age_days),
    )
}

/// Validate a list of GCLIDs, preserving input order.
///
/// No deduplication or reordering: the caller correlates results back to its
/// records by position.
pub fn validate_batch<I, S>(gclids: I) -> Vec<GclidValidation>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    gclids
        .into_iter()
        .map(|gclid| {
            let gclid = gclid.as_ref();
            let (valid, message) = validate_format(gclid);
            GclidValidation {
                gclid: gclid.to_string(),
                valid,
                message,
            }
        })
        .collect()
}
