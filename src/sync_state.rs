use chrono::{DateTime, SecondsFormat, Utc};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::AppError;

/// Watermark of the last successful upload run.
///
/// A single RFC 3339 timestamp in a local file, overwritten in place after
/// each run that uploads at least one conversion. The next run uses it to
/// bound its fetch window so already-uploaded calls are not fetched again.
/// Exactly one sync process is assumed to own the file; there is no locking.
pub struct SyncStateTracker {
    path: PathBuf,
}

impl SyncStateTracker {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the stored watermark, or `None` if no prior run exists.
    ///
    /// An unreadable or corrupt state file degrades to `None` with a warning.
    /// A missing watermark only means a wider fetch window, so read failures
    /// are never fatal.
    pub fn last_sync_time(&self) -> Option<DateTime<Utc>> {
        if !self.path.exists() {
            return None;
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!(
                    "Could not read last sync time from {}: {}",
                    self.path.display(),
                    e
                );
                return None;
            }
        };

        match DateTime::parse_from_rfc3339(contents.trim()) {
            Ok(parsed) => Some(parsed.with_timezone(&Utc)),
            Err(e) => {
                tracing::warn!(
                    "Corrupt sync state in {} ({}), treating as never synced",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    /// Overwrites the watermark unconditionally.
    ///
    /// Stored at whole-second precision; sub-second precision is dropped.
    /// The contract does not enforce monotonic advancement, so a caller
    /// passing an earlier timestamp rewinds the watermark. Use
    /// [`save_last_sync_time_monotonic`](Self::save_last_sync_time_monotonic)
    /// to guard against that.
    pub fn save_last_sync_time(&self, at: DateTime<Utc>) -> Result<(), AppError> {
        fs::write(&self.path, at.to_rfc3339_opts(SecondsFormat::Secs, true))?;
        tracing::debug!("Saved last sync timestamp to {}", self.path.display());
        Ok(())
    }

    /// Like [`save_last_sync_time`](Self::save_last_sync_time), but refuses
    /// to move the watermark backward. Returns the timestamp actually stored.
    pub fn save_last_sync_time_monotonic(
        &self,
        at: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, AppError> {
        if let Some(existing) = self.last_sync_time() {
            if at < existing {
                tracing::warn!(
                    "Refusing to rewind watermark from {} to {}",
                    existing,
                    at
                );
                return Ok(existing);
            }
        }
        self.save_last_sync_time(at)?;
        Ok(at)
    }

    /// Minutes elapsed since the watermark, clamped to non-negative.
    ///
    /// Returns `default_minutes` unchanged when no watermark exists. The
    /// result becomes the lower bound of the next fetch window.
    pub fn minutes_since_last_sync(&self, now: DateTime<Utc>, default_minutes: i64) -> i64 {
        match self.last_sync_time() {
            Some(last_sync) => {
                let minutes = now.signed_duration_since(last_sync).num_minutes().max(0);
                tracing::info!("Last sync was {} minutes ago", minutes);
                minutes
            }
            None => {
                tracing::info!(
                    "No previous sync found, using default: {} minutes",
                    default_minutes
                );
                default_minutes
            }
        }
    }
}
