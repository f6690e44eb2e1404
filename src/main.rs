use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use conversion_sync::callrail::CallRailService;
use conversion_sync::config::Config;
use conversion_sync::google_ads::GoogleAdsService;
use conversion_sync::sync::run_sync;
use conversion_sync::sync_state::SyncStateTracker;

/// Main entry point for the sync job.
///
/// Initializes tracing, loads configuration, builds the API clients and the
/// sync-state tracker, then performs one fetch → validate → upload cycle.
/// Intended to run from cron or a similar scheduler; one process at a time.
///
/// # Returns
///
/// * `anyhow::Result<()>` - Ok if the run completes, or an error if
///   configuration or either API call fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "conversion_sync=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    let callrail = CallRailService::new(&config);
    let google_ads = GoogleAdsService::new(&config);
    let tracker = SyncStateTracker::new(&config.state_file_path);

    let report = run_sync(&config, &callrail, &google_ads, &tracker, Utc::now()).await?;

    println!("=== Sync Summary ===");
    println!("Fetched:          {}", report.fetched);
    println!("Rejected (format): {}", report.rejected_format);
    println!("Rejected (age):    {}", report.rejected_age);
    println!("Uploaded:          {}", report.upload.successful);
    println!("Upload failures:   {}", report.upload.failed);

    Ok(())
}
