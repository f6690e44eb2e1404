use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub callrail_api_key: String,
    pub callrail_account_id: String,
    pub callrail_base_url: String,
    pub google_ads_customer_id: String,
    pub google_ads_base_url: String,
    pub conversion_action_id: String,
    pub state_file_path: String,
    pub default_lookback_minutes: i64,
    pub max_conversion_age_days: i64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            callrail_api_key: std::env::var("CALLRAIL_API_KEY")
                .map_err(|_| anyhow::anyhow!("CALLRAIL_API_KEY environment variable required"))
                .and_then(|key| {
                    if key.trim().is_empty() {
                        anyhow::bail!("CALLRAIL_API_KEY cannot be empty");
                    }
                    Ok(key)
                })?,
            callrail_account_id: std::env::var("CALLRAIL_ACCOUNT_ID")
                .map_err(|_| anyhow::anyhow!("CALLRAIL_ACCOUNT_ID environment variable required"))
                .and_then(|id| {
                    if id.trim().is_empty() {
                        anyhow::bail!("CALLRAIL_ACCOUNT_ID cannot be empty");
                    }
                    Ok(id)
                })?,
            callrail_base_url: std::env::var("CALLRAIL_BASE_URL")
                .or_else(|_| Ok::<_, anyhow::Error>("https://api.callrail.com/v3".to_string()))
                .and_then(|url| {
                    if !url.starts_with("http://") && !url.starts_with("https://") {
                        anyhow::bail!("CALLRAIL_BASE_URL must start with http:// or https://");
                    }
                    Ok(url)
                })?,
            google_ads_customer_id: std::env::var("GOOGLE_ADS_CUSTOMER_ID")
                .map_err(|_| {
                    anyhow::anyhow!("GOOGLE_ADS_CUSTOMER_ID environment variable required")
                })
                .and_then(|id| {
                    if id.trim().is_empty() {
                        anyhow::bail!("GOOGLE_ADS_CUSTOMER_ID cannot be empty");
                    }
                    // Google Ads wants the customer ID without hyphens
                    if !id.chars().all(|c| c.is_ascii_digit()) {
                        anyhow::bail!("GOOGLE_ADS_CUSTOMER_ID must be digits only (no hyphens)");
                    }
                    Ok(id)
                })?,
            google_ads_base_url: std::env::var("GOOGLE_ADS_BASE_URL")
                .or_else(|_| Ok::<_, anyhow::Error>("https://googleads.googleapis.com".to_string()))
                .and_then(|url| {
                    if !url.starts_with("http://") && !url.starts_with("https://") {
                        anyhow::bail!("GOOGLE_ADS_BASE_URL must start with http:// or https://");
                    }
                    Ok(url)
                })?,
            conversion_action_id: std::env::var("CONVERSION_ACTION_ID")
                .map_err(|_| anyhow::anyhow!("CONVERSION_ACTION_ID environment variable required"))
                .and_then(|id| {
                    if id.trim().is_empty() {
                        anyhow::bail!("CONVERSION_ACTION_ID cannot be empty");
                    }
                    Ok(id)
                })?,
            state_file_path: std::env::var("STATE_FILE_PATH")
                .unwrap_or_else(|_| ".last_sync".to_string()),
            default_lookback_minutes: std::env::var("DEFAULT_LOOKBACK_MINUTES")
                .unwrap_or_else(|_| "360".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("DEFAULT_LOOKBACK_MINUTES must be a whole number"))
                .and_then(|minutes: i64| {
                    if minutes <= 0 {
                        anyhow::bail!("DEFAULT_LOOKBACK_MINUTES must be positive");
                    }
                    Ok(minutes)
                })?,
            max_conversion_age_days: std::env::var("MAX_CONVERSION_AGE_DAYS")
                .unwrap_or_else(|_| "90".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("MAX_CONVERSION_AGE_DAYS must be a whole number"))
                .and_then(|days: i64| {
                    if days <= 0 {
                        anyhow::bail!("MAX_CONVERSION_AGE_DAYS must be positive");
                    }
                    Ok(days)
                })?,
        };

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("CallRail Base URL: {}", config.callrail_base_url);
        tracing::debug!("CallRail Account ID: {}", config.callrail_account_id);
        tracing::debug!("Google Ads Base URL: {}", config.google_ads_base_url);
        tracing::debug!("State file: {}", config.state_file_path);
        tracing::debug!(
            "Default lookback: {} minutes, max conversion age: {} days",
            config.default_lookback_minutes,
            config.max_conversion_age_days
        );

        Ok(config)
    }
}
