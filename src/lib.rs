//! CallRail → Google Ads Conversion Sync Library
//!
//! This library moves qualified call conversions from CallRail into Google
//! Ads' offline click-conversion upload API, with CSV as an intermediate and
//! test format.
//!
//! # Modules
//!
//! - `callrail`: CallRail API client (fetch qualified calls with GCLIDs).
//! - `callrail_models`: CallRail response payload models.
//! - `config`: Configuration management.
//! - `csv_io`: Conversion-upload CSV reading, writing, and normalization.
//! - `errors`: Error handling types.
//! - `google_ads`: Google Ads click-conversion upload client.
//! - `google_ads_models`: Google Ads upload request/response models.
//! - `models`: Core data models.
//! - `reporting`: ROAS and cost-per-lead arithmetic.
//! - `sync`: Fetch → validate → upload pipeline.
//! - `sync_state`: Last-sync watermark persistence.
//! - `validator`: GCLID format and conversion-window validation.

pub mod callrail;
pub mod callrail_models;
pub mod config;
pub mod csv_io;
pub mod errors;
pub mod google_ads;
pub mod google_ads_models;
pub mod models;
pub mod reporting;
pub mod sync;
pub mod sync_state;
pub mod validator;
