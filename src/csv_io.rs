use std::path::Path;

use crate::errors::AppError;
use crate::models::{ConversionRecord, ConversionRow};

/// Column order of the Google Ads conversion-upload CSV.
const UPLOAD_COLUMNS: [&str; 4] = [
    "gclid",
    "conversion_action_id",
    "conversion_date_time",
    "conversion_value",
];

/// Read conversion rows from an upload-format CSV.
pub fn read_conversion_rows(path: impl AsRef<Path>) -> Result<Vec<ConversionRow>, AppError> {
    let mut reader = csv::Reader::from_path(path.as_ref())
        .map_err(|e| AppError::CsvError(format!("Failed to open {:?}: {}", path.as_ref(), e)))?;

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: ConversionRow = result?;
        rows.push(row);
    }

    tracing::debug!("Read {} conversion rows from CSV", rows.len());
    Ok(rows)
}

/// Write conversion rows to an upload-format CSV, header included.
pub fn write_conversion_rows(
    path: impl AsRef<Path>,
    rows: &[ConversionRow],
) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path.as_ref())
        .map_err(|e| AppError::CsvError(format!("Failed to create {:?}: {}", path.as_ref(), e)))?;

    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .flush()
        .map_err(|e| AppError::CsvError(format!("Failed to flush CSV: {}", e)))?;

    tracing::info!("Wrote {} conversion rows to {:?}", rows.len(), path.as_ref());
    Ok(())
}

/// Normalize an arbitrary CRM export into upload format.
///
/// Keeps only the four upload columns, in canonical order. Columns missing
/// from the input come out empty, except `conversion_action_id` which falls
/// back to `default_action_id`.
pub fn format_upload_csv(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    default_action_id: &str,
) -> Result<usize, AppError> {
    let mut reader = csv::Reader::from_path(input.as_ref())
        .map_err(|e| AppError::CsvError(format!("Failed to open {:?}: {}", input.as_ref(), e)))?;

    let headers = reader.headers()?.clone();
    let column_index = |name: &str| headers.iter().position(|h| h == name);
    let indices: Vec<Option<usize>> = UPLOAD_COLUMNS.iter().map(|c| column_index(c)).collect();

    let mut writer = csv::Writer::from_path(output.as_ref())
        .map_err(|e| AppError::CsvError(format!("Failed to create {:?}: {}", output.as_ref(), e)))?;
    writer.write_record(UPLOAD_COLUMNS)?;

    let mut written = 0;
    for result in reader.records() {
        let record = result?;
        let field = |idx: &Option<usize>| {
            idx.and_then(|i| record.get(i)).unwrap_or("").to_string()
        };

        let mut action_id = field(&indices[1]);
        if action_id.is_empty() {
            action_id = default_action_id.to_string();
        }

        writer.write_record(&[
            field(&indices[0]),
            action_id,
            field(&indices[2]),
            field(&indices[3]),
        ])?;
        written += 1;
    }
    writer
        .flush()
        .map_err(|e| AppError::CsvError(format!("Failed to flush CSV: {}", e)))?;

    tracing::info!(
        "Formatted {} rows from {:?} into {:?}",
        written,
        input.as_ref(),
        output.as_ref()
    );
    Ok(written)
}

/// Convert fetched conversion records into CSV rows for a given action.
pub fn records_to_rows(records: &[ConversionRecord], action_id: &str) -> Vec<ConversionRow> {
    records
        .iter()
        .map(|record| ConversionRow {
            gclid: record.gclid.clone(),
            conversion_action_id: action_id.to_string(),
            conversion_date_time: record.google_ads_date_time(),
            conversion_value: record
                .conversion_value
                .map(|v| v.to_string())
                .unwrap_or_default(),
        })
        .collect()
}
