/// Tests for conversion-upload CSV reading, writing, and normalization
use conversion_sync::csv_io::{
    format_upload_csv, read_conversion_rows, records_to_rows, write_conversion_rows,
};
use conversion_sync::models::{ConversionRecord, ConversionRow};

use chrono::{TimeZone, Utc};
use std::fs;
use std::path::PathBuf;

fn temp_csv_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "conversion_sync_csv_{}_{}.csv",
        tag,
        std::process::id()
    ))
}

#[test]
fn test_write_then_read_round_trip() {
    let path = temp_csv_path("round_trip");

    let rows = vec![
        ConversionRow {
            gclid: "CjwKCAiA1KL3BRA8EiwAzCfbQxyz123abc".to_string(),
            conversion_action_id: "987654321".to_string(),
            conversion_date_time: "2025-06-01 10:30:00+00:00".to_string(),
            conversion_value: "4500".to_string(),
        },
        ConversionRow {
            gclid: "EAIaIQobChMI_another_click_123456".to_string(),
            conversion_action_id: "987654322".to_string(),
            conversion_date_time: "2025-06-01 14:00:00+00:00".to_string(),
            conversion_value: String::new(),
        },
    ];

    write_conversion_rows(&path, &rows).unwrap();
    let read_back = read_conversion_rows(&path).unwrap();

    assert_eq!(read_back, rows);
    let _ = fs::remove_file(path);
}

#[test]
fn test_format_upload_csv_keeps_only_upload_columns() {
    let input = temp_csv_path("format_in");
    let output = temp_csv_path("format_out");

    // CRM export with extra columns and shuffled order
    fs::write(
        &input,
        "customer,conversion_date_time,gclid,notes\n\
         Acme,2025-06-01 10:30:00+00:00,CjwKCAiA1KL3BRA8EiwAzCfbQxyz123abc,called twice\n",
    )
    .unwrap();

    let written = format_upload_csv(&input, &output, "987654321").unwrap();
    assert_eq!(written, 1);

    let rows = read_conversion_rows(&output).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].gclid, "CjwKCAiA1KL3BRA8EiwAzCfbQxyz123abc");
    // Missing action column falls back to the default
    assert_eq!(rows[0].conversion_action_id, "987654321");
    assert_eq!(rows[0].conversion_date_time, "2025-06-01 10:30:00+00:00");
    assert_eq!(rows[0].conversion_value, "");

    let _ = fs::remove_file(input);
    let _ = fs::remove_file(output);
}

#[test]
fn test_records_to_rows_formats_google_ads_timestamps() {
    let records = vec![ConversionRecord {
        gclid: "CjwKCAiA1KL3BRA8EiwAzCfbQxyz123abc".to_string(),
        conversion_date_time: Utc.with_ymd_and_hms(2025, 6, 1, 10, 30, 0).unwrap(),
        conversion_value: Some(4500.0),
        call_id: "CAL1".to_string(),
    }];

    let rows = records_to_rows(&records, "987654321");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].conversion_date_time, "2025-06-01 10:30:00+00:00");
    assert_eq!(rows[0].conversion_value, "4500");
}
