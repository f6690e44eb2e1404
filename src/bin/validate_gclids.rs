//! Batch-validate GCLIDs and print a report.
//!
//! Usage:
//!   validate_gclids GCLID [GCLID ...]
//!   validate_gclids conversions.csv   (reads the gclid column)

use conversion_sync::csv_io;
use conversion_sync::validator;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        anyhow::bail!("Usage: validate_gclids <GCLID ...> or validate_gclids <file.csv>");
    }

    let gclids: Vec<String> = if args.len() == 1 && args[0].ends_with(".csv") {
        csv_io::read_conversion_rows(&args[0])?
            .into_iter()
            .map(|row| row.gclid)
            .collect()
    } else {
        args
    };

    let results = validator::validate_batch(&gclids);

    let mut valid_count = 0;
    for result in &results {
        let status = if result.valid {
            valid_count += 1;
            "VALID"
        } else {
            "INVALID"
        };
        let preview: String = result.gclid.chars().take(30).collect();
        println!("GCLID: {}...", preview);
        println!("  Status: {}", status);
        println!("  Message: {}\n", result.message);
    }

    println!("=== Validation Summary ===");
    println!("Total:   {}", results.len());
    println!("Valid:   {}", valid_count);
    println!("Invalid: {}", results.len() - valid_count);

    Ok(())
}
