//! Normalize a CRM export CSV into Google Ads upload format.
//!
//! Usage:
//!   format_conversions_csv <input.csv> <output.csv> [default_action_id]

use conversion_sync::csv_io;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        anyhow::bail!(
            "Usage: format_conversions_csv <input.csv> <output.csv> [default_action_id]"
        );
    }

    let default_action_id = args.get(2).map(String::as_str).unwrap_or("");
    let written = csv_io::format_upload_csv(&args[0], &args[1], default_action_id)?;

    println!("Formatted {} rows into {}", written, args[1]);
    Ok(())
}
