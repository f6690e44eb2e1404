/// Property-based tests using proptest
/// Tests invariants and properties that should hold for all inputs
use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use conversion_sync::reporting::{cost_per_lead, roas};
use conversion_sync::validator::{validate_age, validate_batch, validate_format};

// Property: GCLID format validation should never panic
proptest! {
    #[test]
    fn format_validation_never_panics(gclid in "\\PC*") {
        let _ = validate_format(&gclid);
    }

    #[test]
    fn well_formed_gclids_always_accepted(gclid in "[A-Za-z0-9_-]{20,200}") {
        let (valid, message) = validate_format(&gclid);
        prop_assert!(valid, "Should accept well-formed GCLID: {}", gclid);
        prop_assert_eq!(message, "Valid GCLID format");
    }

    #[test]
    fn short_gclids_always_rejected(gclid in "[A-Za-z0-9_-]{1,19}") {
        let (valid, message) = validate_format(&gclid);
        prop_assert!(!valid);
        prop_assert!(message.contains("too short"));
        let expected = format!("{} chars", gclid.len());
        prop_assert!(message.contains(&expected));
    }

    #[test]
    fn overlong_gclids_always_rejected(gclid in "[A-Za-z0-9_-]{201,300}") {
        let (valid, message) = validate_format(&gclid);
        prop_assert!(!valid);
        prop_assert!(message.contains("too long"));
    }

    #[test]
    fn gclids_with_invalid_characters_rejected(
        prefix in "[A-Za-z0-9_-]{10,20}",
        bad_char in prop::sample::select(vec!['@', '#', '$', '%', ' ', '.', '+', '/', '=']),
        suffix in "[A-Za-z0-9_-]{10,20}"
    ) {
        let gclid = format!("{}{}{}", prefix, bad_char, suffix);
        let (valid, message) = validate_format(&gclid);
        prop_assert!(!valid);
        prop_assert_eq!(message, "GCLID contains invalid characters");
    }
}

// Property: batch validation preserves order and cardinality
proptest! {
    #[test]
    fn batch_output_matches_input_order(gclids in prop::collection::vec("[A-Za-z0-9_@-]{1,40}", 0..20)) {
        let results = validate_batch(&gclids);
        prop_assert_eq!(results.len(), gclids.len());
        for (result, gclid) in results.iter().zip(&gclids) {
            prop_assert_eq!(&result.gclid, gclid);
        }
    }

    #[test]
    fn batch_entries_agree_with_single_validation(gclids in prop::collection::vec("\\PC{0,50}", 0..10)) {
        let results = validate_batch(&gclids);
        for (result, gclid) in results.iter().zip(&gclids) {
            let (valid, message) = validate_format(gclid);
            prop_assert_eq!(result.valid, valid);
            prop_assert_eq!(&result.message, &message);
        }
    }
}

// Property: age validation is determined by the window boundary
proptest! {
    #[test]
    fn age_validation_matches_window(age_days in -10i64..200i64, max_age_days in 1i64..120i64) {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let occurred_at = now - Duration::days(age_days);

        let (valid, _) = validate_age(occurred_at, now, max_age_days);
        // Future timestamps (negative age) are accepted as age 0
        prop_assert_eq!(valid, age_days <= max_age_days);
    }

    #[test]
    fn age_message_reports_whole_days(age_days in 0i64..100i64) {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let occurred_at = now - Duration::days(age_days) - Duration::hours(3);

        let (_, message) = validate_age(occurred_at, now, 90);
        let expected = format!("{} days old", age_days);
        prop_assert!(message.contains(&expected));
    }
}

// Property: reporting arithmetic never divides by zero
proptest! {
    #[test]
    fn roas_never_panics(spend in 0.01f64..1e9, revenue in 0.0f64..1e9) {
        let result = roas(spend, revenue);
        prop_assert!(result.is_finite());
        prop_assert!(result >= 0.0);
    }

    #[test]
    fn cost_per_lead_never_panics(cost in 0.0f64..1e9, leads in 0u64..1_000_000) {
        let result = cost_per_lead(cost, leads);
        prop_assert!(result.is_finite());
        prop_assert!(result >= 0.0);
    }
}
