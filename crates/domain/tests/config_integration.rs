//! Integration tests for the billing configuration model
//!
//! Loads realistic TOML and JSON documents, validates them and checks that
//! recurring items schedule correctly with the calendar range generator.

use chrono::NaiveDate;
use drako_common::time::range;
use drako_domain::{Config, DrakoError};

const FIRM_TOML: &str = r#"
[[taxes]]
name = "VAT"
base_points = 2000

[[taxes]]
name = "VAT-reduced"
base_points = 550

[[items]]
reference = "hosting"
label = "Hosting"
unit = "month"
taxes = ["VAT"]
unit_price = [1, 1, 1500]
recurring = "1 M"
grouped_line = "{count} {unit}s of {label}"

[[items]]
reference = "sms"
label = "Text messages"
taxes = ["VAT-reduced"]
unit_price = [100, 100, 700]
aggregate = "1 month"
slide = "1 W"
taxes_included = false

[accounting]
freeze_interval = "1 M"
loss_cutoff = "6 M"
anonymization_cutoff = "1 Y"
purge_cutoff = "10 Y"
"#;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Test a complete TOML document loads and validates
///
/// Scenario: a firm sells monthly hosting and aggregated text messages
#[test]
fn test_full_toml_document() -> anyhow::Result<()> {
    let config: Config = toml::from_str(FIRM_TOML)?;
    config.validate(date(2024, 6, 1))?;

    let hosting = config.require_item("hosting")?;
    assert!(hosting.is_recurring());
    assert_eq!(hosting.render_grouped_line(3), "3 months of Hosting");

    let sms = config.require_item("sms")?;
    assert!(!sms.taxes_included);
    assert!(sms.has_sliding_aggregate());
    assert_eq!(sms.unit_price.base_quantity, 100);

    assert_eq!(config.accounting.loss_cutoff.months(), 6);
    assert_eq!(config.accounting.rollover, drako_domain::constants::DEFAULT_ROLLOVER);
    Ok(())
}

/// Test that recurring items drive calendar-aware billing dates
#[test]
fn test_recurring_item_billing_dates() -> anyhow::Result<()> {
    let config: Config = toml::from_str(FIRM_TOML)?;
    let hosting = config.require_item("hosting")?;

    let signup = date(2024, 1, 31);
    let dates: Vec<_> = range(signup, hosting.recurring, date(2024, 3, 1), date(2024, 7, 1)).collect();
    assert_eq!(dates, vec![date(2024, 3, 31), date(2024, 4, 30), date(2024, 5, 31), date(2024, 6, 30)]);
    Ok(())
}

/// Test that the same document round-trips through JSON
#[test]
fn test_toml_to_json_round_trip() -> anyhow::Result<()> {
    let config: Config = toml::from_str(FIRM_TOML)?;
    let json = serde_json::to_string(&config)?;
    let back: Config = serde_json::from_str(&json)?;
    assert_eq!(back, config);
    Ok(())
}

/// Test that validation failures convert into the domain error
#[test]
fn test_invalid_document_reports_every_problem() -> anyhow::Result<()> {
    let broken = FIRM_TOML.replace("taxes = [\"VAT\"]", "taxes = [\"VAT\", \"GST\"]").replace(
        "aggregate = \"1 month\"\n",
        "",
    );
    let config: Config = toml::from_str(&broken)?;

    let err = config.validate(date(2024, 6, 1)).unwrap_err();
    assert_eq!(err.error_count(), 2);
    assert!(err.field_errors("items.hosting.taxes").len() == 1);
    assert!(err.has_code("missing_aggregate"));

    let domain: DrakoError = err.into();
    assert!(matches!(domain, DrakoError::Validation(_)));
    Ok(())
}

/// Test that an unknown unit in a delta field fails to deserialize
#[test]
fn test_bad_delta_is_a_parse_error() {
    let broken = FIRM_TOML.replace("recurring = \"1 M\"", "recurring = \"99999999999999999999 M\"");
    let err = toml::from_str::<Config>(&broken).unwrap_err();
    assert!(err.to_string().contains("Invalid number"));
}
