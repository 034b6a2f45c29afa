//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of locating, parsing and validating
//! configuration files.

use std::sync::Mutex;

use chrono::NaiveDate;
use drako_common::error::{ErrorClassification, ErrorSeverity};
use drako_common::time::range;
use drako_domain::DrakoError;
use drako_infra::config::{self, CONFIG_PATH_ENV};
use once_cell::sync::Lazy;
use tempfile::TempDir;

static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

const FIRM_TOML: &str = r#"
[[taxes]]
name = "VAT"
base_points = 2000

[[items]]
reference = "hosting"
label = "Hosting"
taxes = ["VAT"]
unit_price = [1, 1, 1500]
recurring = "1 M"

[[items]]
reference = "support"
label = "Support plan"
taxes = ["VAT"]
recurring = "1 Y"

[accounting]
loss_cutoff = "6 M"
"#;

#[test]
fn test_load_uses_env_path() -> anyhow::Result<()> {
    let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
    let dir = TempDir::new()?;
    let path = dir.path().join("firm.toml");
    std::fs::write(&path, FIRM_TOML)?;

    std::env::set_var(CONFIG_PATH_ENV, &path);
    let result = config::load();
    std::env::remove_var(CONFIG_PATH_ENV);

    let config = result?;
    assert_eq!(config.items.len(), 2);
    assert_eq!(config.recurring_items().count(), 2);
    assert_eq!(config.accounting.loss_cutoff.months(), 6);
    Ok(())
}

#[test]
fn test_load_reports_missing_env_path() {
    let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

    std::env::set_var(CONFIG_PATH_ENV, "/nonexistent/drako/firm.toml");
    let result = config::load();
    std::env::remove_var(CONFIG_PATH_ENV);

    let err = result.unwrap_err();
    assert_eq!(
        err,
        DrakoError::NotFound("Config file '/nonexistent/drako/firm.toml' does not exist".to_string())
    );
    assert_eq!(err.severity(), ErrorSeverity::Info);
}

#[test]
fn test_loaded_items_schedule_billing_dates() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("firm.json");
    let as_json = serde_json::to_string(&toml::from_str::<drako_domain::Config>(FIRM_TOML)?)?;
    std::fs::write(&path, as_json)?;

    let anchor = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid anchor");
    let config = config::load_from_file_at(Some(path), anchor)?;
    let support = config.require_item("support")?;

    let signup = NaiveDate::from_ymd_opt(2020, 2, 29).expect("valid signup");
    let end = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid end");
    let renewals: Vec<_> = range(signup, support.recurring, signup, end).collect();
    assert_eq!(renewals.len(), 5);
    assert_eq!(renewals[1], NaiveDate::from_ymd_opt(2021, 2, 28).expect("valid date"));
    assert_eq!(renewals[4], NaiveDate::from_ymd_opt(2024, 2, 29).expect("valid date"));
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("firm.toml");
    std::fs::write(&path, FIRM_TOML.replace("loss_cutoff = \"6 M\"", "loss_cutoff = \"2 Y\""))?;

    let anchor = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid anchor");
    let err = config::load_from_file_at(Some(path), anchor).unwrap_err();
    assert!(matches!(err, DrakoError::Validation(ref m) if m.contains("accounting.loss_cutoff")));
    Ok(())
}
