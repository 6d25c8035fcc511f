//! Integration test for chart options parsing

use version_trends::chart::ChartOptions;
use version_trends::model::{Granularity, Measure};

#[test]
fn test_load_full_options() {
    let toml = r#"
granularity = "patch"
max_versions_shown = 5
window_days = 90
measure = "percentage"
"#;

    let options: ChartOptions = toml::from_str(toml).expect("Could not parse options");

    assert_eq!(options.granularity, Granularity::Patch);
    assert_eq!(options.max_versions_shown, Some(5));
    assert_eq!(options.window_days, 90);
    assert_eq!(options.measure, Measure::Percentage);
}

#[test]
fn test_absent_fields_take_defaults() {
    let toml = r#"
max_versions_shown = 12
"#;

    let options: ChartOptions = toml::from_str(toml).expect("Could not parse options");

    assert_eq!(options.granularity, Granularity::Major);
    assert_eq!(options.max_versions_shown, Some(12));
    assert_eq!(options.window_days, 30);
    assert_eq!(options.measure, Measure::TotalDownloads);
}

#[test]
fn test_empty_options() {
    let options: ChartOptions = toml::from_str("").expect("Could not parse options");
    assert_eq!(options, ChartOptions::default());
}

#[test]
fn test_unknown_field_is_rejected() {
    let toml = r#"
max_series = 4
"#;

    let result: Result<ChartOptions, _> = toml::from_str(toml);
    assert!(result.is_err(), "Should fail to parse options with unknown fields");
}

#[test]
fn test_invalid_granularity_is_rejected() {
    let toml = r#"
granularity = "minor"
"#;

    let result: Result<ChartOptions, _> = toml::from_str(toml);
    assert!(result.is_err(), "Should fail to parse an unknown granularity");
}
