//! Tests for planner configuration loading

use std::io::Write;
use tabula_planner::{ConfigError, PlannerConfig};
use tempfile::NamedTempFile;

#[test]
fn test_defaults() {
    let config = PlannerConfig::default();
    assert_eq!(config.max_expression_depth, 128);
    assert_eq!(PlannerConfig::from_toml_str("").unwrap(), config);
}

#[test]
fn test_parse_depth() {
    let config = PlannerConfig::from_toml_str("max_expression_depth = 16").unwrap();
    assert_eq!(config.max_expression_depth, 16);
}

#[test]
fn test_zero_depth_is_invalid() {
    let err = PlannerConfig::from_toml_str("max_expression_depth = 0").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
}

#[test]
fn test_parse_error() {
    let err = PlannerConfig::from_toml_str("max_expression_depth = \"deep\"").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "max_expression_depth = 32").unwrap();

    let config = PlannerConfig::from_file(file.path()).unwrap();
    assert_eq!(config.max_expression_depth, 32);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = PlannerConfig::from_file(dir.path().join("tabula.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::IoError(_)));
}
