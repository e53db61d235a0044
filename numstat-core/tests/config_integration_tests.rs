// numstat-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

use numstat_core::config::{merge_config, StatsConfig};
use numstat_core::{ParseMode, StatsError};

fn write_temp(yaml: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml.as_bytes())?;
    Ok(file)
}

#[test]
fn test_load_default_settings() {
    let config = StatsConfig::load_default().unwrap();
    assert_eq!(config.parser.mode, Some(ParseMode::Prefix));
    assert_eq!(config.output.decimals, Some(6));
    assert_eq!(config.interactive.delay_ms, Some(500));
    assert_eq!(config.interactive.alert_timeout_ms, Some(5000));
}

#[test]
fn test_load_from_file() -> Result<()> {
    let file = write_temp(
        r#"
parser:
  mode: strict
output:
  decimals: 3
interactive:
  delay_ms: 0
  alert_timeout_ms: 1500
"#,
    )?;
    let config = StatsConfig::load_from_file(file.path())?;
    assert_eq!(config.parse_mode(), ParseMode::Strict);
    assert_eq!(config.decimals(), 3);
    assert_eq!(config.delay(), Duration::ZERO);
    assert_eq!(config.alert_timeout(), Duration::from_millis(1500));
    Ok(())
}

#[test]
fn test_partial_file_leaves_other_keys_unset() -> Result<()> {
    let file = write_temp("output:\n  decimals: 2\n")?;
    let config = StatsConfig::load_from_file(file.path())?;
    assert_eq!(config.output.decimals, Some(2));
    assert_eq!(config.parser.mode, None);
    assert_eq!(config.interactive.delay_ms, None);
    Ok(())
}

#[test]
fn test_empty_file_is_default() -> Result<()> {
    let file = write_temp("")?;
    let config = StatsConfig::load_from_file(file.path())?;
    assert_eq!(config, StatsConfig::default());
    Ok(())
}

#[test]
fn test_merge_user_keys_win() -> Result<()> {
    let defaults = StatsConfig::load_default()?;
    let file = write_temp("parser:\n  mode: strict\n")?;
    let user = StatsConfig::load_from_file(file.path())?;

    let merged = merge_config(defaults, Some(user));
    assert_eq!(merged.parse_mode(), ParseMode::Strict);
    assert_eq!(merged.output.decimals, Some(6));
    assert_eq!(merged.interactive.delay_ms, Some(500));
    Ok(())
}

#[test]
fn test_merge_without_user_config() -> Result<()> {
    let defaults = StatsConfig::load_default()?;
    assert_eq!(merge_config(defaults, None), defaults);
    Ok(())
}

#[test]
fn test_invalid_values_are_rejected() -> Result<()> {
    let file = write_temp("output:\n  decimals: 99\n")?;
    let err = StatsConfig::load_from_file(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("output.decimals"));
    assert!(matches!(
        err.downcast_ref::<StatsError>(),
        Some(StatsError::Config(_))
    ));
    Ok(())
}

#[test]
fn test_unknown_mode_fails_to_parse() -> Result<()> {
    let file = write_temp("parser:\n  mode: fuzzy\n")?;
    assert!(StatsConfig::load_from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn test_missing_file_is_an_error() {
    let err = StatsConfig::load_from_file("/definitely/not/here/numstat.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
    assert!(err
        .chain()
        .any(|cause| matches!(cause.downcast_ref::<StatsError>(), Some(StatsError::IoError(_)))));
}
