use logsmith::config::SinkKind;
use logsmith::utils::validation::Validate;
use logsmith::{FileLogger, LogError, Logger, LoggerConfig};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_file_sink_from_toml_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs").join("app.log");

    let mut config_file = NamedTempFile::new().unwrap();
    write!(
        config_file,
        r#"
transforms = ["upper"]

[sink]
kind = "file"
path = "{}"
"#,
        log_path.display()
    )
    .unwrap();

    let config = LoggerConfig::from_file(config_file.path()).unwrap();
    assert_eq!(config.sink.kind, SinkKind::File);

    let logger = config.build().unwrap();
    logger.log("first line");
    logger.log_with_prefix("warn", "second line");

    let content = std::fs::read_to_string(&log_path).unwrap();
    assert_eq!(content, "FIRST LINE\nWARN: SECOND LINE\n");
}

#[test]
fn test_file_logger_appends_across_instances() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("shared.log");

    FileLogger::new(&log_path).log("one");
    FileLogger::new(&log_path).log_in_reverse("owt");

    let content = std::fs::read_to_string(&log_path).unwrap();
    assert_eq!(content.lines().collect::<Vec<_>>(), vec!["one", "two"]);
}

#[test]
fn test_missing_config_file_is_an_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = LoggerConfig::from_file(temp_dir.path().join("missing.toml"));

    assert!(matches!(result, Err(LogError::IoError(_))));
}

#[test]
fn test_invalid_config_does_not_build() {
    let config = LoggerConfig::from_toml_str(
        r#"
[sink]
kind = "file"
path = ""
"#,
    )
    .unwrap();

    assert!(config.validate().is_err());
    assert!(matches!(
        config.build(),
        Err(LogError::InvalidConfigValueError { .. })
    ));
}

#[test]
fn test_environment_sink_builds() {
    let config = LoggerConfig::from_toml_str(
        r#"
environment = "production"

[sink]
kind = "environment"
"#,
    )
    .unwrap();

    let logger = config.build().unwrap();
    logger.log("environment sink smoke test");
}
