use super::*;

#[test]
fn service_config_defaults() {
    let config: AlertServiceConfig = toml::from_str("").unwrap();
    assert!(config.rules.directory.is_none());
    assert!(config.rules.validate_on_load);
    assert_eq!(config.output.format, OutputFormat::Text);
}

#[test]
fn rules_custom_config() {
    let toml = r#"
        directory = "/etc/crivet/rules"
        validate_on_load = false
    "#;

    let config: RulesConfig = toml::from_str(toml).unwrap();
    assert_eq!(
        config.directory.as_deref(),
        Some(Path::new("/etc/crivet/rules"))
    );
    assert!(!config.validate_on_load);
}

#[test]
fn partial_rules_section_keeps_validation() {
    let toml = r#"
        [rules]
        directory = "rules"
    "#;

    let config: AlertServiceConfig = toml::from_str(toml).unwrap();
    assert!(config.rules.validate_on_load);
    assert_eq!(config.rules.directory, Some(PathBuf::from("rules")));
}

#[test]
fn output_format_json() {
    let config: AlertServiceConfig = toml::from_str("[output]\nformat = \"json\"\n").unwrap();
    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.output.format.to_string(), "json");
}

#[test]
fn output_format_unknown_rejected() {
    let result: Result<AlertServiceConfig, _> = toml::from_str("[output]\nformat = \"xml\"\n");
    assert!(result.is_err());
}

#[test]
fn load_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AlertServiceConfig::load(&dir.path().join("crivet.toml")).unwrap();
    assert!(config.rules.directory.is_none());
}

#[test]
fn load_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crivet.toml");
    std::fs::write(&path, "[rules]\nvalidate_on_load = false\n").unwrap();

    let config = AlertServiceConfig::load(&path).unwrap();
    assert!(!config.rules.validate_on_load);
}

#[test]
fn load_reports_syntax_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crivet.toml");
    std::fs::write(&path, "[rules\n").unwrap();

    let err = AlertServiceConfig::load(&path).unwrap_err();
    assert!(matches!(err, AlertsError::Config(_)), "{err}");
}
