use rpawogen::configtool::*;
use rpawogen::output::save_passwords;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_missing_config_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp directory");
    let config = ConfigFile::load_from(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
    assert_eq!(config, ConfigFile::default());
    assert_eq!(config.length, 12);
    assert_eq!(config.separator, "-");
    assert!(config.dictionary.is_none());
}

#[test]
fn test_save_and_load_config() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
    let config = ConfigFile {
        length: 24,
        exclude_ambiguous: true,
        separator: ".".to_string(),
        complexity: 8,
        dictionary: Some(PathBuf::from("/usr/share/dict/words")),
        ..Default::default()
    };
    config.save_to(&path).unwrap();
    assert_eq!(ConfigFile::load_from(&path).unwrap(), config);
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, r#"{"length": 20, "word_count": 6}"#).unwrap();
    let config = ConfigFile::load_from(&path).unwrap();
    assert_eq!(config.length, 20);
    assert_eq!(config.word_count, 6);
    assert_eq!(config.complex_min_length, 16);
    assert_eq!(config.output_file, PathBuf::from("passwords.txt"));
}

#[test]
fn test_corrupt_config_is_an_error() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "{ length: ").unwrap();
    assert!(matches!(ConfigFile::load_from(&path), Err(ConfigError::JsonError(_))));
}

#[test]
fn test_save_single_password() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("password.txt");
    save_passwords(&path, &["Secret-Pass-42".to_string()]).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Generated password ("));
    assert_eq!(lines[1], "Secret-Pass-42");
}

#[test]
fn test_save_multiple_passwords() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("passwords.txt");
    let passwords = vec!["first".to_string(), "second".to_string()];
    save_passwords(&path, &passwords).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert!(lines[0].starts_with("Generated passwords ("));
    assert_eq!(lines[1], "=".repeat(40));
    assert_eq!(&lines[2..], ["1. first", "2. second"]);
}
