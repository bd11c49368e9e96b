// tests/config_loading.rs

use std::io::Write;

use tempfile::NamedTempFile;

use onsave::config::{load_and_validate, load_from_path, load_if_present, resolve_config_path};
use onsave::errors::OnSaveError;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn parses_commands_table_in_document_order() {
    let file = config_file(
        r#"
[commands]
"/home/user/zeta" = ["z _file_"]
"/home/alpha" = ["a1 _file_", "a2 _file_"]
"/beta" = ["b _file_"]
"#,
    );

    let raw = load_from_path(file.path()).unwrap();
    let rules = raw.commands.expect("commands table present");

    let prefixes: Vec<_> = rules.iter().map(|(prefix, _)| prefix).collect();
    assert_eq!(prefixes, vec!["/home/user/zeta", "/home/alpha", "/beta"]);

    let (_, alpha_commands) = rules.iter().nth(1).unwrap();
    assert_eq!(
        alpha_commands,
        &["a1 _file_".to_string(), "a2 _file_".to_string()]
    );
}

#[test]
fn absent_commands_key_is_the_disabled_state() {
    let file = config_file("# no commands configured\n");

    let config = load_and_validate(file.path()).unwrap();
    assert!(config.rules().is_none());
}

#[test]
fn empty_commands_table_is_enabled_but_matches_nothing() {
    let file = config_file("[commands]\n");

    let config = load_and_validate(file.path()).unwrap();
    let rules = config.rules().expect("commands table present");
    assert!(rules.is_empty());
}

#[test]
fn missing_file_is_the_disabled_state() {
    let loaded = load_if_present("/nonexistent/OnSave.toml").unwrap();
    assert!(loaded.is_none());
}

#[test]
fn blank_command_template_is_rejected() {
    let file = config_file(
        r#"
[commands]
"/p" = ["fmt _file_", "   "]
"#,
    );

    let err = load_and_validate(file.path()).unwrap_err();
    match err {
        OnSaveError::ConfigError(msg) => assert!(msg.contains("/p"), "message was: {msg}"),
        other => panic!("expected ConfigError, got: {other:?}"),
    }
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let file = config_file("[commands\n");

    let err = load_and_validate(file.path()).unwrap_err();
    assert!(matches!(err, OnSaveError::TomlError(_)));
}

#[test]
fn cli_value_wins_when_resolving_the_config_path() {
    let resolved = resolve_config_path(Some("custom/Rules.toml"));
    assert_eq!(resolved, std::path::PathBuf::from("custom/Rules.toml"));
}
