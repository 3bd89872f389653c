//! Configuration parsing and defaults.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use xprobe_core::config::{Config, ConfigError};
use xprobe_core::probe::SuiteSelector;

#[test]
fn empty_object_is_the_default() {
    let config = Config::from_json("{}").unwrap();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.harness.suites, [SuiteSelector::All]);
    assert!(config.harness.print_cases);
    assert_eq!(config.harness.vectors, None);

    let default = Config::default();
    assert_eq!(default.harness.suites, config.harness.suites);
    assert_eq!(default.harness.print_cases, config.harness.print_cases);
}

#[test]
fn every_field_parses() {
    let config = Config::from_json(
        r#"{
            "general": { "trace_instructions": true },
            "harness": {
                "suites": ["fdist", "ninst-single"],
                "print_cases": false,
                "vectors": "edge.json"
            }
        }"#,
    )
    .unwrap();
    assert!(config.general.trace_instructions);
    assert_eq!(
        config.harness.suites,
        [SuiteSelector::Fdist, SuiteSelector::NinstSingle]
    );
    assert!(!config.harness.print_cases);
    assert_eq!(config.harness.vectors.as_deref(), Some(Path::new("edge.json")));
}

#[test]
fn unknown_fields_and_suites_are_rejected() {
    for text in [
        r#"{ "harnes": {} }"#,
        r#"{ "harness": { "suite": ["mod"] } }"#,
        r#"{ "harness": { "suites": ["rem"] } }"#,
        r#"{ "general": { "trace": true } }"#,
    ] {
        assert!(
            matches!(Config::from_json(text), Err(ConfigError::Parse(_))),
            "accepted {text}"
        );
    }
}

#[test]
fn load_reads_a_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{ "harness": { "suites": ["mod"] } }"#).unwrap();
    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.harness.suites, [SuiteSelector::Mod]);
}

#[test]
fn load_reports_the_missing_path() {
    let path = Path::new("/nonexistent/xprobe/config.json");
    let err = Config::load(path).unwrap_err();
    assert!(matches!(&err, ConfigError::Io { path: p, .. } if p == path));
    assert!(err.to_string().contains("/nonexistent/xprobe/config.json"));
}
