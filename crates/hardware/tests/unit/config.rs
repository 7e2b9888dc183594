//! Configuration Unit Tests.

use std::io::Write;

use pesim_core::Config;
use pesim_core::common::error::SimError;
use tempfile::NamedTempFile;

#[test]
fn defaults() {
    let config = Config::default();
    assert!(!config.general.trace_cycles);
    assert!(config.harness.banner);
    assert_eq!(config.harness.title, "PE Testbench (Internal Accumulator)");
}

#[test]
fn empty_document_uses_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert!(!config.general.trace_cycles);
    assert!(config.harness.banner);
    assert_eq!(config.harness.title, Config::default().harness.title);
}

#[test]
fn partial_section_keeps_other_defaults() {
    let config = Config::from_json(r#"{ "harness": { "banner": false } }"#).unwrap();
    assert!(!config.harness.banner);
    assert_eq!(config.harness.title, "PE Testbench (Internal Accumulator)");
}

#[test]
fn malformed_json_is_a_config_parse_error() {
    let err = Config::from_json(r#"{ "general": { "trace_cycles": "yes" } }"#).unwrap_err();
    assert!(matches!(err, SimError::Parse { what: "config", .. }));
}

#[test]
fn from_file_reads_document() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "general": {{ "trace_cycles": true }} }}"#).unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert!(config.general.trace_cycles);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    match Config::from_file(&path) {
        Err(SimError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}
