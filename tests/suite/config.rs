//! Config file handling as seen from outside the engine

use std::io::Write;

use mega_engine::{ConfigError, MegaConfig, NumRows, RunSettings};

use crate::common::capture;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn configured_run_uses_file_values() {
    let file = write_config(
        r"
[round]
num_rows = 2

[solve]
operands = [1, 1, 1, 1, 0.5]
precision = 1
",
    );
    let settings = MegaConfig::load_from(file.path())
        .unwrap()
        .settings()
        .unwrap();
    assert_eq!(settings.num_rows, NumRows::new(2));

    let run = capture(settings);
    run.result.unwrap();
    // [[0, 1], [2, 3]] doubled -> sums [2, 10] -> doubled [4, 20]
    assert_eq!(run.stdout, "4.5\n4\n20\n");
}

#[test]
fn partial_config_keeps_defaults() {
    let file = write_config("[solve]\nprecision = 4\n");
    let settings = MegaConfig::load_from(file.path())
        .unwrap()
        .settings()
        .unwrap();
    assert_eq!(
        settings,
        RunSettings {
            precision: 4,
            ..RunSettings::default()
        }
    );
    let run = capture(settings);
    assert!(run.stdout.starts_with("10.0000\n"));
}

#[test]
fn malformed_config_is_a_parse_error() {
    let file = write_config("[round]\nnum_rows = \"three\"\n");
    let err = MegaConfig::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().starts_with("failed to parse config at "));
}
