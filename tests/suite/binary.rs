//! End-to-end runs of the `mega` binary

use std::fs;
use std::process::{Command, Output};

fn run_mega(config: Option<&str>) -> Output {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    if let Some(contents) = config {
        fs::write(&config_path, contents).unwrap();
    }
    Command::new(env!("CARGO_BIN_EXE_mega"))
        .env("MEGA_CONFIG", &config_path)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

#[test]
fn binary_prints_fixture_output() {
    let output = run_mega(None);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "10.00\n12\n48\n84\n");
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "[[0, 1, 2], [3, 4, 5], [6, 7, 8]]\n[[0, 2, 4], [6, 8, 10], [12, 14, 16]]\n"
    );
}

#[test]
fn binary_honors_config_file() {
    let output = run_mega(Some("[round]\nnum_rows = 1\n"));
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "10.00\n0\n");
}

#[test]
fn binary_falls_back_on_invalid_config() {
    let output = run_mega(Some("[round]\nnum_rows = 0\n"));
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "10.00\n12\n48\n84\n");
}

#[test]
fn binary_falls_back_on_out_of_range_config() {
    for config in [
        "[solve]\nprecision = 100000\n",
        "[round]\nnum_rows = 100000000\n",
    ] {
        let output = run_mega(Some(config));
        assert!(output.status.success(), "config: {config}");
        assert_eq!(
            String::from_utf8_lossy(&output.stdout),
            "10.00\n12\n48\n84\n",
            "config: {config}"
        );
    }
}

#[test]
fn binary_falls_back_on_unparsable_config() {
    let output = run_mega(Some("[round\nnum_rows = "));
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "10.00\n12\n48\n84\n");
}

#[test]
fn binary_exits_nonzero_on_overflow() {
    let max = i64::MAX;
    let output = run_mega(Some(&format!("[solve]\noperands = [{max}, 1, 0, 0, 0]\n")));
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("round trip failed"));
}
