// I-series: defaults < file < env < CLI flags

use crate::helpers::cli_runner::CliRunner;
use serde_json::Value;
use serial_test::serial;
use std::io::Write;

const ROYAL_BOARD: &[&str] = &["--flop", "AS", "KS", "QS", "--turn", "JS", "--river", "TS"];

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
#[serial]
fn i1_cfg_shows_defaults() {
    let res = CliRunner::new().run(&["cfg"]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["opponents"]["value"], 1);
    assert_eq!(json["opponents"]["source"], "default");
    assert_eq!(json["tie_policy"]["value"], "half");
    assert_eq!(json["table_suits"]["value"], "CDHS");
}

#[test]
#[serial]
fn i2_file_then_env_sources() {
    let file = config_file("opponents = 3\ntie_policy = \"split\"\n");
    let path = file.path().to_string_lossy().into_owned();

    let res = CliRunner::new().run_with_env(
        &["cfg"],
        &[("SHOWDOWN_CONFIG", path.as_str()), ("SHOWDOWN_OPPONENTS", "2")],
    );
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["opponents"]["value"], 2);
    assert_eq!(json["opponents"]["source"], "env");
    assert_eq!(json["tie_policy"]["value"], "split");
    assert_eq!(json["tie_policy"]["source"], "file");
    assert_eq!(json["table_suits"]["source"], "default");
}

#[test]
#[serial]
fn i3_configured_values_drive_equity() {
    let file = config_file("opponents = 2\ntie_policy = \"split\"\n");
    let path = file.path().to_string_lossy().into_owned();

    let mut args = vec!["equity", "--hole", "2C", "3D", "--json"];
    args.extend_from_slice(ROYAL_BOARD);
    let res = CliRunner::new().run_with_env(&args, &[("SHOWDOWN_CONFIG", path.as_str())]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["report"]["opponents"], 2);
    assert_eq!(json["report"]["tie_policy"], "split");
    let equity = json["report"]["equity"].as_f64().unwrap();
    assert!((equity - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
#[serial]
fn i4_cli_flags_override_env() {
    let mut args = vec![
        "equity",
        "--hole",
        "2C",
        "3D",
        "--opponents",
        "1",
        "--tie-policy",
        "half",
        "--json",
    ];
    args.extend_from_slice(ROYAL_BOARD);
    let res = CliRunner::new().run_with_env(
        &args,
        &[("SHOWDOWN_OPPONENTS", "4"), ("SHOWDOWN_TIE_POLICY", "split")],
    );
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["report"]["opponents"], 1);
    assert_eq!(json["report"]["tie_policy"], "half");
    assert_eq!(json["report"]["equity"].as_f64(), Some(0.5));
}

#[test]
#[serial]
fn i5_invalid_env_value_fails_commands() {
    let res = CliRunner::new().run_with_env(&["cfg"], &[("SHOWDOWN_OPPONENTS", "0")]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("opponents must be >=1"), "stderr: {}", res.stderr);

    let mut args = vec!["equity", "--hole", "2C", "3D"];
    args.extend_from_slice(ROYAL_BOARD);
    let res = CliRunner::new().run_with_env(&args, &[("SHOWDOWN_TIE_POLICY", "third")]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid configuration"), "stderr: {}", res.stderr);
}

#[test]
#[serial]
fn i6_malformed_config_file_is_reported() {
    let file = config_file("opponents = \"many\"\n");
    let path = file.path().to_string_lossy().into_owned();
    let res = CliRunner::new().run_with_env(&["cfg"], &[("SHOWDOWN_CONFIG", path.as_str())]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("cannot parse config file"), "stderr: {}", res.stderr);
}
