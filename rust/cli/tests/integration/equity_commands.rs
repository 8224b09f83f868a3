// E-series: equity command end to end

use crate::helpers::cli_runner::CliRunner;
use serde_json::Value;
use serial_test::serial;

const QUAD_BOARD: &[&str] = &["--flop", "2C", "2D", "2H", "--turn", "2S", "--river", "3C"];

fn equity_args<'a>(hole: &[&'a str], board: &[&'a str], extra: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec!["equity", "--hole"];
    args.extend_from_slice(hole);
    args.extend_from_slice(board);
    args.extend_from_slice(extra);
    args
}

#[test]
#[serial]
fn e1_river_equity_matches_closed_form() {
    let res = CliRunner::new().run(&equity_args(&["4D", "5D"], QUAD_BOARD, &["--json"]));
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);

    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    let report = &json["report"];
    assert_eq!(report["scenarios"], 990);
    assert_eq!(report["wins"], 15);
    assert_eq!(report["ties"], 21);
    assert_eq!(report["losses"], 954);
    let equity = report["equity"].as_f64().unwrap();
    assert!((equity - 25.5 / 990.0).abs() < 1e-12);
}

#[test]
#[serial]
fn e2_text_output_shows_percentage() {
    let res = CliRunner::new().run(&equity_args(&["4D", "5D"], QUAD_BOARD, &[]));
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains("Equity: 2.58%"), "stdout: {}", res.stdout);
    assert!(res.stdout.contains("Tie policy: half"));
}

#[test]
#[serial]
fn e3_turn_enumerates_every_river() {
    let res = CliRunner::new().run(&equity_args(
        &["AS", "KS"],
        &["--flop", "QS", "JS", "TS", "--turn", "2D"],
        &["--json"],
    ));
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["report"]["boards"], 46);
    assert_eq!(json["report"]["street"], "turn");
    assert_eq!(json["report"]["equity"].as_f64(), Some(1.0));
}

#[test]
#[serial]
fn e4_degenerate_table_is_an_error() {
    let res = CliRunner::new().run(&equity_args(
        &["4D", "5D"],
        QUAD_BOARD,
        &["--opponents", "23"],
    ));
    assert_eq!(res.exit_code, 2);
    assert!(
        res.stderr.contains("No disjoint opponent assignment"),
        "stderr: {}",
        res.stderr
    );
    assert!(res.stdout.is_empty());
}

#[test]
#[serial]
fn e5_turn_without_flop_is_rejected() {
    let res = CliRunner::new().run(&equity_args(&["AS", "KS"], &["--turn", "2D"], &[]));
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("turn given without a flop"), "stderr: {}", res.stderr);
}

#[test]
#[serial]
fn e6_duplicate_card_is_rejected() {
    let res = CliRunner::new().run(&equity_args(&["2C", "5D"], QUAD_BOARD, &[]));
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.starts_with("Error: Engine error: "), "stderr: {}", res.stderr);
}

#[test]
#[serial]
fn e7_split_pot_divides_board_ties() {
    let res = CliRunner::new().run(&equity_args(
        &["2C", "3D"],
        &["--flop", "AS", "KS", "QS", "--turn", "JS", "--river", "TS"],
        &["--opponents", "2", "--tie-policy", "split", "--json"],
    ));
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    let equity = json["report"]["equity"].as_f64().unwrap();
    assert!((equity - 1.0 / 3.0).abs() < 1e-12);
}
