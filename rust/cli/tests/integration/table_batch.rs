// T-series: table batch driver

use crate::helpers::cli_runner::CliRunner;
use serde_json::Value;
use serial_test::serial;

const RIVER_BOARD: &[&str] = &["--flop", "2C", "2D", "2H", "--turn", "2S", "--river", "3C"];

fn rows(stdout: &str) -> Vec<Vec<&str>> {
    stdout
        .lines()
        .filter(|l| l.contains('\t'))
        .map(|l| l.split('\t').collect())
        .collect()
}

#[test]
#[serial]
fn t1_table_prints_hand_equity_seconds() {
    let mut args = vec!["table", "--suits", "H"];
    args.extend_from_slice(RIVER_BOARD);
    let res = CliRunner::new().run(&args);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);

    // no heart is on the board: C(13, 2) hands
    let rows = rows(&res.stdout);
    assert_eq!(rows.len(), 78);
    assert!(rows.iter().all(|r| r.len() == 3));
    assert_eq!(rows[0][0], "2H 3H");
    for row in &rows {
        let equity: f64 = row[1].parse().unwrap();
        assert!((0.0..=1.0).contains(&equity), "row {:?}", row);
    }
    assert!(res.stdout.contains("Total time:"));
}

#[test]
#[serial]
fn t2_table_skips_board_cards_and_writes_jsonl() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("tables").join("clubs.jsonl");
    let out_owned = out_path.to_string_lossy().into_owned();

    let mut args = vec!["table", "--suits", "C", "--output", out_owned.as_str()];
    args.extend_from_slice(RIVER_BOARD);
    let res = CliRunner::new().run(&args);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);

    // 2C and 3C sit on the board: C(11, 2) hands
    assert_eq!(rows(&res.stdout).len(), 55);
    let contents = std::fs::read_to_string(&out_path).unwrap();
    let records: Vec<Value> = contents
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 55);
    assert_eq!(records[0]["hand"], "4C 5C");
    assert!(records.iter().all(|r| r["scenarios"] == 990));
}

#[test]
#[serial]
fn t3_table_suits_from_env() {
    let mut args = vec!["table"];
    args.extend_from_slice(RIVER_BOARD);
    let res = CliRunner::new().run_with_env(&args, &[("SHOWDOWN_TABLE_SUITS", "D")]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    // 2D is on the board
    assert_eq!(rows(&res.stdout).len(), 66);
}

#[test]
#[serial]
fn t4_table_rejects_unknown_suit() {
    let mut args = vec!["table", "--suits", "HX"];
    args.extend_from_slice(RIVER_BOARD);
    let res = CliRunner::new().run(&args);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("unknown suit 'X'"), "stderr: {}", res.stderr);
}
