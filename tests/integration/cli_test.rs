//! CLI integration tests.
//!
//! Every store-touching command runs against a temp directory via
//! `AVC_REVIEW_DIR` so the real store is never touched.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn avc(store: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("avc").unwrap();
    cmd.env("AVC_REVIEW_DIR", store.path());
    cmd
}

const SAMPLE_REVIEW: &str = r#"{
  "gameId": "505589",
  "homeTeamName": "Hawks",
  "awayTeamName": "Wolves",
  "periods": {
    "1": [
      {"videoSec": 90, "restGameClock": "8:12", "comment": "fast break", "homeAway": "HOME"}
    ],
    "2": [],
    "3": [],
    "4": [
      {"videoSec": 2400, "comment": "buzzer beater", "homeAway": "AWAY"}
    ]
  }
}"#;

#[test]
fn time_converts_colon_and_shorthand_forms() {
    let tmp = TempDir::new().unwrap();
    avc(&tmp)
        .args(["time", "1:15:30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4530 (1:15:30)"));

    avc(&tmp)
        .args(["time", "1h15m30s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4530"));
}

#[test]
fn time_rejects_garbage() {
    let tmp = TempDir::new().unwrap();
    avc(&tmp)
        .args(["time", "not-a-time"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized time value"));
}

#[test]
fn ls_on_empty_store_says_so() {
    let tmp = TempDir::new().unwrap();
    avc(&tmp)
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("No stored reviews"));
}

#[test]
fn import_show_ls_rm_round_trip() {
    let tmp = TempDir::new().unwrap();
    let doc = tmp.path().join("game.json");
    std::fs::write(&doc, SAMPLE_REVIEW).unwrap();

    avc(&tmp)
        .args(["import", "505589"])
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 record(s)"));

    avc(&tmp)
        .args(["show", "505589"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fast break"))
        .stdout(predicate::str::contains("buzzer beater"));

    avc(&tmp)
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("505589"))
        .stdout(predicate::str::contains("Hawks vs Wolves"));

    avc(&tmp).args(["rm", "505589"]).assert().success();

    avc(&tmp)
        .args(["show", "505589"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no stored review"));
}

#[test]
fn invalid_import_leaves_the_store_unchanged() {
    let tmp = TempDir::new().unwrap();
    let doc = tmp.path().join("broken.json");
    std::fs::write(&doc, r#"{"gameId": "1"}"#).unwrap();

    avc(&tmp)
        .args(["import", "505589"])
        .arg(&doc)
        .assert()
        .failure()
        .stderr(predicate::str::contains("import rejected"));

    avc(&tmp)
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("No stored reviews"));
}

#[test]
fn import_rejects_non_array_period() {
    let tmp = TempDir::new().unwrap();
    let doc = tmp.path().join("bad-period.json");
    std::fs::write(&doc, r#"{"periods": {"1": "not an array"}}"#).unwrap();

    avc(&tmp)
        .args(["import", "505589"])
        .arg(&doc)
        .assert()
        .failure()
        .stderr(predicate::str::contains("import rejected"));
}

#[test]
fn export_writes_a_loadable_document() {
    let tmp = TempDir::new().unwrap();
    let doc = tmp.path().join("game.json");
    std::fs::write(&doc, SAMPLE_REVIEW).unwrap();
    avc(&tmp).args(["import", "505589"]).arg(&doc).assert().success();

    let out = tmp.path().join("exported.json");
    avc(&tmp)
        .args(["export", "505589", "-o"])
        .arg(&out)
        .assert()
        .success();

    let exported = std::fs::read_to_string(&out).unwrap();
    assert!(exported.contains("\"videoSec\": 90"));
    assert!(exported.contains("\"homeAway\": \"AWAY\""));
}

#[test]
fn fix_shifts_records_and_strips_legacy_fields() {
    let tmp = TempDir::new().unwrap();
    let doc = tmp.path().join("export.json");
    let raw = r#"{
      "gameId": "505589",
      "periods": {
        "1": [
          {"videoSec": 7523, "comment": "after tipoff", "homeAway": "HOME", "isConfirmed": true},
          {"videoSec": 100, "comment": "pregame", "homeAway": "AWAY"}
        ]
      }
    }"#;
    std::fs::write(&doc, raw).unwrap();

    let out = tmp.path().join("export-fixed.json");
    avc(&tmp)
        .args(["fix"])
        .arg(&doc)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("offset applied: 7223 seconds"))
        .stdout(predicate::str::contains("total records: 2"))
        .stdout(predicate::str::contains("'isConfirmed' removed: 1"));

    let fixed = std::fs::read_to_string(&out).unwrap();
    // 7523 - 7223 = 300; 100 - 7223 floors at 0.
    assert!(fixed.contains("\"videoSec\": 300"));
    assert!(fixed.contains("\"videoSec\": 0"));
    assert!(!fixed.contains("isConfirmed"));
}

#[test]
fn fix_accepts_a_custom_offset() {
    let tmp = TempDir::new().unwrap();
    let doc = tmp.path().join("export.json");
    let raw = r#"{"periods": {"1": [{"videoSec": 50, "comment": "x", "homeAway": "HOME"}]}}"#;
    std::fs::write(&doc, raw).unwrap();

    let out = tmp.path().join("custom-fixed.json");
    avc(&tmp)
        .args(["fix"])
        .arg(&doc)
        .arg("-o")
        .arg(&out)
        .args(["--offset", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("offset applied: 20 seconds"));

    let fixed = std::fs::read_to_string(&out).unwrap();
    assert!(fixed.contains("\"videoSec\": 30"));
}

#[test]
fn config_path_prints_a_toml_location() {
    let tmp = TempDir::new().unwrap();
    avc(&tmp)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn completions_generate_for_bash() {
    let tmp = TempDir::new().unwrap();
    avc(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("avc"));
}
