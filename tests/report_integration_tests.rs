//! Integration tests for the persisted JSON report.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn report_has_summary_fields() {
    let fixture = TestFixture::new();
    fixture.create_file("a.txt", "one\ntwo\nthree\n");
    fixture.create_bytes("b.txt", &[0xc3, 0x28]);

    file_probe!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report saved to test_report.json"));

    let report = fixture.read_report();
    assert_eq!(report["total"], 2);
    assert_eq!(report["passed"], 1);
    assert_eq!(report["failed"], 0);
    assert_eq!(report["warnings"], 1);
    assert_eq!(report["results"].as_array().unwrap().len(), 2);
}

#[test]
fn report_result_fields() {
    let fixture = TestFixture::new();
    fixture.create_file("a.txt", "one\ntwo\nthree\n");

    file_probe!()
        .current_dir(fixture.path())
        .args(["--no-config", "--quiet"])
        .assert()
        .success();

    let report = fixture.read_report();
    let result = &report["results"][0];
    assert!(result["file"].as_str().unwrap().ends_with("a.txt"));
    assert_eq!(result["exists"], true);
    assert_eq!(result["readable"], true);
    assert_eq!(result["size"], 14);
    assert_eq!(result["lines"], 3);
    assert_eq!(result["status"], "passed");
    assert_eq!(result["errors"].as_array().unwrap().len(), 0);
}

#[test]
fn report_records_encoding_warning_message() {
    let fixture = TestFixture::new();
    fixture.create_bytes("bin.json", &[0x00, 0xff, 0x80]);

    file_probe!()
        .current_dir(fixture.path())
        .args(["--no-config", "--quiet"])
        .assert()
        .success();

    let report = fixture.read_report();
    let result = &report["results"][0];
    assert_eq!(result["status"], "warning");
    assert_eq!(result["lines"], 0);
    assert_eq!(result["errors"][0], "Binary file or encoding issue");
}

#[test]
fn results_follow_extension_order() {
    let fixture = TestFixture::new();
    fixture.create_file("z.py", "x = 1\n");
    fixture.create_file("a.txt", "text\n");

    file_probe!()
        .current_dir(fixture.path())
        .args(["--no-config", "--quiet", "--extensions", ".py", ".txt"])
        .assert()
        .success();

    let report = fixture.read_report();
    let results = report["results"].as_array().unwrap();
    assert!(results[0]["file"].as_str().unwrap().ends_with("z.py"));
    assert!(results[1]["file"].as_str().unwrap().ends_with("a.txt"));
}

#[test]
fn output_flag_sets_report_path() {
    let fixture = TestFixture::new();
    fixture.create_file("a.txt", "x\n");

    file_probe!()
        .current_dir(fixture.path())
        .args(["--no-config", "--output", "custom.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report saved to custom.json"));

    assert!(fixture.path().join("custom.json").exists());
    assert!(!fixture.report_path().exists());
}

#[test]
fn existing_report_is_overwritten() {
    let fixture = TestFixture::new();
    fixture.create_file("a.txt", "x\n");
    fixture.create_file("out/report.json", "stale");

    file_probe!()
        .current_dir(fixture.path())
        .args(["--no-config", "--quiet", "--extensions", ".txt"])
        .args(["--output", "out/report.json"])
        .assert()
        .success();

    let content = std::fs::read_to_string(fixture.path().join("out/report.json")).unwrap();
    let report: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(report["total"], 1);
}

#[test]
fn unwritable_report_path_exits_with_config_error() {
    let fixture = TestFixture::new();
    fixture.create_file("a.txt", "x\n");

    file_probe!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "never", "--output", "no/such/dir/r.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("✖ ReportWrite:"));
}

#[test]
fn default_root_reports_paths_without_leading_dot() {
    let fixture = TestFixture::new();
    fixture.create_file("a.txt", "x\n");
    fixture.create_file("src/b.txt", "y\n");

    file_probe!()
        .current_dir(fixture.path())
        .args(["--no-config", "--quiet", "--extensions", ".txt"])
        .assert()
        .success();

    let report = fixture.read_report();
    assert_eq!(report["results"][0]["file"], "a.txt");
    let nested = report["results"][1]["file"].as_str().unwrap();
    assert_eq!(nested.replace('\\', "/"), "src/b.txt");
}
