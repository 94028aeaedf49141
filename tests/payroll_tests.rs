use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, init_db_with_data, pt_at, setup_test_db, temp_dir, temp_out, work};

#[test]
fn test_payroll_writes_weekly_report() {
    let db_path = setup_test_db("payroll_report");
    let csv = temp_out("payroll_report", "csv");
    let dir = temp_dir("payroll_report");
    init_db_with_data(&db_path, &csv);

    pt_at(&db_path, &csv, "2025-10-16T12:00:00")
        .args(["payroll", "--dir", &dir.to_string_lossy()])
        .assert()
        .success()
        .stdout(
            contains("Weekly Payroll Summary (2025-10-12 to 2025-10-18)")
                .and(contains("Total Gross: $170.00"))
                .and(contains("weekly_summary_2025-W42.md")),
        );

    let report = fs::read_to_string(dir.join("weekly_summary_2025-W42.md")).unwrap();
    assert!(report.starts_with("# Weekly Payroll Summary"));
    assert!(report.contains("_Week of 2025-10-12 to 2025-10-18_"));
    assert!(report.contains("- **Alice** (Paid): 8.50 hrs, Gross $170.00, Tax $25.50, Net $144.50"));
    assert!(report.contains("- **Bob** (Unpaid): 4.00 hrs, Gross $0.00, Tax $0.00, Net $0.00"));
    assert!(report.contains("**Total Paid Hours**: 8.50"));
    assert!(report.contains("**Total Unpaid Hours**: 4.00"));
    assert!(report.contains("**Total Net**: $144.50"));
}

#[test]
fn test_payroll_rerun_overwrites_same_file() {
    let db_path = setup_test_db("payroll_rerun");
    let csv = temp_out("payroll_rerun", "csv");
    let dir = temp_dir("payroll_rerun");
    init_db_with_data(&db_path, &csv);
    let dir_arg = dir.to_string_lossy().to_string();

    pt_at(&db_path, &csv, "2025-10-16T12:00:00")
        .args(["payroll", "--dir", &dir_arg])
        .assert()
        .success();

    work(
        &db_path,
        &csv,
        "alice",
        "2025-10-17T09:00:00",
        "2025-10-17T10:00:00",
        "20",
    );

    pt_at(&db_path, &csv, "2025-10-18T08:00:00")
        .args(["payroll", "--dir", &dir_arg])
        .assert()
        .success();

    let files: Vec<_> = fs::read_dir(&dir).unwrap().collect();
    assert_eq!(files.len(), 1);

    let report = fs::read_to_string(dir.join("weekly_summary_2025-W42.md")).unwrap();
    assert!(report.contains("- **Alice** (Paid): 9.50 hrs, Gross $190.00"));
}

#[test]
fn test_payroll_empty_week_writes_nothing() {
    let db_path = setup_test_db("payroll_empty");
    let csv = temp_out("payroll_empty", "csv");
    let dir = temp_dir("payroll_empty");
    init_db_with_data(&db_path, &csv);

    // Following week: entries from 2025-10-13/14 fall outside it
    pt_at(&db_path, &csv, "2025-10-20T12:00:00")
        .args(["payroll", "--dir", &dir.to_string_lossy()])
        .assert()
        .success()
        .stdout(contains(
            "No payroll data found for the week 2025-10-19 to 2025-10-25.",
        ));

    assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
}

#[test]
fn test_payroll_dry_run_skips_report() {
    let db_path = setup_test_db("payroll_dry_run");
    let csv = temp_out("payroll_dry_run", "csv");
    let dir = temp_dir("payroll_dry_run");
    init_db_with_data(&db_path, &csv);

    pt_at(&db_path, &csv, "2025-10-18T23:59:59")
        .args(["payroll", "--dir", &dir.to_string_lossy(), "--dry-run"])
        .assert()
        .success()
        .stdout(contains("Alice").and(contains("Unpaid")));

    assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
}

#[test]
fn test_payroll_ignores_open_sessions() {
    let db_path = setup_test_db("payroll_open_only");
    let csv = temp_out("payroll_open_only", "csv");
    let dir = temp_dir("payroll_open_only");
    init_db(&db_path);

    pt_at(&db_path, &csv, "2025-10-13T09:00:00")
        .args(["start", "heidi"])
        .assert()
        .success();

    pt_at(&db_path, &csv, "2025-10-15T09:00:00")
        .args(["payroll", "--dir", &dir.to_string_lossy()])
        .assert()
        .success()
        .stdout(contains("No payroll data found"));
}
