use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, pt, setup_test_db, temp_out};

#[test]
fn test_export_csv_all() {
    let db_path = setup_test_db("export_csv_all");
    let sink = temp_out("export_csv_all_sink", "csv");
    let out = temp_out("export_csv_all", "csv");
    init_db_with_data(&db_path, &sink);

    pt().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "all",
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("name,rate,start_time,end_time,hours,gross,tax,net,created_at"));
    assert!(content.contains("alice,20.00"));
    assert!(content.contains("bob,0.00"));
}

#[test]
fn test_export_json_with_range() {
    let db_path = setup_test_db("export_json_range");
    let sink = temp_out("export_json_range_sink", "csv");
    let out = temp_out("export_json_range", "json");
    init_db_with_data(&db_path, &sink);

    pt().args([
        "--db",
        &db_path,
        "export",
        "--format",
        "json",
        "--file",
        &out,
        "--range",
        "2025-10-13",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "alice");
    assert_eq!(rows[0]["gross"], "170.00");
}

#[test]
fn test_export_empty_range_creates_no_file() {
    let db_path = setup_test_db("export_empty_range");
    let sink = temp_out("export_empty_range_sink", "csv");
    let out = temp_out("export_empty_range", "csv");
    init_db_with_data(&db_path, &sink);

    pt().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "2024",
    ])
    .assert()
    .success()
    .stdout(contains("No payroll entries found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_existing_file_needs_force() {
    let db_path = setup_test_db("export_force");
    let sink = temp_out("export_force_sink", "csv");
    let out = temp_out("export_force", "csv");
    init_db_with_data(&db_path, &sink);
    fs::write(&out, "old").unwrap();

    pt().args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "old");

    pt().args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("alice"));
}

#[test]
fn test_list_period_shows_entries() {
    let db_path = setup_test_db("list_period");
    let sink = temp_out("list_period_sink", "csv");
    init_db_with_data(&db_path, &sink);

    pt().args(["--db", &db_path, "list", "--period", "2025-10"])
        .assert()
        .success()
        .stdout(
            contains("Alice")
                .and(contains("Bob"))
                .and(contains("2 entries")),
        );
}

#[test]
fn test_list_default_month_follows_pinned_clock() {
    let db_path = setup_test_db("list_default_month");
    let sink = temp_out("list_default_month_sink", "csv");
    init_db_with_data(&db_path, &sink);

    pt().args(["--db", &db_path, "--at", "2025-10-31T23:00:00", "list"])
        .assert()
        .success()
        .stdout(contains("2 entries"));

    pt().args(["--db", &db_path, "--at", "2025-11-01T08:00:00", "list"])
        .assert()
        .success()
        .stdout(contains("No payroll entries for the selected period."));
}
