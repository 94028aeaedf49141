#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pt() -> Command {
    cargo_bin_cmd!("paytrack")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_paytrack.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_paytrack_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh, empty directory under tempdir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_paytrack_dir", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).unwrap();
    path
}

/// Base command pinned to a test DB, a test export file and a fixed clock
pub fn pt_at(db_path: &str, export_file: &str, at: &str) -> Command {
    let mut cmd = pt();
    cmd.args(["--db", db_path, "--export-file", export_file, "--at", at]);
    cmd
}

/// Initialize DB in test mode
pub fn init_db(db_path: &str) {
    pt().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Clock `name` in at `start` and out at `end` with `rate`
pub fn work(db_path: &str, export_file: &str, name: &str, start: &str, end: &str, rate: &str) {
    pt_at(db_path, export_file, start)
        .args(["start", name])
        .assert()
        .success();

    pt_at(db_path, export_file, end)
        .args(["end", name, "--rate", rate])
        .assert()
        .success();
}

/// Init plus a small dataset in the week of Sunday 2025-10-12
pub fn init_db_with_data(db_path: &str, export_file: &str) {
    init_db(db_path);
    work(
        db_path,
        export_file,
        "Alice",
        "2025-10-13T09:00:00",
        "2025-10-13T17:30:00",
        "20",
    );
    work(
        db_path,
        export_file,
        "bob",
        "2025-10-14T08:00:00",
        "2025-10-14T12:00:00",
        "0",
    );
}
