#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rlb() -> Command {
    cargo_bin_cmd!("rlitterbox")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rlitterbox.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and log a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables)
    rlb()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rlb()
        .args([
            "--db",
            db_path,
            "log",
            "1",
            "scooped",
            "--at",
            "2024-01-01T00:00:00Z",
        ])
        .assert()
        .success();

    rlb()
        .args([
            "--db",
            db_path,
            "log",
            "2",
            "cleaned",
            "--at",
            "2024-01-02T00:00:00Z",
        ])
        .assert()
        .success();
}
