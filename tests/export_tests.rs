use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, rlb, setup_test_db, temp_out};

#[test]
fn test_export_csv_all_boxes() {
    let db_path = setup_test_db("export_csv_all");
    let out = temp_out("export_csv_all", "csv");

    init_db_with_data(&db_path);

    rlb()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("box_id,box_name,activity,timestamp"));
    assert!(content.contains("scooped"));
    assert!(content.contains("cleaned"));
    assert!(content.contains("scooped (auto)"));
    assert!(content.contains("My Bedroom Litter Box"));
}

#[test]
fn test_export_json_single_box() {
    let db_path = setup_test_db("export_json_box");
    let out = temp_out("export_json_box", "json");

    init_db_with_data(&db_path);

    rlb()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--box", "1",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"box_id\": 1"));
    assert!(content.contains("\"activity\": \"scooped\""));
    // box 2's clean (and its auto scoops) are filtered out
    assert!(!content.contains("\"box_id\": 2"));
    assert!(!content.contains("cleaned"));
}

#[test]
fn test_export_refuses_to_overwrite_without_force() {
    let db_path = setup_test_db("export_no_overwrite");
    let out = temp_out("export_no_overwrite", "csv");

    init_db_with_data(&db_path);

    fs::write(&out, "pre-existing").expect("create file");

    rlb()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    // untouched
    assert_eq!(fs::read_to_string(&out).expect("read"), "pre-existing");

    rlb()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    assert!(fs::read_to_string(&out)
        .expect("read")
        .starts_with("box_id,box_name,activity,timestamp"));
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");

    init_db_with_data(&db_path);

    rlb()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--file",
            "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_with_no_events_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    let out = temp_out("export_empty", "csv");

    rlb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rlb()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("No events found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_unknown_box_fails() {
    let db_path = setup_test_db("export_unknown_box");
    let out = temp_out("export_unknown_box", "csv");

    init_db_with_data(&db_path);

    rlb()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--box", "9",
        ])
        .assert()
        .failure()
        .stderr(contains("Unknown box id"));
}

#[test]
fn test_backup_copies_the_database() {
    let db_path = setup_test_db("backup_plain");
    let out = temp_out("backup_plain", "sqlite");

    init_db_with_data(&db_path);

    rlb()
        .args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    // the copy is a usable database holding the same keys
    let conn = rusqlite::Connection::open(&out).expect("open backup");
    let keys: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv", [], |row| row.get(0))
        .expect("count kv rows");
    assert!(keys > 0);
}

#[test]
fn test_backup_compress_produces_zip() {
    let db_path = setup_test_db("backup_zip");
    let out = temp_out("backup_zip", "sqlite");

    init_db_with_data(&db_path);

    rlb()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    let zip_path = std::path::Path::new(&out).with_extension("zip");
    assert!(zip_path.exists());
    // the uncompressed copy is removed after compression
    assert!(!std::path::Path::new(&out).exists());

    fs::remove_file(&zip_path).ok();
}

#[test]
fn test_backup_refuses_to_overwrite_without_force() {
    let db_path = setup_test_db("backup_no_overwrite");
    let out = temp_out("backup_no_overwrite", "sqlite");

    init_db_with_data(&db_path);

    fs::write(&out, "pre-existing").expect("create file");

    rlb()
        .args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    rlb()
        .args(["--db", &db_path, "backup", "--file", &out, "--force"])
        .assert()
        .success();
}
