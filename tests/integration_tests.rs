use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{rlb, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_db");

    rlb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_status_shows_all_default_boxes() {
    let db_path = setup_test_db("status_defaults");

    rlb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rlb()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("My Bedroom Litter Box"))
        .stdout(contains("Living Room Litter Box"))
        .stdout(contains("Under Garbage Can Litter Box"))
        .stdout(contains("Undertable Litter Box"))
        .stdout(contains("Laundry Room Litter Box"))
        .stdout(contains("Parents' Bedroom Litter Box"))
        .stdout(contains("unscheduled"));
}

#[test]
fn test_rename_box() {
    let db_path = setup_test_db("rename_box");

    rlb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rlb()
        .args(["--db", &db_path, "rename", "3", "Hallway Litter Box"])
        .assert()
        .success()
        .stdout(contains("renamed"));

    rlb()
        .args(["--db", &db_path, "status", "--box", "3"])
        .assert()
        .success()
        .stdout(contains("Hallway Litter Box"))
        .stdout(contains("Under Garbage Can Litter Box").not());
}

#[test]
fn test_rename_empty_name_keeps_previous() {
    let db_path = setup_test_db("rename_empty");

    rlb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rlb()
        .args(["--db", &db_path, "rename", "2", "Kitchen Litter Box"])
        .assert()
        .success();

    // empty and whitespace-only names are ignored
    rlb()
        .args(["--db", &db_path, "rename", "2", ""])
        .assert()
        .success();

    rlb()
        .args(["--db", &db_path, "rename", "2", "   "])
        .assert()
        .success();

    rlb()
        .args(["--db", &db_path, "status", "--box", "2"])
        .assert()
        .success()
        .stdout(contains("Kitchen Litter Box"));
}

#[test]
fn test_rename_unknown_box_fails() {
    let db_path = setup_test_db("rename_unknown");

    rlb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rlb()
        .args(["--db", &db_path, "rename", "99", "Ghost Box"])
        .assert()
        .failure()
        .stderr(contains("Unknown box id"));
}

#[test]
fn test_log_scooped_sets_scoop_reminder() {
    let db_path = setup_test_db("log_scooped_reminder");

    rlb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rlb()
        .args([
            "--db",
            &db_path,
            "log",
            "3",
            "scooped",
            "--at",
            "2024-01-01T00:00:00Z",
        ])
        .assert()
        .success();

    rlb()
        .args(["--db", &db_path, "status", "--box", "3"])
        .assert()
        .success()
        .stdout(contains("Next scoop due"))
        .stdout(contains("2024-01-03 00:00 UTC"));
}

#[test]
fn test_log_cleaned_appends_auto_scoops() {
    let db_path = setup_test_db("log_cleaned_auto");

    rlb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rlb()
        .args([
            "--db",
            &db_path,
            "log",
            "3",
            "cleaned",
            "--at",
            "2024-01-02T00:00:00Z",
        ])
        .assert()
        .success();

    rlb()
        .args(["--db", &db_path, "list", "3"])
        .assert()
        .success()
        .stdout(contains("cleaned"))
        .stdout(contains("scooped (auto)"))
        .stdout(contains("2024-01-03 00:00 UTC"))
        .stdout(contains("2024-01-04 00:00 UTC"));
}

/// The full scenario from the design notes: empty box, a scoop, then a clean.
#[test]
fn test_reminder_scenario_box_three() {
    let db_path = setup_test_db("scenario_box3");

    rlb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // no events yet: both reminders unscheduled
    rlb()
        .args(["--db", &db_path, "status", "--box", "3"])
        .assert()
        .success()
        .stdout(contains("unscheduled"));

    // scooped on Jan 1 → scoop due Jan 3
    rlb()
        .args([
            "--db",
            &db_path,
            "log",
            "3",
            "scooped",
            "--at",
            "2024-01-01T00:00:00Z",
        ])
        .assert()
        .success();

    rlb()
        .args(["--db", &db_path, "status", "--box", "3"])
        .assert()
        .success()
        .stdout(contains("2024-01-03 00:00 UTC"));

    // cleaned on Jan 2 → clean due Jan 23, auto scoops Jan 3 and Jan 4
    rlb()
        .args([
            "--db",
            &db_path,
            "log",
            "3",
            "cleaned",
            "--at",
            "2024-01-02T00:00:00Z",
        ])
        .assert()
        .success();

    rlb()
        .args(["--db", &db_path, "status", "--box", "3"])
        .assert()
        .success()
        .stdout(contains("2024-01-23 00:00 UTC"))
        .stdout(contains("scooped (auto)"))
        .stdout(contains("2024-01-04 00:00 UTC"));
}

#[test]
fn test_log_invalid_activity_fails() {
    let db_path = setup_test_db("log_invalid_activity");

    rlb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rlb()
        .args(["--db", &db_path, "log", "1", "vacuumed"])
        .assert()
        .failure()
        .stderr(contains("Invalid activity"));
}

#[test]
fn test_log_unknown_box_fails() {
    let db_path = setup_test_db("log_unknown_box");

    rlb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rlb()
        .args(["--db", &db_path, "log", "42", "scooped"])
        .assert()
        .failure()
        .stderr(contains("Unknown box id"));
}

#[test]
fn test_log_bad_timestamp_fails() {
    let db_path = setup_test_db("log_bad_at");

    rlb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rlb()
        .args(["--db", &db_path, "log", "1", "scooped", "--at", "yesterday"])
        .assert()
        .failure()
        .stderr(contains("Invalid timestamp"));
}

#[test]
fn test_link_logs_event() {
    let db_path = setup_test_db("link_logs");

    rlb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rlb()
        .args(["--db", &db_path, "link", "box=4&activity=scooped"])
        .assert()
        .success();

    rlb()
        .args(["--db", &db_path, "list", "4"])
        .assert()
        .success()
        .stdout(contains("scooped"));
}

#[test]
fn test_link_accepts_full_url() {
    let db_path = setup_test_db("link_url");

    rlb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rlb()
        .args([
            "--db",
            &db_path,
            "link",
            "https://example.com/tracker?box=5&activity=cleaned",
        ])
        .assert()
        .success();

    rlb()
        .args(["--db", &db_path, "list", "5"])
        .assert()
        .success()
        .stdout(contains("cleaned"));
}

#[test]
fn test_link_invalid_params_are_skipped() {
    let db_path = setup_test_db("link_invalid");

    rlb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // non-numeric id, unknown activity, missing parameter, unknown box:
    // all skipped silently with a success exit
    for query in [
        "box=abc&activity=scooped",
        "box=1&activity=vacuumed",
        "box=2",
        "activity=scooped",
        "box=77&activity=scooped",
    ] {
        rlb()
            .args(["--db", &db_path, "link", query])
            .assert()
            .success()
            .stdout(contains("ignored"));
    }

    // nothing was logged anywhere
    for id in ["1", "2"] {
        rlb()
            .args(["--db", &db_path, "list", id])
            .assert()
            .success()
            .stdout(contains("No events logged yet"));
    }
}

#[test]
fn test_journal_records_operations() {
    let db_path = setup_test_db("journal_records");

    rlb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rlb()
        .args([
            "--db",
            &db_path,
            "log",
            "1",
            "scooped",
            "--at",
            "2024-02-01T08:00:00Z",
        ])
        .assert()
        .success();

    rlb()
        .args(["--db", &db_path, "rename", "1", "Upstairs Litter Box"])
        .assert()
        .success();

    rlb()
        .args(["--db", &db_path, "journal", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("log_event"))
        .stdout(contains("rename"));
}

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("db_check_info");

    rlb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rlb()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));

    rlb()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Stored keys"))
        .stdout(contains("Events per box"));
}

#[test]
fn test_db_migrate_is_idempotent() {
    let db_path = setup_test_db("db_migrate_idempotent");

    rlb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rlb()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Migration completed"));

    rlb()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Migration completed"));
}

#[test]
fn test_notify_demo_fires() {
    let db_path = setup_test_db("notify_demo");

    rlb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rlb()
        .args(["--db", &db_path, "notify", "--delay", "0"])
        .assert()
        .success()
        .stdout(contains("Check your litter boxes"));
}
