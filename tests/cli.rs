use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const EVENTS: &str = r#"{
    "count": 2,
    "next": null,
    "previous": null,
    "results": [
        {
            "id": 1,
            "name": "Karim-Nusrat Wedding",
            "category": "wedding",
            "description": "",
            "date": "2030-12-20",
            "time": "18:30:00",
            "venue": "Lakeshore Banquet",
            "address": null,
            "budget": "500000.00",
            "expected_guests": 250,
            "status": "confirmed",
            "created_at": "2025-01-10T08:00:00Z",
            "updated_at": "2025-01-10T08:00:00Z"
        },
        {
            "id": 2,
            "name": "Quarterly Offsite",
            "category": "corporate",
            "date": "2030-03-05",
            "budget": "80000.00",
            "expected_guests": 40,
            "status": "planning",
            "created_at": "2025-02-01T08:00:00Z",
            "updated_at": "2025-02-01T08:00:00Z"
        }
    ]
}"#;

const BUDGET_ITEMS: &str = r#"[
    {
        "id": 10,
        "event": 1,
        "category": "venue",
        "item_name": "Banquet hall",
        "estimated_cost": "1000.00",
        "actual_cost": "800.00",
        "vendor": "",
        "vendor_id": 3,
        "status": "paid",
        "created_at": "2025-01-12T08:00:00Z",
        "updated_at": "2025-01-12T08:00:00Z"
    },
    {
        "id": 11,
        "event": 1,
        "category": "catering",
        "item_name": "Dinner buffet",
        "estimated_cost": "500.00",
        "actual_cost": null,
        "vendor": "Spice Route",
        "status": "pending",
        "created_at": "2025-01-15T08:00:00Z",
        "updated_at": "2025-01-15T08:00:00Z"
    }
]"#;

const GUESTS: &str = r#"[
    {
        "id": 20,
        "event": 1,
        "name": "Farhan",
        "category": "family",
        "rsvp_status": "confirmed",
        "plus_ones": 2,
        "created_at": "2025-01-20T08:00:00Z",
        "updated_at": "2025-01-20T08:00:00Z"
    },
    {
        "id": 21,
        "event": 1,
        "name": "Leena",
        "category": "friends",
        "rsvp_status": "pending",
        "plus_ones": 0,
        "created_at": "2025-01-21T08:00:00Z",
        "updated_at": "2025-01-21T08:00:00Z"
    }
]"#;

const VENDORS: &str = r#"[
    {
        "id": 3,
        "name": "Lakeshore Banquet",
        "category": "venue",
        "rating": "4.50",
        "price_range": "premium",
        "is_preferred": true,
        "created_at": "2024-12-01T08:00:00Z",
        "updated_at": "2024-12-01T08:00:00Z"
    },
    {
        "id": 4,
        "name": "Shutterbox",
        "category": "photography",
        "rating": "3.50",
        "price_range": "mid_range",
        "is_preferred": false,
        "created_at": "2024-12-02T08:00:00Z",
        "updated_at": "2024-12-02T08:00:00Z"
    }
]"#;

fn seeded_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("events.json"), EVENTS).unwrap();
    fs::write(data.join("budget_items.json"), BUDGET_ITEMS).unwrap();
    fs::write(data.join("guests.json"), GUESTS).unwrap();
    fs::write(data.join("vendors.json"), VENDORS).unwrap();
    temp_dir
}

fn eventdesk(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("eventdesk").unwrap();
    cmd.arg("--data-dir").arg(dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn init_creates_settings_and_snapshots() {
    let temp_dir = TempDir::new().unwrap();

    eventdesk(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Initialization complete"));

    assert!(temp_dir.path().join("config.json").exists());
    let events_file = temp_dir.path().join("data").join("events.json");
    let events = fs::read_to_string(events_file).unwrap();
    assert_eq!(events.trim(), "[]");

    eventdesk(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Initialized:       true"))
        .stdout(contains("Trend window (months): 12"));
}

#[test]
fn event_list_and_show() {
    let temp_dir = seeded_dir();

    eventdesk(temp_dir.path())
        .args(["event", "list"])
        .assert()
        .success()
        .stdout(contains("Karim-Nusrat Wedding"))
        .stdout(contains("Quarterly Offsite"));

    eventdesk(temp_dir.path())
        .args(["event", "show", "evt-1"])
        .assert()
        .success()
        .stdout(contains("Lakeshore Banquet"))
        .stdout(contains("Spice Route"))
        .stdout(contains("53.3%"));
}

#[test]
fn event_report_json() {
    let temp_dir = seeded_dir();

    let output = eventdesk(temp_dir.path())
        .args(["report", "event", "1", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["budget"]["total_estimated"], "1500.00");
    assert_eq!(report["budget"]["total_actual"], "800.00");
    assert_eq!(report["budget"]["variance"], "-700.00");
    assert_eq!(report["budget"]["paid_items"], 1);
    assert_eq!(report["guests"]["total_attendees"], 4);
    assert_eq!(report["guests"]["rsvp_rate"], 50.0);
    assert_eq!(report["progress"]["planning_progress"], 50);
    assert_eq!(report["progress"]["is_past_event"], false);
}

#[test]
fn unknown_event_fails() {
    let temp_dir = seeded_dir();

    eventdesk(temp_dir.path())
        .args(["report", "event", "42"])
        .assert()
        .failure()
        .stderr(contains("Event not found: evt-42"));
}

#[test]
fn overall_report_text() {
    let temp_dir = seeded_dir();

    eventdesk(temp_dir.path())
        .args(["report", "overall"])
        .assert()
        .success()
        .stdout(contains("Events: 2   Active: 1   Completed: 0"))
        .stdout(contains("Corporate Event"));
}

#[test]
fn vendor_list_and_report() {
    let temp_dir = seeded_dir();

    eventdesk(temp_dir.path())
        .args(["vendor", "list", "--preferred"])
        .assert()
        .success()
        .stdout(contains("Lakeshore Banquet"))
        .stdout(contains("Shutterbox").not());

    eventdesk(temp_dir.path())
        .args(["report", "vendors", "--format", "csv"])
        .assert()
        .success()
        .stdout(contains("venue,Venue,1,1,4.50"))
        .stdout(contains("TOTAL,,2,1,4.00"));
}

#[test]
fn summary_report_to_file() {
    let temp_dir = seeded_dir();
    let out = temp_dir.path().join("summary.yaml");

    eventdesk(temp_dir.path())
        .args(["report", "summary", "--format", "yaml", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Event Summary exported to:"));

    let yaml = fs::read_to_string(&out).unwrap();
    assert!(yaml.starts_with("# EventDesk Event Summary"));
    assert!(yaml.contains("name: Quarterly Offsite"));
}

#[test]
fn dashboard_totals() {
    let temp_dir = seeded_dir();

    eventdesk(temp_dir.path())
        .arg("dashboard")
        .assert()
        .success()
        .stdout(contains("Dashboard"))
        .stdout(contains("2 (1 confirmed)"))
        .stdout(contains("2 (1 preferred)"));
}

#[test]
fn import_combined_export() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("export.json");
    fs::write(
        &file,
        format!(r#"{{"events": [], "vendors": {}}}"#, VENDORS),
    )
    .unwrap();

    eventdesk(temp_dir.path())
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(contains("Imported 0 events, 0 budget items, 0 guests, 2 vendors"));

    eventdesk(temp_dir.path())
        .args(["vendor", "list"])
        .assert()
        .success()
        .stdout(contains("Shutterbox"));
}

#[test]
fn missing_snapshots_are_empty() {
    let temp_dir = TempDir::new().unwrap();

    eventdesk(temp_dir.path())
        .args(["event", "list"])
        .assert()
        .success()
        .stdout(contains("No events found."));
}
