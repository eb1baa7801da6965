// ABOUTME: Tests for the mock journal document loader, summary, and console report
// ABOUTME: Covers missing and malformed files, partial documents, and export round trips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aliza Wellness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::fs;

use aliza_core::constants::demo;
use aliza_core::errors::ErrorCode;
use aliza_ops::mock_data::{
    load_document, save_document, write_data_summary, write_report, write_sample_entries,
    MockDataSummary, MockJournalDocument,
};
use aliza_ops::seeding::demo_entries;
use tempfile::TempDir;

fn demo_document() -> MockJournalDocument {
    MockJournalDocument::from_entries(demo::USER_EMAIL, demo_entries("user-1").unwrap())
}

fn render<F>(write: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
{
    let mut out = Vec::new();
    write(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_load_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let error = load_document(&dir.path().join("mock_journal_data.json")).unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert!(error.to_string().contains("not found"));
}

#[test]
fn test_load_malformed_json_reports_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"user_email\": ").unwrap();

    let error = load_document(&path).unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
    assert!(error.message.starts_with("Error parsing JSON: "));
}

#[test]
fn test_document_without_entries_prints_no_samples() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("summary_only.json");
    fs::write(
        &path,
        r#"{
  "user_email": "inbald@sapir.ac.il",
  "entries_count": 15,
  "date_range": "2025-01-15 to 2025-01-22",
  "summary": {
    "sleep_quality_distribution": {"poor": 4, "excellent": 3},
    "mood_distribution": {},
    "symptoms_frequency": {},
    "energy_levels": {},
    "interesting_patterns": ["Sleep tracks hot flashes"]
  }
}"#,
    )
    .unwrap();

    let document = load_document(&path).unwrap();
    assert!(document.entries.is_empty());

    let samples = render(|out| write_sample_entries(out, &document, 3));
    assert!(samples.is_empty());

    let report = render(|out| write_report(out, &document, 3));
    assert!(report.contains("   Entries: 15"));
    assert!(!report.contains("Sample Entries"));

    // keys are printed in document order, not sorted
    let poor = report.find("   poor: 4 entries").unwrap();
    let excellent = report.find("   excellent: 3 entries").unwrap();
    assert!(poor < excellent);
    assert!(report.contains("   • Sleep tracks hot flashes"));
}

#[test]
fn test_entries_without_owner_or_timestamps_still_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("display_only.json");
    fs::write(
        &path,
        r#"{
  "user_email": "inbald@sapir.ac.il",
  "entries_count": 1,
  "date_range": "2025-01-15 to 2025-01-15",
  "summary": {
    "sleep_quality_distribution": {"poor": 1},
    "mood_distribution": {"tired": 1},
    "symptoms_frequency": {"hot_flashes": 1},
    "energy_levels": {"low": 1},
    "interesting_patterns": []
  },
  "entries": [
    {
      "date": "2025-01-15",
      "time_of_day": "evening",
      "sleep_quality": "poor",
      "woke_up_night": true,
      "night_sweats": false,
      "energy_level": "low",
      "mood": "tired",
      "hot_flashes": true,
      "dryness": false,
      "pain": false,
      "bloating": false,
      "concentration_difficulty": false,
      "sleep_issues": false,
      "sexual_desire": false,
      "daily_insight": "לילה קשה"
    }
  ]
}"#,
    )
    .unwrap();

    let document = load_document(&path).unwrap();
    assert_eq!(document.entries.len(), 1);
    assert!(document.entries[0].user_id.is_empty());

    let report = render(|out| write_report(out, &document, 3));
    assert!(report.contains("Sleep Quality Distribution"));
    assert!(report.contains("Sample Entries (first 3):"));
    assert!(report.contains("   Entry 1: 2025-01-15 evening"));
    assert!(report.contains("   Sleep: poor | Mood: tired | Energy: low"));
    assert!(!report.contains("   Symptoms: none"));
    assert!(report.contains("   Insight: לילה קשה"));
}

#[test]
fn test_document_without_summary_skips_distributions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bare.json");
    fs::write(
        &path,
        r#"{"user_email": "a@b.c", "entries_count": 0, "date_range": ""}"#,
    )
    .unwrap();

    let document = load_document(&path).unwrap();
    assert!(document.summary.is_none());

    let summary = render(|out| write_data_summary(out, &document));
    assert!(summary.contains("   User: a@b.c"));
    assert!(!summary.contains("Sleep Quality Distribution"));
    assert!(!summary.contains("Interesting Patterns"));
}

#[test]
fn test_summary_counts_from_demo_entries() {
    let entries = demo_entries("user-1").unwrap();
    let summary = MockDataSummary::from_entries(&entries);

    let sleep = &summary.sleep_quality_distribution;
    assert_eq!(sleep.get("excellent"), Some(3));
    assert_eq!(sleep.get("good"), Some(3));
    assert_eq!(sleep.get("fair"), Some(5));
    assert_eq!(sleep.get("poor"), Some(4));

    assert_eq!(summary.symptoms_frequency.len(), 7);
    assert_eq!(summary.symptoms_frequency.get("hot_flashes"), Some(4));
    assert_eq!(summary.symptoms_frequency.get("pain"), Some(2));

    assert_eq!(summary.mood_distribution.iter().next(), Some(("happy", 3)));

    let total: u64 = summary.energy_levels.iter().map(|(_, n)| n).sum();
    assert_eq!(total, 15);
    assert!(summary
        .interesting_patterns
        .iter()
        .any(|p| p == "1 day(s) have only one check-in"));
}

#[test]
fn test_sample_entries_show_insight_and_symptoms() {
    let document = demo_document();
    let samples = render(|out| write_sample_entries(out, &document, 3));

    assert!(samples.starts_with("Sample Entries (first 3):"));
    assert!(samples.contains("   Entry 1: 2025-01-15 morning"));
    assert!(samples.contains("   Sleep: excellent | Mood: happy | Energy: high"));
    assert!(samples.contains("   Symptoms: none"));
    assert!(samples.contains("   Insight: הרגשתי נהדר היום! שינה טובה ואנרגיה גבוהה"));
    assert!(samples.contains("   Entry 3: 2025-01-16 morning"));
    assert!(!samples.contains("Entry 4:"));
}

#[test]
fn test_export_round_trips_byte_for_byte() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mock_journal_data.json");
    let document = demo_document();

    save_document(&path, &document).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("הרגשתי נהדר היום"));
    assert!(written.contains("\"created_at\": \"2025-01-15T08:00:00Z\""));

    let loaded = load_document(&path).unwrap();
    assert_eq!(loaded, document);
    assert_eq!(loaded.date_range, "2025-01-15 to 2025-01-22");
    assert_eq!(loaded.entries_count, 15);

    let second = dir.path().join("again.json");
    save_document(&second, &loaded).unwrap();
    assert_eq!(fs::read(&path).unwrap(), fs::read(&second).unwrap());
}
