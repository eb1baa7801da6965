// ABOUTME: Tests for the demo journal seeding workflow
// ABOUTME: Covers the literal entries, user resolution fallbacks, and stop-on-failure inserts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aliza Wellness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::BTreeMap;

use aliza_core::constants::demo;
use aliza_core::errors::ErrorCode;
use aliza_core::models::{SleepQuality, TimeOfDay};
use aliza_ops::seeding::{
    demo_entries, insert_entries, placeholder_user_id, resolve_user_id, seed_demo_journal,
    PlaceholderReason, UserResolution,
};
use aliza_ops::store::{InMemoryJournalStore, StoreUser};
use chrono::{NaiveDate, TimeZone, Utc};

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 23, 9, 0, 0).unwrap()
}

#[test]
fn test_demo_entries_cover_eight_dates_with_fifteen_rows() {
    let entries = demo_entries("user-1").unwrap();
    assert_eq!(entries.len(), 15);
    assert!(entries.iter().all(|e| e.user_id == "user-1"));

    let mut by_date: BTreeMap<NaiveDate, Vec<TimeOfDay>> = BTreeMap::new();
    for entry in &entries {
        by_date.entry(entry.date).or_default().push(entry.time_of_day);
    }
    assert_eq!(by_date.len(), 8);

    for day in 15..=21 {
        let date = NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
        assert_eq!(
            by_date[&date],
            vec![TimeOfDay::Morning, TimeOfDay::Evening],
            "{date} should have one morning and one evening entry"
        );
    }
    let last = NaiveDate::from_ymd_opt(2025, 1, 22).unwrap();
    assert_eq!(by_date[&last], vec![TimeOfDay::Morning]);
}

#[test]
fn test_demo_entries_timestamps_match_check_in_time() {
    let entries = demo_entries("user-1").unwrap();
    let first = &entries[0];
    assert_eq!(
        first.created_at,
        Utc.with_ymd_and_hms(2025, 1, 15, 8, 0, 0).unwrap()
    );
    assert_eq!(first.created_at, first.updated_at);

    let second = &entries[1];
    assert_eq!(
        second.created_at,
        Utc.with_ymd_and_hms(2025, 1, 15, 20, 30, 0).unwrap()
    );
}

#[test]
fn test_demo_entries_hard_night_flags() {
    let entries = demo_entries("user-1").unwrap();
    let hard_night = entries
        .iter()
        .find(|e| e.date == NaiveDate::from_ymd_opt(2025, 1, 16).unwrap())
        .unwrap();
    assert_eq!(hard_night.sleep_quality, SleepQuality::Poor);
    assert!(hard_night.hot_flashes);
    assert!(hard_night.night_sweats);
    assert!(hard_night.woke_up_night);
    assert!(!hard_night.sexual_desire);
    assert_eq!(
        hard_night.symptom_summary(),
        "hot flashes, night sweats, concentration issues, sleep issues"
    );

    let good_day = &entries[0];
    assert_eq!(good_day.symptom_summary(), "none");
    assert!(good_day.sexual_desire);
}

#[test]
fn test_placeholder_user_id_uses_timestamp() {
    let id = placeholder_user_id(fixed_now(), &[]);
    assert_eq!(id, format!("mock-user-{}", fixed_now().timestamp()));
}

#[test]
fn test_placeholder_user_id_avoids_listed_ids() {
    let taken = format!("mock-user-{}", fixed_now().timestamp());
    let users = vec![StoreUser::new(taken.clone(), "other@example.com")];
    let id = placeholder_user_id(fixed_now(), &users);
    assert!(id.starts_with("mock-user-"));
    assert_ne!(id, taken);
}

#[tokio::test]
async fn test_resolve_user_finds_email_case_insensitively() {
    let store = InMemoryJournalStore::new().with_users(vec![
        StoreUser::new("u-1", "someone@example.com"),
        StoreUser::new("u-2", "InbalD@Sapir.ac.il"),
    ]);
    let resolution = resolve_user_id(&store, demo::USER_EMAIL, fixed_now()).await;
    assert_eq!(resolution, UserResolution::Found("u-2".to_owned()));
    assert!(!resolution.is_placeholder());
}

#[tokio::test]
async fn test_resolve_user_falls_back_when_missing() {
    let store =
        InMemoryJournalStore::new().with_users(vec![StoreUser::new("u-1", "someone@example.com")]);
    let resolution = resolve_user_id(&store, demo::USER_EMAIL, fixed_now()).await;

    match &resolution {
        UserResolution::Placeholder { id, reason } => {
            assert!(id.starts_with("mock-user-"));
            assert_ne!(id, "u-1");
            assert_eq!(reason, &PlaceholderReason::NotFound);
        }
        UserResolution::Found(id) => panic!("unexpected match {id}"),
    }
}

#[tokio::test]
async fn test_resolve_user_falls_back_when_listing_fails() {
    let store = InMemoryJournalStore::new().failing_listing();
    let resolution = resolve_user_id(&store, demo::USER_EMAIL, fixed_now()).await;

    assert!(resolution.is_placeholder());
    assert!(matches!(
        resolution,
        UserResolution::Placeholder {
            reason: PlaceholderReason::LookupFailed(_),
            ..
        }
    ));
}

#[tokio::test]
async fn test_seed_demo_journal_writes_every_entry() {
    common::init_test_logging();
    let store =
        InMemoryJournalStore::new().with_users(vec![StoreUser::new("u-42", demo::USER_EMAIL)]);

    let outcome = seed_demo_journal(&store, demo::USER_EMAIL, fixed_now())
        .await
        .unwrap();

    assert_eq!(outcome.resolution.user_id(), "u-42");
    assert!(outcome.report.is_complete());
    assert_eq!(outcome.report.inserted, 15);

    let stored = store.entries().await;
    assert_eq!(stored.len(), 15);
    assert!(stored.iter().all(|e| e.user_id == "u-42"));
    assert_eq!(stored, demo_entries("u-42").unwrap());
}

#[tokio::test]
async fn test_insert_failure_stops_the_loop() {
    common::init_test_logging();
    let store = InMemoryJournalStore::new().failing_after(4);
    let entries = demo_entries("u-1").unwrap();

    let report = insert_entries(&store, &entries).await;

    assert!(!report.is_complete());
    assert_eq!(report.total, 15);
    assert_eq!(report.inserted, 4);
    let failure = report.failure.expect("insert failure recorded");
    assert_eq!(failure.code, ErrorCode::StorageError);

    let stored = store.entries().await;
    assert_eq!(stored, entries[..4].to_vec());
}

#[tokio::test]
async fn test_seed_with_failing_listing_still_inserts() {
    let store = InMemoryJournalStore::new().failing_listing();
    let outcome = seed_demo_journal(&store, demo::USER_EMAIL, fixed_now())
        .await
        .unwrap();

    assert!(outcome.resolution.is_placeholder());
    assert!(outcome.report.is_complete());
    let stored = store.entries().await;
    assert!(stored
        .iter()
        .all(|e| e.user_id == outcome.resolution.user_id()));
}
