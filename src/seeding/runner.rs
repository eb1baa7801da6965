// ABOUTME: Sequential insert loop for journal entries with stop-on-first-failure semantics
// ABOUTME: Reports how many rows were committed before a failure ended the run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aliza Wellness

use aliza_core::errors::{AppError, AppResult};
use aliza_core::models::JournalEntry;
use chrono::{DateTime, Utc};
use tracing::{error, info};

use super::entries::demo_entries;
use super::user::{resolve_user_id, UserResolution};
use crate::store::JournalStore;

/// Result of one pass over the entries
///
/// There is no transaction around the loop: when `failure` is set, the first
/// `inserted` rows are in the store and the rest were never attempted.
#[derive(Debug)]
pub struct SeedReport {
    /// Entries handed to the loop
    pub total: usize,
    /// Entries written before the loop ended
    pub inserted: usize,
    /// The error that ended the loop early
    pub failure: Option<AppError>,
}

impl SeedReport {
    /// Whether every entry was written
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.failure.is_none() && self.inserted == self.total
    }
}

/// Insert entries one at a time, stopping at the first failure
pub async fn insert_entries(store: &dyn JournalStore, entries: &[JournalEntry]) -> SeedReport {
    let mut inserted = 0;
    for entry in entries {
        if let Err(e) = store.insert_entry(entry).await {
            error!(
                "Error adding entries: {e} ({inserted} of {} written before the failure)",
                entries.len()
            );
            return SeedReport {
                total: entries.len(),
                inserted,
                failure: Some(e),
            };
        }
        inserted += 1;
        info!("Added entry for {} {}", entry.date, entry.time_of_day);
    }

    SeedReport {
        total: entries.len(),
        inserted,
        failure: None,
    }
}

/// Everything one seeder run produced
#[derive(Debug)]
pub struct SeedOutcome {
    /// How the target user was resolved
    pub resolution: UserResolution,
    /// Insert loop result
    pub report: SeedReport,
}

/// Resolve the user for `email`, build the demo entries, and insert them
///
/// # Errors
///
/// Returns an error only if the literal entries cannot be built; store
/// failures are captured in the returned report.
pub async fn seed_demo_journal(
    store: &dyn JournalStore,
    email: &str,
    now: DateTime<Utc>,
) -> AppResult<SeedOutcome> {
    let resolution = resolve_user_id(store, email, now).await;
    info!("Using user ID: {}", resolution.user_id());

    let entries = demo_entries(resolution.user_id())?;
    let report = insert_entries(store, &entries).await;

    Ok(SeedOutcome { resolution, report })
}
