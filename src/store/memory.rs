// ABOUTME: In-memory journal store used for dry runs and workflow tests
// ABOUTME: Records inserted rows and can simulate listing or insert failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aliza Wellness

use aliza_core::errors::{AppError, AppResult};
use aliza_core::models::JournalEntry;
use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{JournalStore, StoreUser};

/// Store that keeps rows in memory
///
/// A dry run of the seeder uses it to exercise the full workflow without
/// credentials; tests use the failure switches to reach the error paths.
#[derive(Default)]
pub struct InMemoryJournalStore {
    users: Vec<StoreUser>,
    entries: Mutex<Vec<JournalEntry>>,
    fail_listing: bool,
    fail_after: Option<usize>,
}

impl InMemoryJournalStore {
    /// Empty store with no users
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the user listing
    #[must_use]
    pub fn with_users(mut self, users: Vec<StoreUser>) -> Self {
        self.users = users;
        self
    }

    /// Make `list_users` fail
    #[must_use]
    pub const fn failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    /// Accept `count` inserts, then reject every later one
    #[must_use]
    pub const fn failing_after(mut self, count: usize) -> Self {
        self.fail_after = Some(count);
        self
    }

    /// Snapshot of the stored rows in insertion order
    pub async fn entries(&self) -> Vec<JournalEntry> {
        self.entries.lock().await.clone()
    }
}

#[async_trait]
impl JournalStore for InMemoryJournalStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn list_users(&self) -> AppResult<Vec<StoreUser>> {
        if self.fail_listing {
            return Err(AppError::external_unavailable(
                "memory",
                "user listing disabled",
            ));
        }
        Ok(self.users.clone())
    }

    async fn insert_entry(&self, entry: &JournalEntry) -> AppResult<()> {
        let mut entries = self.entries.lock().await;
        if self.fail_after.is_some_and(|limit| entries.len() >= limit) {
            return Err(AppError::storage(format!(
                "insert rejected for {} {}",
                entry.date, entry.time_of_day
            )));
        }
        entries.push(entry.clone());
        Ok(())
    }
}
