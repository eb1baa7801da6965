// ABOUTME: Data store seam used by the journal seeder
// ABOUTME: Defines the JournalStore trait with Supabase and in-memory implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aliza Wellness

//! # Journal Store
//!
//! The seeder needs exactly two operations from the remote data store: listing
//! registered users (to find the demo account by email) and inserting a single
//! `daily_entries` row. [`JournalStore`] captures that surface so the workflow
//! runs unchanged against [`SupabaseClient`] or [`InMemoryJournalStore`].

mod memory;
mod supabase;

pub use memory::InMemoryJournalStore;
pub use supabase::SupabaseClient;

use aliza_core::errors::AppResult;
use aliza_core::models::JournalEntry;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A registered account as returned by the admin listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreUser {
    /// Account id
    pub id: String,
    /// Email, absent for phone-only accounts
    #[serde(default)]
    pub email: Option<String>,
}

impl StoreUser {
    /// Create a user with an email
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: Some(email.into()),
        }
    }
}

/// Write surface consumed by the seeder
///
/// Calls are issued sequentially; implementations need no internal ordering
/// guarantees beyond "a completed insert is visible to later listings".
#[async_trait]
pub trait JournalStore: Send + Sync {
    /// Short name used in log lines
    fn name(&self) -> &'static str;

    /// Every registered user
    async fn list_users(&self) -> AppResult<Vec<StoreUser>>;

    /// Insert one entry as a new row
    async fn insert_entry(&self, entry: &JournalEntry) -> AppResult<()>;
}
