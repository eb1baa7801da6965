// ABOUTME: Journal seeding workflow for the demo account
// ABOUTME: Resolves the target user, builds the literal entries, and inserts them one by one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aliza Wellness

//! # Journal Seeder
//!
//! The workflow is strictly linear:
//!
//! 1. [`resolve_user_id`] scans the store's users for the demo email and falls
//!    back to a `mock-user-<unix-seconds>` placeholder when there is no match.
//! 2. [`demo_entries`] builds the fixed set of entries for that id.
//! 3. [`insert_entries`] writes them one at a time and stops at the first
//!    failure. Rows already written stay written.

mod entries;
mod runner;
mod user;

pub use entries::{demo_entries, COVERAGE_NOTES};
pub use runner::{insert_entries, seed_demo_journal, SeedOutcome, SeedReport};
pub use user::{placeholder_user_id, resolve_user_id, PlaceholderReason, UserResolution};
