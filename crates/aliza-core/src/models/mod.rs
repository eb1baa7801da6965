// ABOUTME: Journal data models shared by the seeders and the previewer
// ABOUTME: Re-exports JournalEntry, its ordered scales, and the symptom flag set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aliza Wellness

//! # Data Models
//!
//! A [`JournalEntry`] is one `daily_entries` row: a self-report for a user, a
//! calendar date, and a time of day. The serialized shape is the table's column
//! set, so the same value is inserted into the store, written to the mock
//! document, and read back by the previewer.

mod journal;
mod symptoms;

pub use journal::{EnergyLevel, JournalEntry, SleepQuality, TimeOfDay};
pub use symptoms::{ReportedSymptom, SymptomFlags, REPORTED_SYMPTOMS};
