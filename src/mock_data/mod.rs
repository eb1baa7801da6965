// ABOUTME: Mock journal document model, loader, exporter, and console report
// ABOUTME: Shared by the previewer (read-only) and the seeder's export option
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aliza Wellness

//! # Mock Journal Document
//!
//! A JSON document carrying the demo entries together with precomputed
//! summary statistics. The seeder can export one from its literal entries and
//! the previewer prints a human-readable report from one. Nothing in this
//! module writes anywhere except [`save_document`].

mod document;
mod report;

pub use document::{
    load_document, save_document, Distribution, MockDataSummary, MockJournalDocument,
};
pub use report::{
    write_data_summary, write_next_steps, write_report, write_sample_entries, NEXT_STEPS,
};
