// ABOUTME: Library entry point for the Aliza wellness operator tooling
// ABOUTME: Shared code behind the journal seeder, mock data preview, and service diagnostics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aliza Wellness

#![deny(unsafe_code)]

//! # Aliza Ops
//!
//! Operator tooling for the Aliza menopause-wellness web app. The crate backs
//! four command-line programs:
//!
//! - `seed-journal-entries` writes a fixed week of demo journal entries for
//!   the demo user into the Supabase `daily_entries` table
//! - `preview-mock-data` prints a summary of the exported mock journal document
//! - `diagnose-chat-api` checks configuration and probes the local chat endpoint
//! - `diagnose-brevo` checks the Brevo API key and contact list
//!
//! ## Architecture
//!
//! - **Store**: the `JournalStore` trait with Supabase and in-memory backends
//! - **Seeding**: the literal demo entries, user resolution, and the insert loop
//! - **Mock data**: the JSON document model and its console report
//! - **Diagnostics**: one-shot probes that classify every failure
//! - **Config**: `.env` loading and typed environment lookups
//!
//! Domain types live in `aliza_core`.

/// Environment loading and typed configuration
pub mod config;

/// Configuration presence report and endpoint probes
pub mod diagnostics;

/// Tracing subscriber setup for the binaries
pub mod logging;

/// Mock journal document model and report
pub mod mock_data;

/// Demo journal entries and the seeding workflow
pub mod seeding;

/// Journal storage backends
pub mod store;
