// ABOUTME: Journal seeder that writes a fixed week of demo entries into Supabase
// ABOUTME: Resolves the demo user by email and inserts entries one at a time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aliza Wellness

//! Demo journal seeder.
//!
//! Writes 15 journal entries (2025-01-15 to 2025-01-22, morning and evening
//! check-ins) for the demo user so the dashboard and chat have history to
//! work with.
//!
//! Usage:
//! ```bash
//! # Seed the default demo user
//! cargo run --bin seed-journal-entries
//!
//! # Seed another account
//! cargo run --bin seed-journal-entries -- --email someone@example.com
//!
//! # Run the whole workflow against an in-memory store
//! cargo run --bin seed-journal-entries -- --dry-run
//!
//! # Write the entries as a mock journal document instead
//! cargo run --bin seed-journal-entries -- --export mock_journal_data.json
//! ```

use std::path::{Path, PathBuf};
use std::process;

use aliza_core::constants::demo;
use aliza_ops::config::{load_dotenv, StoreConfig};
use aliza_ops::logging;
use aliza_ops::mock_data::{save_document, MockJournalDocument};
use aliza_ops::seeding::{
    demo_entries, placeholder_user_id, seed_demo_journal, SeedOutcome, COVERAGE_NOTES,
};
use aliza_ops::store::{InMemoryJournalStore, JournalStore, SupabaseClient};
use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "seed-journal-entries",
    about = "Aliza Demo Journal Seeder",
    long_about = "Insert a fixed week of demo journal entries for the demo user"
)]
struct SeedArgs {
    /// Email of the account that owns the entries
    #[arg(long, default_value = demo::USER_EMAIL)]
    email: String,

    /// Run against an in-memory store instead of Supabase
    #[arg(long)]
    dry_run: bool,

    /// Write the entries as a mock journal document and exit
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn export_document(path: &Path, email: &str) -> Result<()> {
    let user_id = placeholder_user_id(Utc::now(), &[]);
    let entries = demo_entries(&user_id)?;
    let document = MockJournalDocument::from_entries(email, entries);
    save_document(path, &document)?;

    println!(
        "Success Wrote {} entries for {email} to {}",
        document.entries_count,
        path.display()
    );
    println!("   Date Range: {}", document.date_range);
    Ok(())
}

fn print_outcome(outcome: &SeedOutcome) {
    let report = &outcome.report;

    if let Some(error) = &report.failure {
        println!("Error Error adding entries: {error}");
        println!(
            "   {} of {} entries were added before the failure",
            report.inserted, report.total
        );
        return;
    }

    println!();
    println!(
        "Success Successfully added {} journal entries for {}!",
        report.inserted,
        demo::USER_NAME
    );
    if outcome.resolution.is_placeholder() {
        println!(
            "Tip Entries were written for placeholder user {}",
            outcome.resolution.user_id()
        );
    }
    println!("Data Data includes:");
    for note in COVERAGE_NOTES {
        println!("- {note}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let loaded = load_dotenv();
    logging::init_for_binary("seed-journal-entries", args.verbose)?;
    for path in &loaded {
        info!("Loaded environment from {}", path.display());
    }

    info!("=== Aliza Demo Journal Seeder ===");

    if let Some(path) = &args.export {
        return export_document(path, &args.email);
    }

    let store: Box<dyn JournalStore> = if args.dry_run {
        warn!("Dry run: entries go to an in-memory store");
        Box::new(InMemoryJournalStore::new())
    } else {
        match StoreConfig::from_env() {
            Ok(config) => Box::new(SupabaseClient::new(config)?),
            Err(e) => {
                println!("Error {e}");
                process::exit(1);
            }
        }
    };
    info!("Using store: {}", store.name());

    let outcome = seed_demo_journal(store.as_ref(), &args.email, Utc::now()).await?;
    print_outcome(&outcome);

    Ok(())
}
