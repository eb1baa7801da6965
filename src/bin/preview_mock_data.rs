// ABOUTME: Console previewer for the exported mock journal document
// ABOUTME: Prints distributions, patterns, and sample entries without writing anything
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aliza Wellness

//! Mock journal data previewer.
//!
//! Usage:
//! ```bash
//! # Preview mock_journal_data.json in the current directory
//! cargo run --bin preview-mock-data
//!
//! # Preview another document and show more sample entries
//! cargo run --bin preview-mock-data -- --path data/mock.json --count 5
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use aliza_core::constants::demo;
use aliza_core::constants::mock_data::{DEFAULT_DOCUMENT_PATH, DEFAULT_SAMPLE_COUNT};
use aliza_ops::logging;
use aliza_ops::mock_data::{load_document, write_report};
use anyhow::Result;
use clap::Parser;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "preview-mock-data",
    about = "Aliza Mock Journal Data Preview",
    long_about = "Summarize the mock journal document and show a few sample entries"
)]
struct PreviewArgs {
    /// Document to read
    #[arg(long, default_value = DEFAULT_DOCUMENT_PATH)]
    path: PathBuf,

    /// Number of sample entries to print
    #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    count: usize,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = PreviewArgs::parse();
    logging::init_for_binary("preview-mock-data", args.verbose)?;

    println!(
        "Mock Journal Data for {} ({})",
        demo::USER_NAME,
        demo::USER_EMAIL
    );
    println!("{}", "=".repeat(60));

    let document = match load_document(&args.path) {
        Ok(document) => document,
        Err(e) => {
            debug!("Loading {} failed: {e:?}", args.path.display());
            println!("Error {e}");
            println!("Error Failed to load mock data");
            return Ok(());
        }
    };

    let mut out = io::stdout();
    write_report(&mut out, &document, args.count)?;
    out.flush()?;
    Ok(())
}
