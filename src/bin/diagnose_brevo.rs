// ABOUTME: Brevo diagnostic that validates the API key and the configured contact list
// ABOUTME: Used before enabling the lead capture forms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aliza Wellness

//! Brevo connection diagnostics.
//!
//! Usage:
//! ```bash
//! cargo run --bin diagnose-brevo
//! ```

use std::io::{self, Write};

use aliza_ops::config::{load_dotenv, BrevoConfig};
use aliza_ops::diagnostics::brevo::{write_banner, write_missing_key, write_report, BrevoProbe};
use aliza_ops::logging;
use anyhow::Result;
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "diagnose-brevo",
    about = "Aliza Brevo Diagnostics",
    long_about = "Check the Brevo API key, contact count, and optional target list"
)]
struct DiagnoseArgs {
    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = DiagnoseArgs::parse();

    let loaded = load_dotenv();
    logging::init_for_binary("diagnose-brevo", args.verbose)?;
    for path in &loaded {
        info!("Loaded environment from {}", path.display());
    }

    let mut out = io::stdout();
    write_banner(&mut out)?;

    let config = BrevoConfig::from_env();
    let Some(api_key) = config.api_key else {
        write_missing_key(&mut out)?;
        return Ok(());
    };

    let probe = BrevoProbe::new(api_key)?;
    let report = probe.run(config.list_id.as_deref()).await;
    write_report(&mut out, &report)?;
    out.flush()?;
    Ok(())
}
