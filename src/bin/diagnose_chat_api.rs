// ABOUTME: Chat API diagnostic that checks configuration and probes the local chat route
// ABOUTME: Sends one test message and explains whatever comes back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aliza Wellness

//! Chat API diagnostics.
//!
//! Always exits 0: the point is the printed report, not the status code.
//!
//! Usage:
//! ```bash
//! cargo run --bin diagnose-chat-api
//! cargo run --bin diagnose-chat-api -- --url http://localhost:3001/api/chat
//! ```

use std::io::{self, Write};
use std::time::Duration;

use aliza_core::constants::{chat, env_vars};
use aliza_ops::config::{load_dotenv, EnvironmentReport};
use aliza_ops::diagnostics::chat::{
    write_checklist, write_probe_banner, write_probe_result, ChatProbe, ChatProbeRequest,
    NEXT_STEPS, TROUBLESHOOTING_STEPS,
};
use aliza_ops::diagnostics::write_environment_report;
use aliza_ops::logging;
use anyhow::Result;
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "diagnose-chat-api",
    about = "Aliza Chat API Diagnostics",
    long_about = "Check the chat configuration and send one test message to the chat API"
)]
struct DiagnoseArgs {
    /// Chat endpoint to probe
    #[arg(long, default_value = chat::DEFAULT_API_URL)]
    url: String,

    /// Message to send
    #[arg(long, default_value = chat::TEST_MESSAGE)]
    message: String,

    /// Give up after this many seconds
    #[arg(long, default_value_t = chat::REQUEST_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = DiagnoseArgs::parse();

    let loaded = load_dotenv();
    logging::init_for_binary("diagnose-chat-api", args.verbose)?;
    for path in &loaded {
        info!("Loaded environment from {}", path.display());
    }

    let mut out = io::stdout();

    writeln!(out, "Tool Aliza Chat Diagnostics")?;
    writeln!(out)?;
    let report = EnvironmentReport::from_env(&env_vars::CHAT_REQUIRED);
    write_environment_report(&mut out, &report)?;
    writeln!(out)?;

    let request = ChatProbeRequest {
        message: args.message,
        ..ChatProbeRequest::default()
    };
    let probe = ChatProbe::new(args.url, Duration::from_secs(args.timeout_secs))?;
    write_probe_banner(&mut out, probe.url(), &request)?;
    out.flush()?;

    let result = probe.run(&request).await;
    write_probe_result(&mut out, &result)?;

    write_checklist(&mut out, "Tool Troubleshooting Steps:", &TROUBLESHOOTING_STEPS)?;
    write_checklist(&mut out, "Docs Next Steps:", &NEXT_STEPS)?;
    out.flush()?;
    Ok(())
}
