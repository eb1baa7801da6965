// ABOUTME: Service diagnostics for operators: configuration presence and endpoint probes
// ABOUTME: Hosts the chat API probe, the Brevo probe, and the environment report printer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aliza Wellness

//! # Diagnostics
//!
//! Each probe makes exactly one attempt per call, never retries, and never
//! returns an error to the caller: every failure is classified into an outcome
//! value that the binaries print with a remediation hint.

/// Brevo contacts API probe
pub mod brevo;
/// Chat API probe and outcome classification
pub mod chat;

use std::io::{self, Write};

use aliza_core::constants::env_files;

use crate::config::EnvironmentReport;

/// Section rule used by every diagnostic
pub(crate) fn rule() -> String {
    "=".repeat(50)
}

/// Print the configuration presence report
///
/// # Errors
///
/// Returns an error if writing fails
pub fn write_environment_report(
    out: &mut impl Write,
    report: &EnvironmentReport,
) -> io::Result<()> {
    writeln!(out, "Checking Environment Variables...")?;
    writeln!(out, "{}", rule())?;

    for status in &report.variables {
        match &status.masked {
            Some(masked) => writeln!(out, "Success {}: {masked}", status.name)?,
            None => writeln!(out, "Error {}: Not set", status.name)?,
        }
    }
    writeln!(out)?;

    if report.env_local_present {
        writeln!(out, "Success {} file exists", env_files::ENV_LOCAL)
    } else {
        writeln!(out, "Error {} file not found", env_files::ENV_LOCAL)?;
        writeln!(
            out,
            "Tip Create {} with required variables",
            env_files::ENV_LOCAL
        )
    }
}
