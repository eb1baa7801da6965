// ABOUTME: Console report for a mock journal document
// ABOUTME: Writes distributions, patterns, sample entries, and next steps to any writer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aliza Wellness

use std::io::{self, Write};

use super::document::{Distribution, MockJournalDocument};

/// Ways to deliver the demo data, printed after the report
pub const NEXT_STEPS: [&str; 4] = [
    "Insert into Supabase: seed-journal-entries",
    "Rehearse without credentials: seed-journal-entries --dry-run",
    "Regenerate this document: seed-journal-entries --export mock_journal_data.json",
    "Import the JSON document directly: mock_journal_data.json",
];

fn write_distribution(
    out: &mut impl Write,
    title: &str,
    distribution: &Distribution,
) -> io::Result<()> {
    writeln!(out, "{title}:")?;
    for (label, count) in distribution.iter() {
        writeln!(out, "   {label}: {count} entries")?;
    }
    writeln!(out)
}

/// Header plus every summary section the document carries
///
/// # Errors
///
/// Returns an error if writing fails
pub fn write_data_summary(out: &mut impl Write, document: &MockJournalDocument) -> io::Result<()> {
    writeln!(out, "Data Mock Journal Data Summary:")?;
    writeln!(out, "   User: {}", document.user_email)?;
    writeln!(out, "   Entries: {}", document.entries_count)?;
    writeln!(out, "   Date Range: {}", document.date_range)?;
    writeln!(out)?;

    let Some(summary) = &document.summary else {
        return Ok(());
    };

    write_distribution(
        out,
        "Sleep Quality Distribution",
        &summary.sleep_quality_distribution,
    )?;
    write_distribution(out, "Mood Distribution", &summary.mood_distribution)?;
    write_distribution(out, "Symptoms Frequency", &summary.symptoms_frequency)?;
    write_distribution(out, "Energy Levels", &summary.energy_levels)?;

    writeln!(out, "Interesting Patterns:")?;
    for pattern in &summary.interesting_patterns {
        writeln!(out, "   • {pattern}")?;
    }
    writeln!(out)
}

/// The first `count` entries with their derived symptom list
///
/// Writes nothing at all when the document has no entries or `count` is zero.
///
/// # Errors
///
/// Returns an error if writing fails
pub fn write_sample_entries(
    out: &mut impl Write,
    document: &MockJournalDocument,
    count: usize,
) -> io::Result<()> {
    if document.entries.is_empty() || count == 0 {
        return Ok(());
    }

    writeln!(out, "Sample Entries (first {count}):")?;
    for (index, entry) in document.entries.iter().take(count).enumerate() {
        writeln!(out)?;
        writeln!(
            out,
            "   Entry {}: {} {}",
            index + 1,
            entry.date,
            entry.time_of_day
        )?;
        writeln!(
            out,
            "   Sleep: {} | Mood: {} | Energy: {}",
            entry.sleep_quality, entry.mood, entry.energy_level
        )?;
        writeln!(out, "   Symptoms: {}", entry.symptom_summary())?;
        writeln!(out, "   Insight: {}", entry.daily_insight)?;
    }
    Ok(())
}

/// Footer listing the delivery options
///
/// # Errors
///
/// Returns an error if writing fails
pub fn write_next_steps(out: &mut impl Write, document: &MockJournalDocument) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out, "Docs Next Steps:")?;
    for (index, step) in NEXT_STEPS.iter().enumerate() {
        writeln!(out, "{}. {step}", index + 1)?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Tip All options carry the same {} journal entries!",
        document.entries_count
    )
}

/// Summary, samples, and footer in one pass
///
/// # Errors
///
/// Returns an error if writing fails
pub fn write_report(
    out: &mut impl Write,
    document: &MockJournalDocument,
    sample_count: usize,
) -> io::Result<()> {
    write_data_summary(out, document)?;
    write_sample_entries(out, document, sample_count)?;
    write_next_steps(out, document)
}
