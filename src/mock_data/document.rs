// ABOUTME: Mock journal document types with order-preserving count maps
// ABOUTME: Loads and saves the JSON document and derives summary statistics from entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aliza Wellness

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use aliza_core::errors::{AppError, AppResult, ErrorCode};
use aliza_core::models::{
    EnergyLevel, JournalEntry, SleepQuality, SymptomFlags, TimeOfDay, REPORTED_SYMPTOMS,
};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Label-to-count map that keeps document order
///
/// Serialized as a plain JSON object. Reports print keys in the order the
/// document lists them, so a sorted or hashed map would not do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distribution(Vec<(String, u64)>);

impl Distribution {
    /// Empty distribution
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Set `key` to `count`, keeping its original position if present
    pub fn insert(&mut self, key: impl Into<String>, count: u64) {
        let key = key.into();
        if let Some(slot) = self.0.iter_mut().find(|(existing, _)| *existing == key) {
            slot.1 = count;
        } else {
            self.0.push((key, count));
        }
    }

    /// Add one to `key`, appending it at the end if new
    pub fn increment(&mut self, key: &str) {
        if let Some(slot) = self.0.iter_mut().find(|(existing, _)| existing == key) {
            slot.1 += 1;
        } else {
            self.0.push((key.to_owned(), 1));
        }
    }

    /// Count for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<u64> {
        self.0
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, count)| *count)
    }

    /// Entries in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(key, count)| (key.as_str(), *count))
    }

    /// Number of keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no keys
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for Distribution {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut distribution = Self::new();
        for (key, count) in iter {
            distribution.insert(key, count);
        }
        distribution
    }
}

impl Serialize for Distribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, count) in &self.0 {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

struct DistributionVisitor;

impl<'de> Visitor<'de> for DistributionVisitor {
    type Value = Distribution;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of labels to non-negative counts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut distribution = Distribution::new();
        while let Some((key, count)) = access.next_entry::<String, u64>()? {
            distribution.insert(key, count);
        }
        Ok(distribution)
    }
}

impl<'de> Deserialize<'de> for Distribution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DistributionVisitor)
    }
}

/// Precomputed statistics over the document's entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockDataSummary {
    /// Entries per sleep quality
    #[serde(default)]
    pub sleep_quality_distribution: Distribution,
    /// Entries per mood tag
    #[serde(default)]
    pub mood_distribution: Distribution,
    /// Entries reporting each symptom
    #[serde(default)]
    pub symptoms_frequency: Distribution,
    /// Entries per energy level
    #[serde(default)]
    pub energy_levels: Distribution,
    /// Free-text observations
    #[serde(default)]
    pub interesting_patterns: Vec<String>,
}

impl MockDataSummary {
    /// Derive the summary from entries
    ///
    /// Scales are listed best first, moods in first-seen order, symptoms in
    /// report order (including symptoms nobody reported).
    #[must_use]
    pub fn from_entries(entries: &[JournalEntry]) -> Self {
        let mut sleep_quality_distribution = Distribution::new();
        for quality in [
            SleepQuality::Excellent,
            SleepQuality::Good,
            SleepQuality::Fair,
            SleepQuality::Poor,
        ] {
            let count = entries.iter().filter(|e| e.sleep_quality == quality).count();
            if count > 0 {
                sleep_quality_distribution.insert(quality.as_str(), count as u64);
            }
        }

        let mut energy_levels = Distribution::new();
        for level in [EnergyLevel::High, EnergyLevel::Medium, EnergyLevel::Low] {
            let count = entries.iter().filter(|e| e.energy_level == level).count();
            if count > 0 {
                energy_levels.insert(level.as_str(), count as u64);
            }
        }

        let mut mood_distribution = Distribution::new();
        for entry in entries {
            mood_distribution.increment(&entry.mood);
        }

        let symptoms_frequency = REPORTED_SYMPTOMS
            .iter()
            .map(|symptom| {
                let count = entries
                    .iter()
                    .filter(|e| e.flags().contains(symptom.flag))
                    .count();
                (symptom.key, count as u64)
            })
            .collect();

        Self {
            sleep_quality_distribution,
            mood_distribution,
            symptoms_frequency,
            energy_levels,
            interesting_patterns: interesting_patterns(entries),
        }
    }
}

fn interesting_patterns(entries: &[JournalEntry]) -> Vec<String> {
    if entries.is_empty() {
        return Vec::new();
    }
    let mut patterns = Vec::new();

    let clear = entries
        .iter()
        .filter(|e| !e.flags().has_reported_symptom())
        .count();
    patterns.push(format!(
        "{clear} of {} entries report no symptoms at all",
        entries.len()
    ));

    let poor_sleep: Vec<&JournalEntry> = entries
        .iter()
        .filter(|e| e.sleep_quality == SleepQuality::Poor)
        .collect();
    if !poor_sleep.is_empty() {
        let with_hot_flashes = poor_sleep.iter().filter(|e| e.hot_flashes).count();
        patterns.push(format!(
            "Hot flashes appear in {with_hot_flashes} of {} poor-sleep entries",
            poor_sleep.len()
        ));
    }

    let excellent_high = entries
        .iter()
        .filter(|e| e.sleep_quality == SleepQuality::Excellent)
        .filter(|e| e.energy_level == EnergyLevel::High)
        .count();
    if excellent_high > 0 {
        patterns.push(format!(
            "Excellent sleep comes with high energy in {excellent_high} entries"
        ));
    }

    let mut by_date: BTreeMap<_, (Option<SymptomFlags>, Option<SymptomFlags>)> = BTreeMap::new();
    for entry in entries {
        let slot = by_date.entry(entry.date).or_default();
        match entry.time_of_day {
            TimeOfDay::Morning => slot.0 = Some(entry.flags()),
            TimeOfDay::Evening => slot.1 = Some(entry.flags()),
        }
    }
    let unpaired = by_date
        .values()
        .filter(|(morning, evening)| morning.is_none() || evening.is_none())
        .count();
    let persisted = by_date
        .values()
        .filter_map(|pair| match pair {
            (Some(morning), Some(evening)) => Some((*morning, *evening)),
            _ => None,
        })
        .filter(|(morning, evening)| {
            morning.has_reported_symptom() && evening.has_reported_symptom()
        })
        .count();
    patterns.push(format!(
        "Morning symptoms persist into the evening on {persisted} of {} days",
        by_date.len() - unpaired
    ));
    if unpaired > 0 {
        patterns.push(format!("{unpaired} day(s) have only one check-in"));
    }

    patterns
}

/// The mock journal document
///
/// Every key is optional when reading so partial documents still produce a
/// partial report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockJournalDocument {
    /// Owner of the entries
    #[serde(default)]
    pub user_email: String,
    /// Declared number of entries
    #[serde(default)]
    pub entries_count: usize,
    /// Human-readable date span
    #[serde(default)]
    pub date_range: String,
    /// Summary statistics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<MockDataSummary>,
    /// The entries themselves
    #[serde(default)]
    pub entries: Vec<JournalEntry>,
}

impl MockJournalDocument {
    /// Build a document, summary included, from entries
    #[must_use]
    pub fn from_entries(user_email: impl Into<String>, entries: Vec<JournalEntry>) -> Self {
        let first = entries.iter().map(|e| e.date).min();
        let last = entries.iter().map(|e| e.date).max();
        let date_range = match (first, last) {
            (Some(first), Some(last)) => format!("{first} to {last}"),
            _ => String::new(),
        };

        Self {
            user_email: user_email.into(),
            entries_count: entries.len(),
            date_range,
            summary: Some(MockDataSummary::from_entries(&entries)),
            entries,
        }
    }
}

/// Read and parse a document
///
/// # Errors
///
/// Returns `ResourceNotFound` if the file does not exist, `StorageError` if it
/// cannot be read, and `SerializationError` if it is not a valid document.
pub fn load_document(path: &Path) -> AppResult<MockJournalDocument> {
    let raw = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            AppError::not_found(path.display().to_string()).with_source(e)
        } else {
            AppError::from(e)
        }
    })?;

    serde_json::from_str(&raw).map_err(|e| {
        AppError::new(
            ErrorCode::SerializationError,
            format!("Error parsing JSON: {e}"),
        )
        .with_source(e)
    })
}

/// Write a document as pretty JSON, non-ASCII text kept as is
///
/// # Errors
///
/// Returns an error if serialization or the write fails
pub fn save_document(path: &Path, document: &MockJournalDocument) -> AppResult<()> {
    let mut json = serde_json::to_string_pretty(document)?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}
