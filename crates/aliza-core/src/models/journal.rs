// ABOUTME: Journal entry row model with ordered sleep and energy scales
// ABOUTME: Serializes to the daily_entries column set used by store, export, and preview
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aliza Wellness

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::symptoms::SymptomFlags;

/// Part of the day an entry describes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    /// Morning check-in
    Morning,
    /// Evening check-in
    Evening,
}

impl TimeOfDay {
    /// Column value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Evening => "evening",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-rated sleep quality, ordered from worst to best
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum SleepQuality {
    /// Poor
    Poor,
    /// Fair
    Fair,
    /// Good
    Good,
    /// Excellent
    Excellent,
}

impl SleepQuality {
    /// Column value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }
}

impl fmt::Display for SleepQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-rated energy level, ordered from lowest to highest
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    /// Low
    Low,
    /// Medium
    Medium,
    /// High
    High,
}

impl EnergyLevel {
    /// Column value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One daily self-report
///
/// Logically scoped to `(user_id, date, time_of_day)`, but nothing here
/// enforces uniqueness; inserting the same value twice creates two rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JournalEntry {
    /// Owning user (a real account id or a `mock-user-` placeholder)
    ///
    /// Mock documents name the owner once at the top level, so entries read
    /// from them may omit this and the timestamps.
    #[serde(default)]
    pub user_id: String,
    /// Calendar date
    pub date: NaiveDate,
    /// Morning or evening
    pub time_of_day: TimeOfDay,
    /// Sleep quality
    pub sleep_quality: SleepQuality,
    /// Woke up during the night
    pub woke_up_night: bool,
    /// Night sweats
    pub night_sweats: bool,
    /// Energy level
    pub energy_level: EnergyLevel,
    /// Free-form mood tag
    pub mood: String,
    /// Hot flashes
    pub hot_flashes: bool,
    /// Dryness
    pub dryness: bool,
    /// Pain
    pub pain: bool,
    /// Bloating
    pub bloating: bool,
    /// Difficulty concentrating
    pub concentration_difficulty: bool,
    /// Sleep issues
    pub sleep_issues: bool,
    /// Sexual desire present
    pub sexual_desire: bool,
    /// Narrative text
    pub daily_insight: String,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Boolean columns as a bit set
    #[must_use]
    pub fn flags(&self) -> SymptomFlags {
        let mut flags = SymptomFlags::empty();
        flags.set(SymptomFlags::WOKE_UP_NIGHT, self.woke_up_night);
        flags.set(SymptomFlags::NIGHT_SWEATS, self.night_sweats);
        flags.set(SymptomFlags::HOT_FLASHES, self.hot_flashes);
        flags.set(SymptomFlags::DRYNESS, self.dryness);
        flags.set(SymptomFlags::PAIN, self.pain);
        flags.set(SymptomFlags::BLOATING, self.bloating);
        flags.set(
            SymptomFlags::CONCENTRATION_DIFFICULTY,
            self.concentration_difficulty,
        );
        flags.set(SymptomFlags::SLEEP_ISSUES, self.sleep_issues);
        flags.set(SymptomFlags::SEXUAL_DESIRE, self.sexual_desire);
        flags
    }

    /// Overwrite every boolean column from a bit set
    pub fn set_flags(&mut self, flags: SymptomFlags) {
        self.woke_up_night = flags.contains(SymptomFlags::WOKE_UP_NIGHT);
        self.night_sweats = flags.contains(SymptomFlags::NIGHT_SWEATS);
        self.hot_flashes = flags.contains(SymptomFlags::HOT_FLASHES);
        self.dryness = flags.contains(SymptomFlags::DRYNESS);
        self.pain = flags.contains(SymptomFlags::PAIN);
        self.bloating = flags.contains(SymptomFlags::BLOATING);
        self.concentration_difficulty = flags.contains(SymptomFlags::CONCENTRATION_DIFFICULTY);
        self.sleep_issues = flags.contains(SymptomFlags::SLEEP_ISSUES);
        self.sexual_desire = flags.contains(SymptomFlags::SEXUAL_DESIRE);
    }

    /// Comma-separated reported symptoms, or `none`
    #[must_use]
    pub fn symptom_summary(&self) -> String {
        let labels = self.flags().reported_labels();
        if labels.is_empty() {
            "none".to_owned()
        } else {
            labels.join(", ")
        }
    }
}
