// ABOUTME: Bit set over the boolean flags of a journal entry
// ABOUTME: Defines SymptomFlags and the ordered list of symptoms shown in reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aliza Wellness

use bitflags::bitflags;

bitflags! {
    /// Every boolean column of a journal entry, packed for compact literal tables
    ///
    /// Sleep disturbances and `SEXUAL_DESIRE` live here too so a single value
    /// describes all flags of a row. Only [`REPORTED_SYMPTOMS`] count as symptoms.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct SymptomFlags: u16 {
        /// Woke up during the night
        const WOKE_UP_NIGHT = 1 << 0;
        /// Night sweats
        const NIGHT_SWEATS = 1 << 1;
        /// Hot flashes
        const HOT_FLASHES = 1 << 2;
        /// Dryness
        const DRYNESS = 1 << 3;
        /// Pain
        const PAIN = 1 << 4;
        /// Bloating
        const BLOATING = 1 << 5;
        /// Difficulty concentrating
        const CONCENTRATION_DIFFICULTY = 1 << 6;
        /// Sleep issues
        const SLEEP_ISSUES = 1 << 7;
        /// Sexual desire present
        const SEXUAL_DESIRE = 1 << 8;
    }
}

/// A flag that reports treat as a symptom, with its column and display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportedSymptom {
    /// Flag in the entry's bit set
    pub flag: SymptomFlags,
    /// Column name in `daily_entries` and key in frequency maps
    pub key: &'static str,
    /// Human label used in sample listings
    pub label: &'static str,
}

/// Symptoms in report order
pub const REPORTED_SYMPTOMS: [ReportedSymptom; 7] = [
    ReportedSymptom {
        flag: SymptomFlags::HOT_FLASHES,
        key: "hot_flashes",
        label: "hot flashes",
    },
    ReportedSymptom {
        flag: SymptomFlags::NIGHT_SWEATS,
        key: "night_sweats",
        label: "night sweats",
    },
    ReportedSymptom {
        flag: SymptomFlags::DRYNESS,
        key: "dryness",
        label: "dryness",
    },
    ReportedSymptom {
        flag: SymptomFlags::PAIN,
        key: "pain",
        label: "pain",
    },
    ReportedSymptom {
        flag: SymptomFlags::BLOATING,
        key: "bloating",
        label: "bloating",
    },
    ReportedSymptom {
        flag: SymptomFlags::CONCENTRATION_DIFFICULTY,
        key: "concentration_difficulty",
        label: "concentration issues",
    },
    ReportedSymptom {
        flag: SymptomFlags::SLEEP_ISSUES,
        key: "sleep_issues",
        label: "sleep issues",
    },
];

impl SymptomFlags {
    /// Labels of the reported symptoms present in this set, in report order
    #[must_use]
    pub fn reported_labels(self) -> Vec<&'static str> {
        REPORTED_SYMPTOMS
            .iter()
            .filter(|symptom| self.contains(symptom.flag))
            .map(|symptom| symptom.label)
            .collect()
    }

    /// Whether any reported symptom is present
    #[must_use]
    pub fn has_reported_symptom(self) -> bool {
        REPORTED_SYMPTOMS
            .iter()
            .any(|symptom| self.contains(symptom.flag))
    }
}
