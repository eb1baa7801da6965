// ABOUTME: Literal demo journal entries covering calm days through multi-symptom days
// ABOUTME: Expands a compact table of morning/evening check-ins into JournalEntry rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aliza Wellness

use aliza_core::errors::{AppError, AppResult};
use aliza_core::models::{EnergyLevel, JournalEntry, SleepQuality, SymptomFlags, TimeOfDay};
use chrono::{NaiveDate, NaiveTime};

/// Every demo date falls in January 2025
const SEED_YEAR: i32 = 2025;
const SEED_MONTH: u32 = 1;

/// Lines printed after a successful run describing what the data covers
pub const COVERAGE_NOTES: [&str; 6] = [
    "Various sleep quality levels (excellent, good, fair, poor)",
    "Different moods (happy, content, frustrated, tired, etc.)",
    "Multiple symptoms (hot flashes, night sweats, dryness, bloating, etc.)",
    "Energy levels from low to high",
    "Concentration difficulties and sleep issues",
    "Hebrew insights for each entry",
];

/// One row of the literal table
struct SeedEntry {
    day: u32,
    time_of_day: TimeOfDay,
    /// Hour and minute the check-in was written (UTC)
    logged_at: (u32, u32),
    sleep_quality: SleepQuality,
    energy_level: EnergyLevel,
    mood: &'static str,
    flags: SymptomFlags,
    insight: &'static str,
}

/// Demo check-ins, morning/evening per day from Jan 15 to Jan 22
///
/// Jan 22 only has a morning entry, so the table holds 15 rows for 8 dates.
fn seed_table() -> [SeedEntry; 15] {
    use EnergyLevel::{High, Low, Medium};
    use SleepQuality::{Excellent, Fair, Good, Poor};
    use TimeOfDay::{Evening, Morning};

    let heavy_night = SymptomFlags::NIGHT_SWEATS
        | SymptomFlags::HOT_FLASHES
        | SymptomFlags::CONCENTRATION_DIFFICULTY
        | SymptomFlags::SLEEP_ISSUES;

    [
        // Good day
        SeedEntry {
            day: 15,
            time_of_day: Morning,
            logged_at: (8, 0),
            sleep_quality: Excellent,
            energy_level: High,
            mood: "happy",
            flags: SymptomFlags::SEXUAL_DESIRE,
            insight: "הרגשתי נהדר היום! שינה טובה ואנרגיה גבוהה",
        },
        SeedEntry {
            day: 15,
            time_of_day: Evening,
            logged_at: (20, 30),
            sleep_quality: Good,
            energy_level: Medium,
            mood: "content",
            flags: SymptomFlags::SEXUAL_DESIRE,
            insight: "יום נהדר הסתיים. הרגשתי מאוזנת ושלווה",
        },
        // Hot flashes and night sweats
        SeedEntry {
            day: 16,
            time_of_day: Morning,
            logged_at: (7, 30),
            sleep_quality: Poor,
            energy_level: Low,
            mood: "frustrated",
            flags: heavy_night | SymptomFlags::WOKE_UP_NIGHT,
            insight: "לילה קשה עם גלי חום והזעות לילה. התקשיתי לישון",
        },
        SeedEntry {
            day: 16,
            time_of_day: Evening,
            logged_at: (19, 45),
            sleep_quality: Poor,
            energy_level: Low,
            mood: "tired",
            flags: heavy_night | SymptomFlags::DRYNESS | SymptomFlags::BLOATING,
            insight: "יום קשה עם גלי חום רבים. הרגשתי עייפה וחסרת אנרגיה",
        },
        // Better, some dryness
        SeedEntry {
            day: 17,
            time_of_day: Morning,
            logged_at: (8, 15),
            sleep_quality: Fair,
            energy_level: Medium,
            mood: "neutral",
            flags: SymptomFlags::DRYNESS | SymptomFlags::SEXUAL_DESIRE,
            insight: "שינה בסדר, אבל יש לי יובש. מצב הרוח בסדר",
        },
        SeedEntry {
            day: 17,
            time_of_day: Evening,
            logged_at: (20, 0),
            sleep_quality: Good,
            energy_level: Medium,
            mood: "content",
            flags: SymptomFlags::DRYNESS | SymptomFlags::SEXUAL_DESIRE,
            insight: "יום טוב יותר. עדיין יש יובש אבל הרגשה כללית טובה",
        },
        // Bloating and pain
        SeedEntry {
            day: 18,
            time_of_day: Morning,
            logged_at: (8, 30),
            sleep_quality: Fair,
            energy_level: Low,
            mood: "uncomfortable",
            flags: SymptomFlags::PAIN | SymptomFlags::BLOATING,
            insight: "הרגשתי נפוחה וכואבת. קשה לי להתרכז",
        },
        SeedEntry {
            day: 18,
            time_of_day: Evening,
            logged_at: (19, 30),
            sleep_quality: Fair,
            energy_level: Low,
            mood: "uncomfortable",
            flags: SymptomFlags::PAIN
                | SymptomFlags::BLOATING
                | SymptomFlags::CONCENTRATION_DIFFICULTY,
            insight: "עדיין נפוחה וכואבת. קשה לי להתרכז בעבודה",
        },
        // After exercise
        SeedEntry {
            day: 19,
            time_of_day: Morning,
            logged_at: (7, 45),
            sleep_quality: Excellent,
            energy_level: High,
            mood: "happy",
            flags: SymptomFlags::SEXUAL_DESIRE,
            insight: "שינה מעולה אחרי אימון אתמול! הרגשה נהדרת",
        },
        SeedEntry {
            day: 19,
            time_of_day: Evening,
            logged_at: (20, 15),
            sleep_quality: Excellent,
            energy_level: High,
            mood: "happy",
            flags: SymptomFlags::SEXUAL_DESIRE,
            insight: "יום נהדר! אימון הבוקר עזר לי להרגיש אנרגטית כל היום",
        },
        // Brain fog
        SeedEntry {
            day: 20,
            time_of_day: Morning,
            logged_at: (8, 0),
            sleep_quality: Fair,
            energy_level: Medium,
            mood: "foggy",
            flags: SymptomFlags::CONCENTRATION_DIFFICULTY,
            insight: "קשה לי להתרכז היום. הרגשה של ערפל במוח",
        },
        SeedEntry {
            day: 20,
            time_of_day: Evening,
            logged_at: (19, 45),
            sleep_quality: Fair,
            energy_level: Medium,
            mood: "foggy",
            flags: SymptomFlags::CONCENTRATION_DIFFICULTY,
            insight: "עדיין קשה להתרכז. הרגשה של ערפל במוח לא עברה",
        },
        // Everything at once
        SeedEntry {
            day: 21,
            time_of_day: Morning,
            logged_at: (7, 30),
            sleep_quality: Poor,
            energy_level: Low,
            mood: "irritable",
            flags: heavy_night
                | SymptomFlags::WOKE_UP_NIGHT
                | SymptomFlags::DRYNESS
                | SymptomFlags::BLOATING,
            insight: "לילה קשה עם גלי חום, הזעות לילה, יובש ונפיחות. הרגשה רעה",
        },
        SeedEntry {
            day: 21,
            time_of_day: Evening,
            logged_at: (20, 0),
            sleep_quality: Poor,
            energy_level: Low,
            mood: "irritable",
            flags: heavy_night | SymptomFlags::DRYNESS | SymptomFlags::BLOATING,
            insight: "יום קשה עם תסמינים רבים. הרגשה של חוסר שליטה",
        },
        // Recovery
        SeedEntry {
            day: 22,
            time_of_day: Morning,
            logged_at: (8, 0),
            sleep_quality: Good,
            energy_level: Medium,
            mood: "hopeful",
            flags: SymptomFlags::SEXUAL_DESIRE,
            insight: "הרגשה טובה יותר היום. התסמינים פחתו ואני מרגישה יותר אופטימית",
        },
    ]
}

impl SeedEntry {
    fn to_entry(&self, user_id: &str) -> AppResult<JournalEntry> {
        let date = NaiveDate::from_ymd_opt(SEED_YEAR, SEED_MONTH, self.day).ok_or_else(|| {
            AppError::internal(format!("invalid seed day {SEED_YEAR}-{SEED_MONTH}-{}", self.day))
        })?;
        let (hour, minute) = self.logged_at;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| AppError::internal(format!("invalid seed time {hour}:{minute}")))?;
        let logged_at = date.and_time(time).and_utc();

        let mut entry = JournalEntry {
            user_id: user_id.to_owned(),
            date,
            time_of_day: self.time_of_day,
            sleep_quality: self.sleep_quality,
            woke_up_night: false,
            night_sweats: false,
            energy_level: self.energy_level,
            mood: self.mood.to_owned(),
            hot_flashes: false,
            dryness: false,
            pain: false,
            bloating: false,
            concentration_difficulty: false,
            sleep_issues: false,
            sexual_desire: false,
            daily_insight: self.insight.to_owned(),
            created_at: logged_at,
            updated_at: logged_at,
        };
        entry.set_flags(self.flags);
        Ok(entry)
    }
}

/// The demo entries owned by `user_id`, in chronological order
///
/// # Errors
///
/// Returns an internal error if a table row holds an impossible date or time
pub fn demo_entries(user_id: &str) -> AppResult<Vec<JournalEntry>> {
    seed_table()
        .iter()
        .map(|seed| seed.to_entry(user_id))
        .collect()
}
