use chrono::NaiveDate;

use crate::models::{DailyEntry, DatedEntry, TrackingData, WellnessScores};
use crate::services::range::{all_entries, weekly_entries};

#[derive(Debug, Default, Clone, Copy)]
struct Totals {
    score: f64,
    count: u32,
}

impl Totals {
    /// Non-finite components are skipped rather than counted as zero.
    fn accumulate(&mut self, component: f64) {
        if component.is_finite() {
            self.score += component;
            self.count += 1;
        }
    }

    fn extend(&mut self, components: impl IntoIterator<Item = f64>) {
        for component in components {
            self.accumulate(component);
        }
    }

    fn average(&self) -> u32 {
        if self.count == 0 {
            return 0;
        }
        (self.score / self.count as f64 * 100.0).round() as u32
    }
}

fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        return value;
    }
    value.clamp(0.0, 1.0)
}

fn indicator(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}

fn physical(entry: &DailyEntry) -> [f64; 4] {
    [
        clamp01(entry.sleep.hours / 8.0),
        clamp01(entry.water / 8.0),
        indicator(entry.exercise.completed),
        clamp01(entry.steps / 8000.0),
    ]
}

fn mental(entry: &DailyEntry) -> [f64; 4] {
    [
        1.0 - clamp01(entry.stress / 10.0),
        clamp01(entry.productivity / 10.0),
        clamp01(entry.reading / 20.0),
        1.0 - clamp01(entry.screen_time / 8.0),
    ]
}

fn emotional(entry: &DailyEntry) -> [f64; 3] {
    [
        clamp01(entry.mood / 10.0),
        indicator(entry.social.connected),
        indicator(entry.has_gratitude()),
    ]
}

fn spiritual(entry: &DailyEntry) -> [f64; 3] {
    [
        clamp01(entry.meditation / 15.0),
        indicator(entry.has_gratitude()),
        indicator(entry.has_reading_content()),
    ]
}

/// Four 0-100 dimension scores.
///
/// Each dimension averages its normalized components over every entry at
/// once, so the divisor is the total number of contributing components and
/// not a per-entry mean.
pub fn wellness_scores(entries: &[DatedEntry<'_>]) -> WellnessScores {
    if entries.is_empty() {
        return WellnessScores::default();
    }

    let mut physical_totals = Totals::default();
    let mut mental_totals = Totals::default();
    let mut emotional_totals = Totals::default();
    let mut spiritual_totals = Totals::default();

    for DatedEntry { entry, .. } in entries {
        physical_totals.extend(physical(entry));
        mental_totals.extend(mental(entry));
        emotional_totals.extend(emotional(entry));
        spiritual_totals.extend(spiritual(entry));
    }

    tracing::debug!(
        entries = entries.len(),
        physical_components = physical_totals.count,
        "Computed wellness dimensions"
    );

    WellnessScores {
        physical: physical_totals.average(),
        mental: mental_totals.average(),
        emotional: emotional_totals.average(),
        spiritual: spiritual_totals.average(),
    }
}

/// Scores for the last week, or for the whole history when the week is empty.
pub fn wellness_breakdown(data: &TrackingData, today: NaiveDate) -> WellnessScores {
    let weekly = weekly_entries(data, today);
    if weekly.is_empty() {
        wellness_scores(&all_entries(data))
    } else {
        wellness_scores(&weekly)
    }
}
