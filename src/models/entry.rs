use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::meal::{Meal, MediaItem};

/// Normalized entries keyed by calendar date.
pub type TrackingData = BTreeMap<NaiveDate, DailyEntry>;

/// Entries exactly as the persistence layer hands them over: ISO date string
/// to an arbitrary (possibly partial or malformed) document.
pub type RawTrackingData = BTreeMap<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEntry {
    pub caffeine: f64,
    pub water: f64,
    pub exercise: Exercise,
    pub sleep: Sleep,
    pub steps: f64,
    pub meals: Vec<Meal>,
    pub mood: f64,
    pub stress: f64,
    pub meditation: f64,
    pub reading: f64,
    pub reading_content: String,
    pub productivity: f64,
    pub screen_time: f64,
    pub social: Social,
    pub meal_quality: f64,
    pub gratitude: String,
    pub notes: String,
    pub media_entries: Vec<MediaItem>,
    pub quick_metric_updated_at: QuickMetricTimestamps,
}

impl Default for DailyEntry {
    fn default() -> Self {
        Self {
            caffeine: 0.0,
            water: 0.0,
            exercise: Exercise::default(),
            sleep: Sleep::default(),
            steps: 0.0,
            meals: Vec::new(),
            mood: 0.0,
            stress: 5.0,
            meditation: 0.0,
            reading: 0.0,
            reading_content: String::new(),
            productivity: 0.0,
            screen_time: 0.0,
            social: Social::default(),
            meal_quality: 0.0,
            gratitude: String::new(),
            notes: String::new(),
            media_entries: Vec::new(),
            quick_metric_updated_at: QuickMetricTimestamps::default(),
        }
    }
}

impl DailyEntry {
    pub fn has_gratitude(&self) -> bool {
        !self.gratitude.is_empty()
    }

    pub fn has_reading_content(&self) -> bool {
        !self.reading_content.is_empty()
    }

    pub fn quick_metric(&self, metric: QuickMetric) -> f64 {
        match metric {
            QuickMetric::Water => self.water,
            QuickMetric::Steps => self.steps,
            QuickMetric::Caffeine => self.caffeine,
            QuickMetric::ScreenTime => self.screen_time,
        }
    }

    pub(crate) fn quick_metric_mut(&mut self, metric: QuickMetric) -> &mut f64 {
        match metric {
            QuickMetric::Water => &mut self.water,
            QuickMetric::Steps => &mut self.steps,
            QuickMetric::Caffeine => &mut self.caffeine,
            QuickMetric::ScreenTime => &mut self.screen_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub completed: bool,
    #[serde(rename = "type")]
    pub kind: String,
    pub duration: f64,
}

impl Default for Exercise {
    fn default() -> Self {
        Self {
            completed: false,
            kind: "Gym".into(),
            duration: 30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sleep {
    /// "HH:MM" or empty
    pub sleep_time: String,
    /// "HH:MM" or empty
    pub wake_time: String,
    pub quality: f64,
    /// Derived from `sleep_time`/`wake_time`, never read back from storage.
    pub hours: f64,
}

impl Default for Sleep {
    fn default() -> Self {
        Self {
            sleep_time: "22:00".into(),
            wake_time: "06:00".into(),
            quality: 0.0,
            hours: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Social {
    pub connected: bool,
    pub activity: String,
}

/// Metrics adjustable from the quick board; each remembers when it was last touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuickMetric {
    Water,
    Steps,
    Caffeine,
    ScreenTime,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickMetricTimestamps {
    pub water: Option<DateTime<Utc>>,
    pub steps: Option<DateTime<Utc>>,
    pub caffeine: Option<DateTime<Utc>>,
    pub screen_time: Option<DateTime<Utc>>,
}

impl QuickMetricTimestamps {
    pub fn get(&self, metric: QuickMetric) -> Option<DateTime<Utc>> {
        match metric {
            QuickMetric::Water => self.water,
            QuickMetric::Steps => self.steps,
            QuickMetric::Caffeine => self.caffeine,
            QuickMetric::ScreenTime => self.screen_time,
        }
    }

    pub fn touch(&mut self, metric: QuickMetric, at: DateTime<Utc>) {
        let slot = match metric {
            QuickMetric::Water => &mut self.water,
            QuickMetric::Steps => &mut self.steps,
            QuickMetric::Caffeine => &mut self.caffeine,
            QuickMetric::ScreenTime => &mut self.screen_time,
        };
        *slot = Some(at);
    }
}

/// An entry paired with its date key, as produced by the range selector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatedEntry<'a> {
    pub date: NaiveDate,
    pub entry: &'a DailyEntry,
}

impl<'a> DatedEntry<'a> {
    pub fn new(date: NaiveDate, entry: &'a DailyEntry) -> Self {
        Self { date, entry }
    }
}
