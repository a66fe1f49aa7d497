use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::models::{DatedEntry, TrackingData};

/// Look-back window for analytics views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[default]
    #[serde(rename = "7")]
    Week,
    #[serde(rename = "14")]
    Fortnight,
    #[serde(rename = "30")]
    Month,
    #[serde(rename = "all")]
    All,
}

impl TimeRange {
    /// Days walked back from today, inclusive. "All" is capped at a year.
    pub fn days(self) -> i64 {
        match self {
            TimeRange::Week => 7,
            TimeRange::Fortnight => 14,
            TimeRange::Month => 30,
            TimeRange::All => 365,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeRange::Week => "7",
            TimeRange::Fortnight => "14",
            TimeRange::Month => "30",
            TimeRange::All => "all",
        }
    }
}

impl FromStr for TimeRange {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "7" => Ok(TimeRange::Week),
            "14" => Ok(TimeRange::Fortnight),
            "30" => Ok(TimeRange::Month),
            "all" => Ok(TimeRange::All),
            other => Err(TrackerError::InvalidRange(other.to_string())),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logged entries within `range` days ending today, oldest first.
/// Days without an entry are skipped, not zero-filled.
pub fn select_range(data: &TrackingData, range: TimeRange, today: NaiveDate) -> Vec<DatedEntry<'_>> {
    let mut results: Vec<DatedEntry<'_>> = (0..range.days())
        .map(|offset| today - Duration::days(offset))
        .filter_map(|date| data.get(&date).map(|entry| DatedEntry::new(date, entry)))
        .collect();
    results.reverse();
    results
}

pub fn weekly_entries(data: &TrackingData, today: NaiveDate) -> Vec<DatedEntry<'_>> {
    select_range(data, TimeRange::Week, today)
}

/// Every logged entry, oldest first.
pub fn all_entries(data: &TrackingData) -> Vec<DatedEntry<'_>> {
    data.iter()
        .map(|(date, entry)| DatedEntry::new(*date, entry))
        .collect()
}
