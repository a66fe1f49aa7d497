use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub streak: u32,
    pub longest_streak: u32,
    pub week_completion: u32,
    pub total_days: usize,
}

/// Composite 0-100 scores. Derived on demand, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WellnessScores {
    pub physical: u32,
    pub mental: u32,
    pub emotional: u32,
    pub spiritual: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub label: String,
    pub day_of_month: u32,
    pub is_today: bool,
    /// Habit icons earned that day, or "—" when nothing was logged.
    pub icons: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekCalendar {
    pub days: Vec<CalendarDay>,
    pub completion: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WeekHighlights {
    pub highlights: Vec<String>,
    pub focus: Vec<String>,
}
