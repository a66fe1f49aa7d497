use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::models::{
    Benchmark, DashboardStats, Insight, ReminderPrompt, TrackingData, WeekCalendar,
    WeekHighlights, WellnessScores,
};
use crate::services::benchmarks::personal_benchmarks;
use crate::services::insights::{achievements, insights, week_calendar, week_highlights};
use crate::services::meals::{meal_suggestions, MealSuggestion};
use crate::services::range::{select_range, weekly_entries, TimeRange};
use crate::services::reminders::reminder_prompts;
use crate::services::streaks::dashboard_stats;
use crate::services::wellness::wellness_breakdown;

pub const QUOTES: [&str; 10] = [
    "Small daily improvements are the key to staggering long-term results.",
    "Your health is an investment, not an expense.",
    "Take care of your body. It's the only place you have to live.",
    "The greatest wealth is health.",
    "Progress, not perfection.",
    "Every day is a chance to begin again.",
    "Your future self will thank you.",
    "Consistency is key to lasting change.",
    "Believe in yourself and all that you are.",
    "One day or day one. You decide.",
];

pub const GOALS: [&str; 5] = [
    "• Water: 8 glasses daily",
    "• Sleep: 7-9 hours nightly",
    "• Exercise: 30 minutes, 3-4x weekly",
    "• Reading: 15 minutes daily",
    "• Meditation: 10 minutes daily",
];

/// Benchmarks look at a fixed two-week window regardless of the selected range.
pub const BENCHMARK_RANGE: TimeRange = TimeRange::Fortnight;

pub fn random_quote<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    QUOTES.choose(rng).copied().unwrap_or(QUOTES[0])
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummary {
    pub calendar: WeekCalendar,
    #[serde(flatten)]
    pub highlights: WeekHighlights,
}

/// Everything the dashboard shows, as one serializable snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessReport {
    pub user_name: String,
    pub today: NaiveDate,
    pub range: TimeRange,
    pub dashboard: DashboardStats,
    pub entries_in_range: usize,
    pub wellness: WellnessScores,
    pub benchmarks: Vec<Benchmark>,
    pub achievements: Vec<String>,
    pub insights: Vec<Insight>,
    pub reminders: Vec<ReminderPrompt>,
    pub weekly_summary: WeeklySummary,
    pub meal_suggestions: Vec<MealSuggestion>,
    pub goals: Vec<&'static str>,
    pub quote: &'static str,
}

pub fn build_report<R: Rng + ?Sized>(
    user_name: &str,
    data: &TrackingData,
    range: TimeRange,
    today: NaiveDate,
    rng: &mut R,
) -> WellnessReport {
    let weekly = weekly_entries(data, today);
    let in_range = select_range(data, range, today);
    let benchmark_window = select_range(data, BENCHMARK_RANGE, today);

    tracing::debug!(
        range = %range,
        today = %today,
        entries_in_range = in_range.len(),
        "Building wellness report"
    );

    WellnessReport {
        user_name: user_name.to_string(),
        today,
        range,
        dashboard: dashboard_stats(data, today),
        entries_in_range: in_range.len(),
        wellness: wellness_breakdown(data, today),
        benchmarks: personal_benchmarks(&benchmark_window),
        achievements: achievements(data, today),
        insights: insights(&weekly),
        reminders: reminder_prompts(data, today),
        weekly_summary: WeeklySummary {
            calendar: week_calendar(data, today),
            highlights: week_highlights(&weekly),
        },
        meal_suggestions: meal_suggestions(data),
        goals: GOALS.to_vec(),
        quote: random_quote(rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::models::DailyEntry;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 10).unwrap()
    }

    #[test]
    fn test_random_quote_is_from_list() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(QUOTES.contains(&random_quote(&mut rng)));
        }
    }

    #[test]
    fn test_empty_report() {
        let mut rng = StdRng::seed_from_u64(1);
        let report = build_report("Sam", &TrackingData::new(), TimeRange::Week, today(), &mut rng);
        assert_eq!(report.dashboard.streak, 0);
        assert_eq!(report.entries_in_range, 0);
        assert_eq!(report.benchmarks.len(), 4);
        assert!(report.insights.is_empty());
        assert_eq!(report.reminders.len(), 1);
        assert_eq!(report.goals.len(), 5);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let mut rng = StdRng::seed_from_u64(1);
        let data: TrackingData = [(today(), DailyEntry::default())].into_iter().collect();
        let report = build_report("Sam", &data, TimeRange::Month, today(), &mut rng);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["range"], "30");
        assert_eq!(json["today"], "2026-02-10");
        assert_eq!(json["dashboard"]["weekCompletion"], 33);
        assert_eq!(json["weeklySummary"]["calendar"]["days"].as_array().unwrap().len(), 7);
        assert!(json["weeklySummary"]["focus"].is_array());
        assert_eq!(json["entriesInRange"], 1);
    }
}
