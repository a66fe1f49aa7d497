use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{
    CalendarDay, DatedEntry, Insight, InsightKind, TrackingData, WeekCalendar, WeekHighlights,
};
use crate::services::range::weekly_entries;
use crate::services::streaks::current_streak;

const STREAK_BADGE_AT: u32 = 3;
const WORKOUT_BADGE_AT: usize = 3;
const HYDRATION_BADGE_AT: usize = 5;
const WATER_GOAL: f64 = 8.0;
const SLEEP_GOAL: f64 = 7.0;

fn exercise_days(entries: &[DatedEntry<'_>]) -> usize {
    entries.iter().filter(|d| d.entry.exercise.completed).count()
}

fn water_goal_days(entries: &[DatedEntry<'_>]) -> usize {
    entries.iter().filter(|d| d.entry.water >= WATER_GOAL).count()
}

fn mean(entries: &[DatedEntry<'_>], metric: impl Fn(&DatedEntry<'_>) -> f64) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    entries.iter().map(metric).sum::<f64>() / entries.len() as f64
}

/// Badges earned right now. Recomputed on every call; callers that want to
/// announce a *new* badge diff two calls (see `celebrations::save_outcome`).
pub fn achievements(data: &TrackingData, today: NaiveDate) -> Vec<String> {
    let mut achievements = Vec::new();

    let streak = current_streak(data, today);
    if streak >= STREAK_BADGE_AT {
        achievements.push(format!("🔥 {} Day Streak!", streak));
    }

    let week = weekly_entries(data, today);
    let workouts = exercise_days(&week);
    if workouts >= WORKOUT_BADGE_AT {
        achievements.push(format!("💪 {} Workouts This Week!", workouts));
    }

    if water_goal_days(&week) >= HYDRATION_BADGE_AT {
        achievements.push("💧 Hydration Champion!".to_string());
    }

    achievements
}

/// Sleep, hydration and exercise cards, in that order. Empty without data.
pub fn insights(entries: &[DatedEntry<'_>]) -> Vec<Insight> {
    if entries.is_empty() {
        return Vec::new();
    }

    let mut insights = Vec::with_capacity(3);

    let avg_sleep = mean(entries, |d| d.entry.sleep.hours);
    if avg_sleep < SLEEP_GOAL {
        insights.push(Insight {
            kind: InsightKind::Warning,
            title: "🌙 Sleep Improvement",
            message: format!(
                "Your sleep average is {:.1} hours. Try going to bed 30 minutes earlier tonight!",
                avg_sleep
            ),
        });
    } else {
        insights.push(Insight {
            kind: InsightKind::Success,
            title: "✅ Great Sleep Habits",
            message: format!("Excellent! You're averaging {:.1} hours per night.", avg_sleep),
        });
    }

    let avg_water = mean(entries, |d| d.entry.water);
    if avg_water < WATER_GOAL {
        insights.push(Insight {
            kind: InsightKind::Warning,
            title: "💧 Hydration Boost",
            message: format!(
                "You're at {:.1} glasses daily. Aim for 8+ for optimal health!",
                avg_water
            ),
        });
    } else {
        insights.push(Insight {
            kind: InsightKind::Success,
            title: "💧 Excellent Hydration",
            message: "You're hitting your water goals consistently!".to_string(),
        });
    }

    let workouts = exercise_days(entries);
    if workouts >= WORKOUT_BADGE_AT {
        insights.push(Insight {
            kind: InsightKind::Success,
            title: "🏋️ Amazing Activity",
            message: format!("You exercised {} times this week! Keep it up! 🔥", workouts),
        });
    } else {
        insights.push(Insight {
            kind: InsightKind::Default,
            title: "🚶 Movement Matters",
            message: "Try adding more movement. Even a 15-minute walk makes a difference!"
                .to_string(),
        });
    }

    insights
}

/// What went well this week and what to focus on next.
pub fn week_highlights(entries: &[DatedEntry<'_>]) -> WeekHighlights {
    let mut summary = WeekHighlights::default();

    let workouts = exercise_days(entries);
    if workouts >= WORKOUT_BADGE_AT {
        summary.highlights.push(format!("💪 Exercised {} times", workouts));
    } else {
        summary.focus.push("🏋️ Increase exercise frequency".to_string());
    }

    if water_goal_days(entries) >= HYDRATION_BADGE_AT {
        summary.highlights.push("💧 Stayed well hydrated".to_string());
    } else {
        summary.focus.push("💧 Drink more water daily".to_string());
    }

    if !entries.is_empty() {
        if mean(entries, |d| d.entry.sleep.hours) >= SLEEP_GOAL {
            summary.highlights.push("😴 Maintained good sleep schedule".to_string());
        } else {
            summary.focus.push("😴 Improve sleep duration".to_string());
        }
    }

    summary
}

/// The current Sunday-start week, one cell per day with earned habit icons.
pub fn week_calendar(data: &TrackingData, today: NaiveDate) -> WeekCalendar {
    let week_start = today - Duration::days(today.weekday().num_days_from_sunday() as i64);
    let mut tracked_days = 0u32;

    let days = (0..7)
        .map(|offset| {
            let date = week_start + Duration::days(offset);
            let mut icons = String::new();
            if let Some(entry) = data.get(&date) {
                tracked_days += 1;
                if entry.water >= WATER_GOAL {
                    icons.push('💧');
                }
                if entry.exercise.completed {
                    icons.push_str("🏋️");
                }
                if entry.reading > 0.0 {
                    icons.push('📚');
                }
                if entry.sleep.hours >= SLEEP_GOAL {
                    icons.push('😴');
                }
                if entry.mood >= 7.0 {
                    icons.push('😊');
                }
            }
            if icons.is_empty() {
                icons.push('—');
            }
            CalendarDay {
                date,
                label: date.format("%a").to_string(),
                day_of_month: date.day(),
                is_today: date == today,
                icons,
            }
        })
        .collect();

    WeekCalendar {
        days,
        completion: (tracked_days as f64 / 7.0 * 100.0).round() as u32,
    }
}
