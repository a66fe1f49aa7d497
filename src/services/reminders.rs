use chrono::NaiveDate;

use crate::models::{DailyEntry, PromptKind, ReminderPrompt, TrackingData};
use crate::services::benchmarks::logged_average;
use crate::services::range::weekly_entries;

pub const MAX_PROMPTS: usize = 4;

const WATER_GOAL: f64 = 8.0;
const STEPS_FLOOR: f64 = 6000.0;
const MEDITATION_GOAL: f64 = 10.0;
const READING_GOAL: f64 = 15.0;

fn hydration_message(water: f64) -> String {
    let remaining = (WATER_GOAL - water).max(0.0);
    if remaining > 0.0 {
        let unit = if remaining == 1.0 { "glass" } else { "glasses" };
        format!("{} {} away from hydration goal.", remaining, unit)
    } else {
        "Stay hydrated with a celebratory sip! 💧".to_string()
    }
}

/// First unmet daily goal, in exercise, meditation, reading order.
fn goal_prompt(entry: &DailyEntry) -> Option<ReminderPrompt> {
    if !entry.exercise.completed {
        return Some(ReminderPrompt::new(
            "goal-movement-reminder",
            PromptKind::Goal,
            "Plan a 30-minute movement session to hit today's exercise target.",
            "🏃",
        ));
    }
    if entry.meditation < MEDITATION_GOAL {
        return Some(ReminderPrompt::new(
            "goal-meditation-reminder",
            PromptKind::Goal,
            "Take a mindful 10-minute pause to meet your meditation goal.",
            "🧘‍♀️",
        ));
    }
    if entry.reading < READING_GOAL {
        return Some(ReminderPrompt::new(
            "goal-reading-reminder",
            PromptKind::Goal,
            "Spend 15 focused minutes with a book to stay on your reading streak.",
            "📚",
        ));
    }
    None
}

fn today_prompts(entry: &DailyEntry, prompts: &mut Vec<ReminderPrompt>) {
    if entry.water < WATER_GOAL {
        prompts.push(ReminderPrompt::new(
            "hydration-reminder",
            PromptKind::Hydration,
            hydration_message(entry.water),
            "💧",
        ));
    }

    if entry.steps < STEPS_FLOOR {
        prompts.push(ReminderPrompt::new(
            "movement-reminder",
            PromptKind::Movement,
            "Mini movement break? A brisk walk will boost your step streak!",
            "🦶",
        ));
    }

    if entry.gratitude.trim().is_empty() {
        prompts.push(ReminderPrompt::new(
            "gratitude-reminder",
            PromptKind::Gratitude,
            "Drop one gratitude highlight to seal the day with joy.",
            "✨",
        ));
    }

    if entry.meals.is_empty() {
        prompts.push(ReminderPrompt::new(
            "meal-log-reminder",
            PromptKind::Diet,
            "Log a meal to keep your nourishment timeline on track today.",
            "🥗",
        ));
    } else if entry.meal_quality > 0.0 && entry.meal_quality <= 6.0 {
        prompts.push(ReminderPrompt::new(
            "meal-quality-reminder",
            PromptKind::Diet,
            "Consider adding a colorful veggie or protein to level up meal quality.",
            "🍽️",
        ));
    }

    prompts.extend(goal_prompt(entry));
}

/// Nudges for today plus trailing-week trends, at most [`MAX_PROMPTS`].
///
/// Without an entry for today the only today-scoped prompt is the
/// "log-today" nudge. Trend prompts average the last seven days, ignoring
/// zero values.
pub fn reminder_prompts(data: &TrackingData, today: NaiveDate) -> Vec<ReminderPrompt> {
    let mut prompts = Vec::new();

    match data.get(&today) {
        None => prompts.push(ReminderPrompt::new(
            "log-today",
            PromptKind::Nudge,
            "Haven't logged today yet. Jot down a quick mood & win!",
            "🗒️",
        )),
        Some(entry) => today_prompts(entry, &mut prompts),
    }

    let recent = weekly_entries(data, today);
    if !recent.is_empty() {
        if logged_average(&recent, |e| e.stress) >= 7.0 {
            prompts.push(ReminderPrompt::new(
                "stress-reminder",
                PromptKind::Stress,
                "Stress trend is high. Schedule a mindful breather soon.",
                "🧘",
            ));
        }

        let has_sleep_prompt = prompts.iter().any(|p| p.kind == PromptKind::Sleep);
        if logged_average(&recent, |e| e.sleep.hours) < 7.0 && !has_sleep_prompt {
            prompts.push(ReminderPrompt::new(
                "sleep-reminder",
                PromptKind::Sleep,
                "Wind-down window idea: dim lights and unplug 30 minutes earlier.",
                "🌙",
            ));
        }
    }

    prompts.truncate(MAX_PROMPTS);
    prompts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Meal;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, d).unwrap()
    }

    fn ids(prompts: &[ReminderPrompt]) -> Vec<&'static str> {
        prompts.iter().map(|p| p.id).collect()
    }

    fn on_track() -> DailyEntry {
        let mut entry = DailyEntry::default();
        entry.water = 8.0;
        entry.steps = 9000.0;
        entry.gratitude = "Coffee with a friend".into();
        entry.meals = vec![Meal::default()];
        entry.meal_quality = 8.0;
        entry.exercise.completed = true;
        entry.meditation = 10.0;
        entry.reading = 20.0;
        entry.sleep.hours = 8.0;
        entry
    }

    #[test]
    fn test_no_data_only_log_today() {
        let prompts = reminder_prompts(&TrackingData::new(), date(10));
        assert_eq!(ids(&prompts), vec!["log-today"]);
        assert_eq!(prompts[0].kind, PromptKind::Nudge);
    }

    #[test]
    fn test_missing_today_skips_today_checks() {
        // yesterday had low sleep: the trend prompt still fires
        let mut yesterday = on_track();
        yesterday.sleep.hours = 5.0;
        let data: TrackingData = [(date(9), yesterday)].into_iter().collect();
        let prompts = reminder_prompts(&data, date(10));
        assert_eq!(ids(&prompts), vec!["log-today", "sleep-reminder"]);
    }

    #[test]
    fn test_on_track_day_has_no_prompts() {
        let data: TrackingData = [(date(10), on_track())].into_iter().collect();
        assert!(reminder_prompts(&data, date(10)).is_empty());
    }

    #[test]
    fn test_blank_day_truncates_to_four() {
        let data: TrackingData = [(date(10), DailyEntry::default())].into_iter().collect();
        let prompts = reminder_prompts(&data, date(10));
        assert_eq!(prompts.len(), MAX_PROMPTS);
        assert_eq!(
            ids(&prompts),
            vec!["hydration-reminder", "movement-reminder", "gratitude-reminder", "meal-log-reminder"]
        );
        assert_eq!(prompts[0].message, "8 glasses away from hydration goal.");
    }

    #[test]
    fn test_hydration_message_singular() {
        assert_eq!(hydration_message(7.0), "1 glass away from hydration goal.");
        assert_eq!(hydration_message(5.5), "2.5 glasses away from hydration goal.");
    }

    #[test]
    fn test_only_first_unmet_goal() {
        let mut entry = on_track();
        entry.meditation = 0.0;
        entry.reading = 0.0;
        let data: TrackingData = [(date(10), entry)].into_iter().collect();
        assert_eq!(ids(&reminder_prompts(&data, date(10))), vec!["goal-meditation-reminder"]);
    }

    #[test]
    fn test_meal_quality_nudge() {
        let mut entry = on_track();
        entry.meal_quality = 6.0;
        let data: TrackingData = [(date(10), entry)].into_iter().collect();
        assert_eq!(ids(&reminder_prompts(&data, date(10))), vec!["meal-quality-reminder"]);

        let mut entry = on_track();
        entry.meal_quality = 0.0;
        let data: TrackingData = [(date(10), entry)].into_iter().collect();
        assert!(reminder_prompts(&data, date(10)).is_empty());
    }

    #[test]
    fn test_stress_trend_ignores_zero_days() {
        let mut stressed = on_track();
        stressed.stress = 8.0;
        let mut unrated = on_track();
        unrated.stress = 0.0;
        let data: TrackingData = [(date(9), stressed), (date(10), unrated)].into_iter().collect();
        assert_eq!(ids(&reminder_prompts(&data, date(10))), vec!["stress-reminder"]);
    }
}
