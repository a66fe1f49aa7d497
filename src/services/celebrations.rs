use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{DailyEntry, TrackingData};
use crate::services::insights::achievements;
use crate::services::streaks::current_streak;

pub const DEFAULT_SAVE_MESSAGE: &str = "✅ Data saved successfully!";

/// What the shell shows after a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveOutcome {
    pub new_achievement: Option<String>,
    pub streak: u32,
    pub message: String,
}

/// Highlights of the saved day, strongest first.
pub fn celebratory_moments(entry: &DailyEntry) -> Vec<&'static str> {
    let mut moments = Vec::new();
    if entry.water >= 8.0 {
        moments.push("💧 Hydration goal smashed today!");
    }
    if entry.steps >= 8000.0 {
        moments.push("🦶 Way to move! 8k+ steps logged.");
    }
    if entry.exercise.completed {
        moments.push("🏋️ Workout locked in. Nice!");
    }
    if entry.mood >= 7.0 {
        moments.push("😊 Strong mood check-in.");
    }
    moments
}

/// Diff the badges held before a save against the updated history and pick
/// the message: a new badge, then the 7 and 30 day milestones, then the
/// first celebratory moment of the saved entry.
pub fn save_outcome(
    previous: &[String],
    updated: &TrackingData,
    saved: &DailyEntry,
    today: NaiveDate,
) -> SaveOutcome {
    let new_achievement = achievements(updated, today)
        .into_iter()
        .find(|badge| !previous.contains(badge));
    let streak = current_streak(updated, today);

    let message = match (&new_achievement, streak) {
        (Some(badge), _) => format!("✅ Saved! {}", badge),
        (None, 7) => "🎉 Amazing! 7 day streak achieved!".to_string(),
        (None, 30) => "🏆 Incredible! 30 day streak! You're a champion!".to_string(),
        (None, _) => celebratory_moments(saved)
            .first()
            .copied()
            .unwrap_or(DEFAULT_SAVE_MESSAGE)
            .to_string(),
    };

    SaveOutcome {
        new_achievement,
        streak,
        message,
    }
}
