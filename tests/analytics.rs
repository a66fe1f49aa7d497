use chrono::{Duration, NaiveDate};
use serde_json::{json, Value};

use wellness_tracker::db::{EntryStore, JsonFileStore, MemoryStore};
use wellness_tracker::models::{BenchmarkStatus, QuickMetric, RawTrackingData, TrackingData, WellnessScores};
use wellness_tracker::services::benchmarks::personal_benchmarks;
use wellness_tracker::services::insights::achievements;
use wellness_tracker::services::normalize::{normalize_entry, normalize_tracking_data};
use wellness_tracker::services::range::{select_range, TimeRange};
use wellness_tracker::services::reminders::{reminder_prompts, MAX_PROMPTS};
use wellness_tracker::services::streaks::{current_streak, sleep_hours, week_completion};
use wellness_tracker::services::wellness::wellness_scores;
use wellness_tracker::{SessionUser, TrackerSession};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 10).unwrap()
}

fn raw(records: &[(NaiveDate, Value)]) -> RawTrackingData {
    records
        .iter()
        .map(|(date, value)| (date.format("%Y-%m-%d").to_string(), value.clone()))
        .collect()
}

fn days_ago(n: i64) -> NaiveDate {
    today() - Duration::days(n)
}

// ── normalizer ──────────────────────────────────────────────────────────

#[test]
fn test_normalize_malformed_inputs() {
    for input in [
        json!({}),
        json!(null),
        json!({"water": null, "steps": "12abc", "sleep": null, "exercise": "yes"}),
        json!({"mood": "NaN", "stress": "Infinity", "meals": "soup"}),
    ] {
        let entry = normalize_entry(&input);
        for value in [
            entry.water,
            entry.steps,
            entry.mood,
            entry.stress,
            entry.sleep.hours,
            entry.exercise.duration,
        ] {
            assert!(value.is_finite(), "{} produced {}", input, value);
        }
        let twice = normalize_entry(&serde_json::to_value(&entry).unwrap());
        assert_eq!(twice, entry);
    }
}

#[test]
fn test_sleep_hours_examples() {
    assert_eq!(sleep_hours("23:00", "07:00"), 8.0);
    assert_eq!(sleep_hours("06:00", "06:00"), 0.0);
    assert_eq!(sleep_hours("", "22:00"), 0.0);
}

// ── streaks ─────────────────────────────────────────────────────────────

#[test]
fn test_streak_examples() {
    assert_eq!(current_streak(&TrackingData::new(), today()), 0);

    let consecutive = normalize_tracking_data(&raw(&[
        (days_ago(0), json!({})),
        (days_ago(1), json!({})),
        (days_ago(2), json!({})),
    ]));
    assert_eq!(current_streak(&consecutive, today()), 3);

    let gap = normalize_tracking_data(&raw(&[(days_ago(0), json!({})), (days_ago(2), json!({}))]));
    assert_eq!(current_streak(&gap, today()), 1);
}

#[test]
fn test_week_completion_on_sunday() {
    let sunday = NaiveDate::from_ymd_opt(2026, 2, 15).unwrap();
    let one = normalize_tracking_data(&raw(&[(sunday, json!({}))]));
    assert_eq!(week_completion(&one, sunday), 100);
    assert_eq!(week_completion(&TrackingData::new(), sunday), 0);
}

// ── scores & benchmarks ─────────────────────────────────────────────────

#[test]
fn test_scores() {
    assert_eq!(wellness_scores(&[]), WellnessScores::default());

    let data = normalize_tracking_data(&raw(&[(
        today(),
        json!({"water": 8, "sleep": {"sleepTime": "23:00", "wakeTime": "07:00"}, "exercise": {"completed": true}, "steps": 8000}),
    )]));
    let scores = wellness_scores(&select_range(&data, TimeRange::Week, today()));
    assert_eq!(scores.physical, 100);
}

#[test]
fn test_benchmarks() {
    let starters = personal_benchmarks(&[]);
    assert_eq!(starters.len(), 4);
    assert!(starters
        .iter()
        .all(|b| b.status == BenchmarkStatus::UpNext && b.current == 0.0));

    let high = normalize_tracking_data(&raw(&[(days_ago(0), json!({"water": 10})), (days_ago(1), json!({"water": 10}))]));
    let hydration = personal_benchmarks(&select_range(&high, TimeRange::Fortnight, today()))
        .into_iter()
        .find(|b| b.id == "hydration")
        .unwrap();
    assert!(hydration.target > 8.0);

    let low = normalize_tracking_data(&raw(&[(days_ago(0), json!({"water": 5}))]));
    let hydration = personal_benchmarks(&select_range(&low, TimeRange::Fortnight, today()))
        .into_iter()
        .find(|b| b.id == "hydration")
        .unwrap();
    assert_eq!(hydration.target, 8.0);
}

// ── achievements & reminders ────────────────────────────────────────────

#[test]
fn test_three_workout_days_scenario() {
    let workout = json!({"exercise": {"completed": true}});
    let data = normalize_tracking_data(&raw(&[
        (days_ago(0), workout.clone()),
        (days_ago(1), workout.clone()),
        (days_ago(2), workout),
    ]));
    let badges = achievements(&data, today());
    assert!(badges.iter().any(|b| b == "🔥 3 Day Streak!"));
    assert!(badges.iter().any(|b| b == "💪 3 Workouts This Week!"));
}

#[test]
fn test_reminders_bounds() {
    let prompts = reminder_prompts(&TrackingData::new(), today());
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0].id, "log-today");

    let data = normalize_tracking_data(&raw(&[
        (days_ago(0), json!({"stress": 9})),
        (days_ago(1), json!({"stress": 8})),
    ]));
    assert!(reminder_prompts(&data, today()).len() <= MAX_PROMPTS);
}

// ── session over stores ─────────────────────────────────────────────────

#[test]
fn test_session_round_trip_through_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("entries.json");
    let user = SessionUser {
        id: "local".into(),
        name: "Sam".into(),
    };

    let mut session = TrackerSession::new(JsonFileStore::new(&path), today());
    session.sign_in(user.clone());
    session.refresh().unwrap();
    session.set_quick_metric(QuickMetric::Water, 8.0);
    let outcome = session.save().unwrap();
    assert_eq!(outcome.message, "💧 Hydration goal smashed today!");

    let mut reopened = TrackerSession::new(JsonFileStore::new(&path), today());
    reopened.sign_in(user);
    reopened.refresh().unwrap();
    assert_eq!(reopened.form().water, 8.0);
    assert!(reopened.form().quick_metric_updated_at.water.is_some());
    assert_eq!(reopened.dashboard_stats().streak, 1);
}

#[test]
fn test_malformed_keys_are_dropped_from_store_snapshot() {
    let mut store = MemoryStore::new().with_entries(
        "local",
        [
            ("2026-02-10".to_string(), json!({"water": 2})),
            ("yesterday".to_string(), json!({"water": 9})),
        ]
        .into_iter()
        .collect(),
    );
    store
        .save_entry("local", days_ago(1), &normalize_entry(&json!({"steps": 100})))
        .unwrap();

    let mut session = TrackerSession::new(store, today());
    session.sign_in(SessionUser {
        id: "local".into(),
        name: "Sam".into(),
    });
    session.refresh().unwrap();
    assert_eq!(session.tracking_data().len(), 2);
    assert_eq!(session.dashboard_stats().streak, 2);
}
