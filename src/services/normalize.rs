//! Entry normalization.
//!
//! Every record coming back from storage passes through here before any
//! analytics run. Normalization is total: malformed values fall back to the
//! field default and numeric fields always end up finite, so downstream code
//! can treat a [`DailyEntry`] as fully populated.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Map, Value};

use crate::error::{TrackerError, TrackerResult};
use crate::models::meal::{new_id, DEFAULT_MEAL_CATEGORY};
use crate::models::{
    DailyEntry, Exercise, Meal, MediaItem, QuickMetricTimestamps, RawTrackingData, Sleep, Social,
    TrackingData,
};
use crate::services::streaks::sleep_hours;

pub fn normalize_entry(raw: &Value) -> DailyEntry {
    let defaults = DailyEntry::default();
    let obj = raw.as_object();
    let field = |key: &str| obj.and_then(|o| o.get(key));

    let exercise = normalize_exercise(field("exercise"), &defaults.exercise);
    let sleep = normalize_sleep(field("sleep"), &defaults.sleep);
    let social = normalize_social(field("social"), &defaults.social);

    DailyEntry {
        caffeine: number(field("caffeine"), defaults.caffeine),
        water: number(field("water"), defaults.water),
        exercise,
        sleep,
        steps: number(field("steps"), defaults.steps),
        meals: normalize_meals(field("meals")),
        mood: number(field("mood"), defaults.mood),
        stress: number(field("stress"), defaults.stress),
        meditation: number(field("meditation"), defaults.meditation),
        reading: number(field("reading"), defaults.reading),
        reading_content: text(field("readingContent"), &defaults.reading_content),
        productivity: number(field("productivity"), defaults.productivity),
        screen_time: number(field("screenTime"), defaults.screen_time),
        social,
        meal_quality: number(field("mealQuality"), defaults.meal_quality),
        gratitude: text(field("gratitude"), &defaults.gratitude),
        notes: text(field("notes"), &defaults.notes),
        media_entries: normalize_media(field("mediaEntries")),
        quick_metric_updated_at: normalize_timestamps(field("quickMetricUpdatedAt")),
    }
}

/// Normalize a whole snapshot. Keys that are not ISO dates are dropped.
pub fn normalize_tracking_data(raw: &RawTrackingData) -> TrackingData {
    let mut data = TrackingData::new();
    for (key, value) in raw {
        match parse_date_key(key) {
            Ok(date) => {
                data.insert(date, normalize_entry(value));
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Skipping entry with malformed date key");
            }
        }
    }
    tracing::debug!(entries = data.len(), dropped = raw.len() - data.len(), "Normalized snapshot");
    data
}

pub fn parse_date_key(key: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(key.trim(), "%Y-%m-%d")
        .map_err(|_| TrackerError::InvalidDate(key.to_string()))
}

pub fn normalize_meal(raw: &Value) -> Meal {
    let Some(obj) = raw.as_object() else {
        return Meal::default();
    };
    let field = |key: &str| obj.get(key);

    let id = text(field("id"), "");
    Meal {
        id: if id.is_empty() { new_id() } else { id },
        name: text(field("name"), ""),
        quantity: text(field("quantity"), ""),
        unit: text(field("unit"), ""),
        category: text(field("category"), DEFAULT_MEAL_CATEGORY),
        time: text(field("time"), ""),
        notes: text(field("notes"), ""),
    }
}

fn normalize_meals(raw: Option<&Value>) -> Vec<Meal> {
    let Some(Value::Array(items)) = raw else {
        return Vec::new();
    };
    items
        .iter()
        .filter(|item| is_truthy(item))
        .map(normalize_meal)
        .collect()
}

fn normalize_media(raw: Option<&Value>) -> Vec<MediaItem> {
    let Some(Value::Array(items)) = raw else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(Value::as_object)
        .map(|obj| {
            let id = text(obj.get("id"), "");
            MediaItem {
                id: if id.is_empty() { new_id() } else { id },
                kind: text(obj.get("type"), ""),
                content: text(obj.get("content"), ""),
                caption: text(obj.get("caption"), ""),
            }
        })
        .collect()
}

fn normalize_exercise(raw: Option<&Value>, defaults: &Exercise) -> Exercise {
    let obj = nested(raw);
    Exercise {
        completed: flag(obj.and_then(|o| o.get("completed")), defaults.completed),
        kind: text(obj.and_then(|o| o.get("type")), &defaults.kind),
        duration: number(obj.and_then(|o| o.get("duration")), defaults.duration),
    }
}

fn normalize_sleep(raw: Option<&Value>, defaults: &Sleep) -> Sleep {
    let obj = nested(raw);
    let sleep_time = text(obj.and_then(|o| o.get("sleepTime")), &defaults.sleep_time);
    let wake_time = text(obj.and_then(|o| o.get("wakeTime")), &defaults.wake_time);
    let hours = sleep_hours(&sleep_time, &wake_time);
    Sleep {
        quality: number(obj.and_then(|o| o.get("quality")), defaults.quality),
        sleep_time,
        wake_time,
        hours,
    }
}

fn normalize_social(raw: Option<&Value>, defaults: &Social) -> Social {
    let obj = nested(raw);
    Social {
        connected: flag(obj.and_then(|o| o.get("connected")), defaults.connected),
        activity: text(obj.and_then(|o| o.get("activity")), &defaults.activity),
    }
}

fn normalize_timestamps(raw: Option<&Value>) -> QuickMetricTimestamps {
    let obj = nested(raw);
    let stamp = |key: &str| {
        obj.and_then(|o| o.get(key))
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<DateTime<Utc>>().ok())
    };
    QuickMetricTimestamps {
        water: stamp("water"),
        steps: stamp("steps"),
        caffeine: stamp("caffeine"),
        screen_time: stamp("screenTime"),
    }
}

fn nested(raw: Option<&Value>) -> Option<&Map<String, Value>> {
    raw.and_then(Value::as_object)
}

/// Finite number, numeric string, or 0. Missing and null use the default.
fn number(raw: Option<&Value>, default: f64) -> f64 {
    match raw {
        None | Some(Value::Null) => default,
        Some(Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
        Some(Value::String(s)) => parse_float(s).unwrap_or(0.0),
        Some(_) => 0.0,
    }
}

fn text(raw: Option<&Value>, default: &str) -> String {
    match raw {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => default.to_string(),
    }
}

fn flag(raw: Option<&Value>, default: bool) -> bool {
    match raw {
        None | Some(Value::Null) => default,
        Some(value) => is_truthy(value),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Leading-prefix float parse: "12 glasses" is 12, "abc" is nothing.
fn parse_float(s: &str) -> Option<f64> {
    let trimmed = s.trim_start();
    let prefix: String = trimmed
        .chars()
        .take_while(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        .collect();
    (1..=prefix.len())
        .rev()
        .find_map(|len| prefix[..len].parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
