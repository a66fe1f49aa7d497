use chrono::{Datelike, Duration, NaiveDate, NaiveTime};

use crate::models::{DashboardStats, TrackingData};

/// Hours slept between two "HH:MM" clock times, to one decimal.
///
/// A wake time earlier than the sleep time is taken to be on the next day.
/// Empty or unparseable times yield 0.
pub fn sleep_hours(sleep_time: &str, wake_time: &str) -> f64 {
    let (Some(sleep), Some(wake)) = (parse_clock(sleep_time), parse_clock(wake_time)) else {
        return 0.0;
    };
    let mut diff = wake - sleep;
    if wake < sleep {
        diff = diff + Duration::days(1);
    }
    let hours = diff.num_seconds() as f64 / 3600.0;
    (hours * 10.0).round() / 10.0
}

fn parse_clock(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// Consecutive logged days ending today. Today itself must be logged.
pub fn current_streak(data: &TrackingData, today: NaiveDate) -> u32 {
    let mut current_streak = 0u32;
    let mut check_date = today;

    for date in data.keys().rev() {
        if *date == check_date {
            current_streak += 1;
            check_date -= Duration::days(1);
        } else if *date < check_date {
            break;
        }
    }

    current_streak
}

/// Longest run of consecutive logged days anywhere in the history.
pub fn longest_streak(data: &TrackingData) -> u32 {
    let mut longest_streak = 0u32;
    let mut streak = 0u32;
    let mut prev_date: Option<NaiveDate> = None;

    for date in data.keys() {
        match prev_date {
            Some(prev) if *date == prev + Duration::days(1) => streak += 1,
            Some(_) => {
                longest_streak = longest_streak.max(streak);
                streak = 1;
            }
            None => streak = 1,
        }
        prev_date = Some(*date);
    }

    longest_streak.max(streak)
}

/// Share of days logged in the current Sunday-start week, through today.
pub fn week_completion(data: &TrackingData, today: NaiveDate) -> u32 {
    let days_since_sunday = today.weekday().num_days_from_sunday();
    let week_start = today - Duration::days(days_since_sunday as i64);

    let tracked_days = (0..=days_since_sunday)
        .map(|offset| week_start + Duration::days(offset as i64))
        .filter(|date| data.contains_key(date))
        .count() as u32;

    // Sunday: the window is today alone
    if days_since_sunday == 0 {
        return if tracked_days > 0 { 100 } else { 0 };
    }

    (tracked_days as f64 / (days_since_sunday + 1) as f64 * 100.0).round() as u32
}

pub fn dashboard_stats(data: &TrackingData, today: NaiveDate) -> DashboardStats {
    DashboardStats {
        streak: current_streak(data, today),
        longest_streak: longest_streak(data),
        week_completion: week_completion(data, today),
        total_days: data.len(),
    }
}
