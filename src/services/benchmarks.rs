//! Adaptive personal benchmarks.
//!
//! Targets start at a fixed baseline and move up once the user's recent
//! average clears it, so the goalposts follow improvement but never drop
//! below the baseline. Averages ignore days where the metric was not logged
//! (zero), which keeps sparse logging from dragging them down.

use crate::models::{Benchmark, BenchmarkStatus, DailyEntry, DatedEntry};

struct MetricRule {
    id: &'static str,
    label: &'static str,
    unit: &'static str,
    baseline: f64,
    increment: f64,
    cap: f64,
    on_track_at: f64,
    display_precision: f64,
    starter_message: &'static str,
}

const HYDRATION: MetricRule = MetricRule {
    id: "hydration",
    label: "Hydration",
    unit: "glasses",
    baseline: 8.0,
    increment: 1.0,
    cap: 12.0,
    on_track_at: 6.0,
    display_precision: 0.1,
    starter_message: "Sip steadily through the day to hit 8 glasses.",
};

const SLEEP: MetricRule = MetricRule {
    id: "sleep",
    label: "Sleep Rhythm",
    unit: "hrs",
    baseline: 7.5,
    increment: 0.5,
    cap: 9.0,
    on_track_at: 6.5,
    display_precision: 0.1,
    starter_message: "Aim for 7.5 hours tonight for a refreshed morning.",
};

const STEPS: MetricRule = MetricRule {
    id: "steps",
    label: "Steps",
    unit: "steps",
    baseline: 8000.0,
    increment: 1000.0,
    cap: 15000.0,
    on_track_at: 6000.0,
    display_precision: 100.0,
    starter_message: "Take a movement break to stack up your steps.",
};

const MINDFULNESS: MetricRule = MetricRule {
    id: "mindfulness",
    label: "Mindfulness",
    unit: "mins",
    baseline: 10.0,
    increment: 2.0,
    cap: 20.0,
    on_track_at: 5.0,
    display_precision: 1.0,
    starter_message: "Reserve 10 mindful minutes to reset your mind.",
};

const STRESS_WARNING_AT: f64 = 7.0;
const SCREEN_WARNING_AT: f64 = 6.0;
const WARNING_TARGET: f64 = 5.0;

/// Round to the nearest multiple of `precision`.
pub(crate) fn round_to(value: f64, precision: f64) -> f64 {
    if precision < 1.0 {
        let factor = (1.0 / precision).round();
        (value * factor).round() / factor
    } else {
        (value / precision).round() * precision
    }
}

/// Mean of the values that were actually logged (> 0). Zero when none were.
pub(crate) fn logged_average(entries: &[DatedEntry<'_>], metric: impl Fn(&DailyEntry) -> f64) -> f64 {
    let values: Vec<f64> = entries
        .iter()
        .map(|dated| metric(dated.entry))
        .filter(|value| *value > 0.0)
        .collect();
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Adaptive target: the baseline until the average clears it, then the
/// average plus one increment (rounded to the increment), capped.
pub fn compute_target(avg: f64, baseline: f64, increment: f64, cap: f64) -> f64 {
    if avg <= 0.0 {
        return baseline;
    }
    if avg >= baseline {
        return cap.min(round_to(avg + increment, increment));
    }
    baseline
}

fn status(avg: f64, target: f64, on_track_at: f64) -> BenchmarkStatus {
    if avg >= target {
        BenchmarkStatus::Celebrate
    } else if avg >= on_track_at {
        BenchmarkStatus::OnTrack
    } else {
        BenchmarkStatus::UpNext
    }
}

fn starter(rule: &MetricRule) -> Benchmark {
    Benchmark {
        id: rule.id,
        label: rule.label,
        current: 0.0,
        target: rule.baseline,
        status: BenchmarkStatus::UpNext,
        message: rule.starter_message.to_string(),
        unit: rule.unit,
    }
}

fn adaptive(rule: &MetricRule, avg: f64, message: impl FnOnce(f64, bool) -> String) -> Benchmark {
    let target = compute_target(avg, rule.baseline, rule.increment, rule.cap);
    let status = status(avg, target, rule.on_track_at);
    Benchmark {
        id: rule.id,
        label: rule.label,
        current: round_to(avg, rule.display_precision),
        target,
        status,
        message: message(target, status == BenchmarkStatus::Celebrate),
        unit: rule.unit,
    }
}

fn warning(id: &'static str, label: &'static str, unit: &'static str, avg: f64, message: &str) -> Benchmark {
    Benchmark {
        id,
        label,
        current: round_to(avg, 0.5),
        target: WARNING_TARGET,
        status: BenchmarkStatus::Warning,
        message: message.to_string(),
        unit,
    }
}

/// Four core benchmarks, plus stress and screen-time warnings when those
/// trend high. With no entries, the static starter set is returned.
pub fn personal_benchmarks(entries: &[DatedEntry<'_>]) -> Vec<Benchmark> {
    if entries.is_empty() {
        return [HYDRATION, SLEEP, STEPS, MINDFULNESS].iter().map(starter).collect();
    }

    let hydration_avg = logged_average(entries, |e| e.water);
    let sleep_avg = logged_average(entries, |e| e.sleep.hours);
    let steps_avg = logged_average(entries, |e| e.steps);
    let meditation_avg = logged_average(entries, |e| e.meditation);
    let stress_avg = logged_average(entries, |e| e.stress);
    let screen_avg = logged_average(entries, |e| e.screen_time);

    let mut benchmarks = vec![
        adaptive(&HYDRATION, hydration_avg, |target, celebrate| {
            if celebrate {
                "Hydration hero! Maintain this flow today.".into()
            } else {
                format!(
                    "You’re {} glasses away from your adaptive goal.",
                    round_to(target - hydration_avg, 0.5).max(0.0)
                )
            }
        }),
        adaptive(&SLEEP, sleep_avg, |_, celebrate| {
            if celebrate {
                "Dream team level sleep habits. Keep your wind-down ritual.".into()
            } else {
                "Try a calming ritual tonight to inch closer to 7.5 hours.".into()
            }
        }),
        adaptive(&STEPS, steps_avg, |_, celebrate| {
            if celebrate {
                "Stride superstar! Your movement streak is thriving.".into()
            } else {
                "Plan a movement snack (walk, stretch, dance) to stack up your steps.".into()
            }
        }),
        adaptive(&MINDFULNESS, meditation_avg, |_, celebrate| {
            if celebrate {
                "Centered and calm. Your mindful minutes are paying off.".into()
            } else {
                "Slip a short breathing or gratitude break into your day.".into()
            }
        }),
    ];

    if stress_avg >= STRESS_WARNING_AT {
        benchmarks.push(warning(
            "stress-watch",
            "Stress Watch",
            "level",
            stress_avg,
            "Stress is trending high. Layer in extra rest or lighter commitments today.",
        ));
    }

    if screen_avg >= SCREEN_WARNING_AT {
        benchmarks.push(warning(
            "screen-break",
            "Screen Time",
            "hrs",
            screen_avg,
            "Hit pause on screens. Stand, stretch, or take a sunshine break.",
        ));
    }

    tracing::debug!(
        entries = entries.len(),
        benchmarks = benchmarks.len(),
        "Computed personal benchmarks"
    );

    benchmarks
}
