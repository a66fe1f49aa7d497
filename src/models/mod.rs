pub mod benchmark;
pub mod entry;
pub mod meal;
pub mod prompt;
pub mod stats;

pub use benchmark::{Benchmark, BenchmarkStatus};
pub use entry::{
    DailyEntry, DatedEntry, Exercise, QuickMetric, QuickMetricTimestamps, RawTrackingData, Sleep,
    Social, TrackingData,
};
pub use meal::{Meal, MealPatch, MediaItem, MediaPatch, NewMediaItem};
pub use prompt::{Insight, InsightKind, PromptKind, ReminderPrompt};
pub use stats::{CalendarDay, DashboardStats, WeekCalendar, WeekHighlights, WellnessScores};
