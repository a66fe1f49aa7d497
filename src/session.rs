use chrono::{NaiveDate, Utc};
use rand::Rng;
use validator::Validate;

use crate::db::EntryStore;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    Benchmark, DailyEntry, DashboardStats, DatedEntry, Insight, Meal, MealPatch, MediaPatch,
    NewMediaItem, QuickMetric, RawTrackingData, ReminderPrompt, TrackingData, WeekCalendar,
    WeekHighlights, WellnessScores,
};
use crate::services::benchmarks::personal_benchmarks;
use crate::services::celebrations::{save_outcome, SaveOutcome};
use crate::services::insights::{achievements, insights, week_calendar, week_highlights};
use crate::services::meals::{meal_suggestions, MealSuggestion};
use crate::services::normalize::{normalize_entry, normalize_tracking_data};
use crate::services::range::{select_range, weekly_entries, TimeRange};
use crate::services::reminders::reminder_prompts;
use crate::services::report::{build_report, WellnessReport, BENCHMARK_RANGE};
use crate::services::streaks::{dashboard_stats, sleep_hours};
use crate::services::wellness::wellness_breakdown;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
}

/// 0-10 sliders and minute counters edited directly on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingField {
    Mood,
    Stress,
    Productivity,
    MealQuality,
    Meditation,
    Reading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Gratitude,
    Notes,
    ReadingContent,
}

/// State owned by the application shell: who is signed in, their entries,
/// and the draft being edited for the selected date.
///
/// Analytics are recomputed from `tracking_data` on every call.
pub struct TrackerSession<S: EntryStore> {
    store: S,
    user: Option<SessionUser>,
    tracking_data: TrackingData,
    selected_date: NaiveDate,
    form: DailyEntry,
    analytics_range: TimeRange,
    today: NaiveDate,
}

impl<S: EntryStore> TrackerSession<S> {
    pub fn new(store: S, today: NaiveDate) -> Self {
        Self {
            store,
            user: None,
            tracking_data: TrackingData::new(),
            selected_date: today,
            form: DailyEntry::default(),
            analytics_range: TimeRange::default(),
            today,
        }
    }

    // ── accessors ───────────────────────────────────────────────────────

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn tracking_data(&self) -> &TrackingData {
        &self.tracking_data
    }

    pub fn form(&self) -> &DailyEntry {
        &self.form
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn analytics_range(&self) -> TimeRange {
        self.analytics_range
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Move "today" forward, e.g. when the shell notices midnight passed.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn set_analytics_range(&mut self, range: TimeRange) {
        self.analytics_range = range;
    }

    // ── lifecycle ───────────────────────────────────────────────────────

    pub fn sign_in(&mut self, user: SessionUser) {
        tracing::info!(user_id = %user.id, "Session signed in");
        self.user = Some(user);
        self.tracking_data.clear();
        self.selected_date = self.today;
        self.form = DailyEntry::default();
    }

    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(user_id = %user.id, "Session signed out");
        }
        self.tracking_data.clear();
        self.selected_date = self.today;
        self.form = DailyEntry::default();
        self.analytics_range = TimeRange::default();
    }

    /// Replace the entries map wholesale and reload the draft for the
    /// selected date.
    pub fn apply_snapshot(&mut self, raw: &RawTrackingData) {
        self.tracking_data = normalize_tracking_data(raw);
        self.form = self.entry_or_default(self.selected_date);
        tracing::debug!(entries = self.tracking_data.len(), "Snapshot applied");
    }

    /// Pull the signed-in user's records from the store.
    pub fn refresh(&mut self) -> TrackerResult<()> {
        let user_id = self.user.as_ref().ok_or(TrackerError::NotSignedIn)?.id.clone();
        let raw = self.store.load_entries(&user_id)?;
        self.apply_snapshot(&raw);
        Ok(())
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
        self.form = self.entry_or_default(date);
    }

    fn entry_or_default(&self, date: NaiveDate) -> DailyEntry {
        self.tracking_data.get(&date).cloned().unwrap_or_default()
    }

    pub fn clear_form(&mut self) {
        self.form = DailyEntry::default();
    }

    // ── draft edits ─────────────────────────────────────────────────────

    pub fn set_quick_metric(&mut self, metric: QuickMetric, value: f64) {
        *self.form.quick_metric_mut(metric) = value;
        self.form.quick_metric_updated_at.touch(metric, Utc::now());
    }

    /// Nudge a counter by `delta`, clamped to `[min, max]`.
    pub fn step_quick_metric(&mut self, metric: QuickMetric, delta: f64, min: f64, max: f64) {
        let current = self.form.quick_metric(metric);
        self.set_quick_metric(metric, (current + delta).max(min).min(max));
    }

    pub fn set_sleep_time(&mut self, sleep_time: &str) {
        self.form.sleep.sleep_time = sleep_time.to_string();
        self.recompute_sleep_hours();
    }

    pub fn set_wake_time(&mut self, wake_time: &str) {
        self.form.sleep.wake_time = wake_time.to_string();
        self.recompute_sleep_hours();
    }

    fn recompute_sleep_hours(&mut self) {
        let sleep = &mut self.form.sleep;
        sleep.hours = sleep_hours(&sleep.sleep_time, &sleep.wake_time);
    }

    pub fn set_sleep_quality(&mut self, quality: f64) {
        self.form.sleep.quality = quality;
    }

    pub fn set_exercise_completed(&mut self, completed: bool) {
        self.form.exercise.completed = completed;
    }

    pub fn set_exercise_type(&mut self, kind: &str) {
        self.form.exercise.kind = kind.to_string();
    }

    pub fn set_exercise_duration(&mut self, minutes: f64) {
        self.form.exercise.duration = minutes;
    }

    pub fn set_rating(&mut self, field: RatingField, value: f64) {
        let slot = match field {
            RatingField::Mood => &mut self.form.mood,
            RatingField::Stress => &mut self.form.stress,
            RatingField::Productivity => &mut self.form.productivity,
            RatingField::MealQuality => &mut self.form.meal_quality,
            RatingField::Meditation => &mut self.form.meditation,
            RatingField::Reading => &mut self.form.reading,
        };
        *slot = value;
    }

    pub fn set_text(&mut self, field: TextField, value: &str) {
        let slot = match field {
            TextField::Gratitude => &mut self.form.gratitude,
            TextField::Notes => &mut self.form.notes,
            TextField::ReadingContent => &mut self.form.reading_content,
        };
        *slot = value.to_string();
    }

    pub fn set_social_connected(&mut self, connected: bool) {
        self.form.social.connected = connected;
    }

    pub fn set_social_activity(&mut self, activity: &str) {
        self.form.social.activity = activity.to_string();
    }

    // ── meals & media ───────────────────────────────────────────────────

    /// Append a meal, optionally prefilled from a preset. Returns its id.
    pub fn add_meal(&mut self, preset: Option<MealPatch>) -> String {
        let meal = preset.map(Meal::from_patch).unwrap_or_default();
        let id = meal.id.clone();
        self.form.meals.push(meal);
        id
    }

    /// Returns false when no meal has that id.
    pub fn update_meal(&mut self, id: &str, patch: MealPatch) -> bool {
        match self.form.meals.iter_mut().find(|meal| meal.id == id) {
            Some(meal) => {
                meal.apply(patch);
                true
            }
            None => false,
        }
    }

    pub fn remove_meal(&mut self, id: &str) -> bool {
        let before = self.form.meals.len();
        self.form.meals.retain(|meal| meal.id != id);
        self.form.meals.len() != before
    }

    pub fn add_media(&mut self, item: NewMediaItem) -> TrackerResult<String> {
        item.validate()?;
        let item = item.into_item();
        let id = item.id.clone();
        self.form.media_entries.push(item);
        Ok(id)
    }

    /// The patched item must still validate; on failure the draft is untouched.
    pub fn update_media(&mut self, id: &str, patch: MediaPatch) -> TrackerResult<bool> {
        let Some(item) = self.form.media_entries.iter_mut().find(|item| item.id == id) else {
            return Ok(false);
        };
        let mut candidate = item.clone();
        candidate.apply(patch);
        NewMediaItem::new(
            candidate.kind.as_str(),
            candidate.content.as_str(),
            candidate.caption.as_str(),
        )
        .validate()?;
        *item = candidate;
        Ok(true)
    }

    pub fn remove_media(&mut self, id: &str) -> bool {
        let before = self.form.media_entries.len();
        self.form.media_entries.retain(|item| item.id != id);
        self.form.media_entries.len() != before
    }

    // ── save ────────────────────────────────────────────────────────────

    /// Normalize the draft, persist it for the selected date and report what
    /// changed.
    pub fn save(&mut self) -> TrackerResult<SaveOutcome> {
        let user_id = match &self.user {
            Some(user) => user.id.clone(),
            None => {
                tracing::warn!(date = %self.selected_date, "Save attempted while signed out");
                return Err(TrackerError::NotSignedIn);
            }
        };

        let entry = normalize_entry(&serde_json::to_value(&self.form)?);
        let previous = achievements(&self.tracking_data, self.today);

        self.store.save_entry(&user_id, self.selected_date, &entry)?;
        self.tracking_data.insert(self.selected_date, entry.clone());
        self.form = entry;

        let outcome = save_outcome(&previous, &self.tracking_data, &self.form, self.today);
        tracing::info!(
            user_id = %user_id,
            date = %self.selected_date,
            streak = outcome.streak,
            new_achievement = outcome.new_achievement.as_deref().unwrap_or(""),
            "Entry saved"
        );
        Ok(outcome)
    }

    // ── analytics ───────────────────────────────────────────────────────

    pub fn range_entries(&self) -> Vec<DatedEntry<'_>> {
        select_range(&self.tracking_data, self.analytics_range, self.today)
    }

    pub fn dashboard_stats(&self) -> DashboardStats {
        dashboard_stats(&self.tracking_data, self.today)
    }

    pub fn wellness(&self) -> WellnessScores {
        wellness_breakdown(&self.tracking_data, self.today)
    }

    pub fn benchmarks(&self) -> Vec<Benchmark> {
        personal_benchmarks(&select_range(&self.tracking_data, BENCHMARK_RANGE, self.today))
    }

    pub fn achievements(&self) -> Vec<String> {
        achievements(&self.tracking_data, self.today)
    }

    pub fn insights(&self) -> Vec<Insight> {
        insights(&weekly_entries(&self.tracking_data, self.today))
    }

    pub fn reminders(&self) -> Vec<ReminderPrompt> {
        reminder_prompts(&self.tracking_data, self.today)
    }

    pub fn week_calendar(&self) -> WeekCalendar {
        week_calendar(&self.tracking_data, self.today)
    }

    pub fn week_highlights(&self) -> WeekHighlights {
        week_highlights(&weekly_entries(&self.tracking_data, self.today))
    }

    pub fn meal_suggestions(&self) -> Vec<MealSuggestion> {
        meal_suggestions(&self.tracking_data)
    }

    pub fn report<R: Rng + ?Sized>(&self, rng: &mut R) -> WellnessReport {
        let user_name = self.user.as_ref().map(|u| u.name.as_str()).unwrap_or("");
        build_report(user_name, &self.tracking_data, self.analytics_range, self.today, rng)
    }
}
