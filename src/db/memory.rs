use std::collections::HashMap;

use chrono::NaiveDate;

use super::EntryStore;
use crate::error::TrackerResult;
use crate::models::{DailyEntry, RawTrackingData};

/// Per-user maps held in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    users: HashMap<String, RawTrackingData>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user's raw records, replacing any already held.
    pub fn with_entries(mut self, user_id: &str, raw: RawTrackingData) -> Self {
        self.users.insert(user_id.to_string(), raw);
        self
    }
}

impl EntryStore for MemoryStore {
    fn load_entries(&self, user_id: &str) -> TrackerResult<RawTrackingData> {
        Ok(self.users.get(user_id).cloned().unwrap_or_default())
    }

    fn save_entry(&mut self, user_id: &str, date: NaiveDate, entry: &DailyEntry) -> TrackerResult<()> {
        let value = serde_json::to_value(entry)?;
        self.users
            .entry(user_id.to_string())
            .or_default()
            .insert(date.format("%Y-%m-%d").to_string(), value);
        Ok(())
    }
}
