use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::EntryStore;
use crate::error::TrackerResult;
use crate::models::{DailyEntry, RawTrackingData};

/// One user's history as a single JSON object keyed by `YYYY-MM-DD`.
///
/// The file is read on every load and rewritten whole on every save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> TrackerResult<RawTrackingData> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No entries file yet");
                return Ok(RawTrackingData::new());
            }
            Err(e) => return Err(e.into()),
        };
        if contents.trim().is_empty() {
            return Ok(RawTrackingData::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }
}

impl EntryStore for JsonFileStore {
    fn load_entries(&self, user_id: &str) -> TrackerResult<RawTrackingData> {
        let raw = self.read()?;
        tracing::info!(
            user_id = %user_id,
            path = %self.path.display(),
            records = raw.len(),
            "Loaded entries"
        );
        Ok(raw)
    }

    fn save_entry(&mut self, user_id: &str, date: NaiveDate, entry: &DailyEntry) -> TrackerResult<()> {
        let mut raw = self.read()?;
        raw.insert(date.format("%Y-%m-%d").to_string(), serde_json::to_value(entry)?);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&raw)?)?;

        tracing::info!(user_id = %user_id, date = %date, "Entry written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, d).unwrap()
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("entries.json"));
        assert!(store.load_entries("local").unwrap().is_empty());
    }

    #[test]
    fn test_save_creates_parent_and_merges() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("entries.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, json!({"2026-02-09": {"water": "3"}, "junk": 1}).to_string()).unwrap();

        let mut store = JsonFileStore::new(&path);
        store.save_entry("local", date(10), &DailyEntry::default()).unwrap();

        let raw = store.load_entries("local").unwrap();
        assert_eq!(raw.len(), 3);
        // untouched records stay raw
        assert_eq!(raw["2026-02-09"]["water"], "3");
        assert_eq!(raw["2026-02-10"]["stress"], 5.0);
    }

    #[test]
    fn test_save_without_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("a").join("b.json"));
        store.save_entry("local", date(10), &DailyEntry::default()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        fs::write(&path, "{not json").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(matches!(
            store.load_entries("local"),
            Err(crate::error::TrackerError::Serialization(_))
        ));
    }
}
