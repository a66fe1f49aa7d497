pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use chrono::NaiveDate;

use crate::error::TrackerResult;
use crate::models::{DailyEntry, RawTrackingData};

/// Persistence collaborator. Stores hand back raw records keyed by ISO date;
/// normalizing them is the caller's job.
pub trait EntryStore {
    fn load_entries(&self, user_id: &str) -> TrackerResult<RawTrackingData>;

    fn save_entry(&mut self, user_id: &str, date: NaiveDate, entry: &DailyEntry) -> TrackerResult<()>;
}
