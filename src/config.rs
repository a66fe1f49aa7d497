use std::env;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use crate::error::{TrackerError, TrackerResult};
use crate::services::normalize::parse_date_key;
use crate::services::range::TimeRange;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_path: PathBuf,
    pub user_id: String,
    pub user_name: String,

    /// Pins "today" for reproducible reports; the wall clock otherwise.
    pub today_override: Option<NaiveDate>,
    pub analytics_range: TimeRange,
}

impl Config {
    pub fn from_env() -> TrackerResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> TrackerResult<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let today_override = match var("TRACKER_TODAY") {
            Some(raw) => Some(
                parse_date_key(&raw)
                    .map_err(|_| TrackerError::Config(format!("TRACKER_TODAY must be YYYY-MM-DD, got {:?}", raw)))?,
            ),
            None => None,
        };

        let analytics_range = match var("ANALYTICS_RANGE") {
            Some(raw) => raw
                .parse()
                .map_err(|_| TrackerError::Config(format!("ANALYTICS_RANGE must be 7, 14, 30 or all, got {:?}", raw)))?,
            None => TimeRange::default(),
        };

        Ok(Self {
            data_path: var("TRACKER_DATA_PATH")
                .unwrap_or_else(|| "data/entries.json".into())
                .into(),
            user_id: var("TRACKER_USER_ID").unwrap_or_else(|| "local".into()),
            user_name: var("TRACKER_USER_NAME").unwrap_or_else(|| "Anonymous".into()),
            today_override,
            analytics_range,
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.today_override
            .unwrap_or_else(|| Local::now().date_naive())
    }
}
