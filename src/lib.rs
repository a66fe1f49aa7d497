pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod session;

pub use config::Config;
pub use error::{TrackerError, TrackerResult};
pub use session::{SessionUser, TrackerSession};
