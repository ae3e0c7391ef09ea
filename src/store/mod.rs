mod bounded;
mod export;
mod files;
mod history;
mod run_log;

pub use files::{
    DataStore, FORECAST_EXPORT_FILE, HISTORY_CSV_FILE, HISTORY_FILE, LATEST_FILE, RUN_LOG_FILE,
};
pub use history::HISTORY_CAPACITY;
pub use run_log::RUN_LOG_CAPACITY;
