use super::bounded::BoundedLog;
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const LATEST_FILE: &str = "weather_latest.json";
pub const HISTORY_FILE: &str = "weather_history.json";
pub const HISTORY_CSV_FILE: &str = "weather_history.csv";
pub const RUN_LOG_FILE: &str = "pipeline_log.json";
pub const FORECAST_EXPORT_FILE: &str = "weather_analysis.csv";

/// Flat-file artifact store rooted at one directory
#[derive(Debug, Clone)]
pub struct DataStore {
    dir: PathBuf,
}

impl DataStore {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Read a JSON artifact; `Ok(None)` when the file does not exist
    pub fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let path = self.path(name);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)?;
        let value = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded artifact");
        Ok(Some(value))
    }

    pub fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<()> {
        let path = self.path(name);
        let json = serde_json::to_string_pretty(value)?;
        std::fs::write(&path, json)?;
        tracing::debug!(path = %path.display(), "Saved artifact");
        Ok(())
    }

    /// Rewrite a CSV artifact in full, header taken from the row type
    pub fn write_csv<T: Serialize>(&self, name: &str, rows: &[T]) -> Result<()> {
        let path = self.path(name);
        let mut wtr = csv::Writer::from_path(&path)?;
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        tracing::debug!(path = %path.display(), rows = rows.len(), "Saved CSV");
        Ok(())
    }

    /// Load a persisted array into a bounded log. Missing, unreadable and
    /// corrupt files all count as an empty log.
    pub fn load_log<T: DeserializeOwned>(&self, name: &str, capacity: usize) -> BoundedLog<T> {
        match self.read_json::<Vec<T>>(name) {
            Ok(Some(items)) => BoundedLog::from_vec(capacity, items),
            Ok(None) => {
                tracing::info!(file = name, "No existing artifact, starting empty");
                BoundedLog::new(capacity)
            }
            Err(e) => {
                tracing::warn!(file = name, error = %e, "Unreadable artifact, starting empty");
                BoundedLog::new(capacity)
            }
        }
    }
}
