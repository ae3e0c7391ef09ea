use super::bounded::BoundedLog;
use super::files::{DataStore, HISTORY_CSV_FILE, HISTORY_FILE, LATEST_FILE};
use crate::error::{Result, WeatherEtlError};
use crate::models::{RunStats, TransformedRecord};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const HISTORY_CAPACITY: usize = 30;

/// Flattened history row for spreadsheet analysis
#[derive(Debug, Serialize)]
struct HistoryRow<'a> {
    recorded_at: Option<DateTime<Utc>>,
    temperature: Option<f64>,
    feels_like: Option<f64>,
    humidity: Option<f64>,
    weather_description: Option<&'a str>,
    comfort_index: Option<&'a str>,
    wind_description: Option<&'a str>,
    precipitation_status: Option<&'a str>,
}

impl<'a> HistoryRow<'a> {
    fn from_record(record: &'a TransformedRecord) -> Self {
        let current = record.current_weather.as_ref();
        let analysis = record.current_analysis.as_ref();
        Self {
            recorded_at: record.recorded_at,
            temperature: current.and_then(|c| c.temperature),
            feels_like: current.and_then(|c| c.feels_like),
            humidity: current.and_then(|c| c.humidity),
            weather_description: analysis.map(|a| a.weather_description.as_str()),
            comfort_index: analysis.map(|a| a.comfort_index.as_str()),
            wind_description: analysis.map(|a| a.wind_description.as_str()),
            precipitation_status: analysis.map(|a| a.precipitation_status.as_str()),
        }
    }
}

// Weather history

impl DataStore {
    /// Accept one record into the rolling history and persist every artifact.
    ///
    /// Returns `false` when the history or latest artifact could not be
    /// written. A run-log entry is recorded either way.
    pub fn append(&self, record: TransformedRecord) -> bool {
        tracing::info!("Loading weather data");

        match self.append_record(record) {
            Ok(stats) => {
                tracing::info!(
                    history_records = stats.history_records,
                    "Successfully loaded weather data"
                );
                self.record_run(stats, true, None);
                true
            }
            Err(e) => {
                tracing::error!("Error in data loading: {}", e);
                self.record_run(RunStats::default(), false, Some(e.to_string()));
                false
            }
        }
    }

    fn append_record(&self, mut record: TransformedRecord) -> Result<RunStats> {
        record.recorded_at = Some(Utc::now());

        let mut history = self.load_history();
        let evicted = history.push(record);
        if evicted > 0 {
            tracing::debug!(evicted, "Dropped oldest history records");
        }

        // History is the source of truth; latest and CSV are derived from it
        self.write_json(HISTORY_FILE, history.as_slice())?;

        let latest = history
            .last()
            .ok_or_else(|| WeatherEtlError::InvalidData("history empty after append".into()))?;
        self.write_json(LATEST_FILE, latest)?;

        if let Err(e) = self.write_history_csv(history.as_slice()) {
            tracing::warn!("Error saving historical CSV: {}", e);
        }

        Ok(RunStats {
            history_records: history.len(),
            forecast_days: latest.forecast_data.len(),
            completeness: Some(latest.data_quality.completeness),
        })
    }

    /// Regenerate the tabular projection from the full history
    pub fn write_history_csv(&self, history: &[TransformedRecord]) -> Result<()> {
        let rows: Vec<HistoryRow> = history.iter().map(HistoryRow::from_record).collect();
        self.write_csv(HISTORY_CSV_FILE, &rows)
    }

    fn load_history(&self) -> BoundedLog<TransformedRecord> {
        self.load_log(HISTORY_FILE, HISTORY_CAPACITY)
    }

    /// All retained records, oldest first
    pub fn history(&self) -> Vec<TransformedRecord> {
        self.load_history().into_vec()
    }

    /// The most recently appended record, if any run has succeeded
    pub fn latest(&self) -> Option<TransformedRecord> {
        match self.read_json(LATEST_FILE) {
            Ok(latest) => latest,
            Err(e) => {
                tracing::warn!("Unreadable latest record: {}", e);
                None
            }
        }
    }
}
