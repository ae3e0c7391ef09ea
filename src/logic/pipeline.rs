use super::transform::transform;
use crate::config::Config;
use crate::datasources::OpenMeteoClient;
use crate::error::Result;
use crate::models::{RawWeatherData, RunStats};
use crate::store::DataStore;
use std::time::Instant;

pub const NO_DATA_ERROR: &str = "no weather data extracted";

/// One extract/transform/load pass for the configured location
pub struct WeatherPipeline {
    client: OpenMeteoClient,
    store: DataStore,
}

impl WeatherPipeline {
    pub fn new(config: &Config, store: DataStore) -> Result<Self> {
        let client = OpenMeteoClient::new(&config.location, &config.openmeteo)?;
        tracing::debug!(dir = %store.dir().display(), "Pipeline store ready");
        Ok(Self { client, store })
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    /// Run the whole pipeline. Returns `true` when a record was persisted.
    pub async fn run(&self) -> bool {
        let started = Instant::now();
        tracing::info!(
            "Starting weather ETL pipeline for {}",
            self.client.location().city
        );

        let raw = self.client.extract().await;
        let ok = self.process(raw);

        tracing::info!(
            success = ok,
            duration_ms = started.elapsed().as_millis() as u64,
            "Weather ETL pipeline finished"
        );
        ok
    }

    /// Transform and load already extracted data
    pub fn process(&self, raw: RawWeatherData) -> bool {
        if !raw.has_any_data() {
            tracing::error!("Extraction returned neither current nor forecast data");
            self.store
                .record_run(RunStats::default(), false, Some(NO_DATA_ERROR.to_string()));
            return false;
        }

        let Some(record) = transform(Some(raw)) else {
            self.store.record_run(
                RunStats::default(),
                false,
                Some("transformation produced no record".to_string()),
            );
            return false;
        };

        tracing::info!(
            completeness = %record.data_quality.completeness,
            forecast_days = record.data_quality.forecast_days,
            "Transformation complete"
        );

        self.store.append(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::transform::tests::sample_raw;
    use tempfile::tempdir;

    fn pipeline(dir: &std::path::Path) -> WeatherPipeline {
        let store = DataStore::open(dir).unwrap();
        WeatherPipeline::new(&Config::default(), store).unwrap()
    }

    #[test]
    fn process_persists_record() {
        let dir = tempdir().unwrap();
        let pipeline = pipeline(dir.path());

        assert!(pipeline.process(sample_raw()));
        assert_eq!(pipeline.store().history().len(), 1);
        assert!(pipeline.store().latest().is_some());
        assert!(pipeline.store().run_log()[0].success);
    }

    #[test]
    fn empty_extraction_is_a_failed_run() {
        let dir = tempdir().unwrap();
        let pipeline = pipeline(dir.path());

        let mut raw = sample_raw();
        raw.current = None;
        raw.forecast.clear();

        assert!(!pipeline.process(raw));
        assert!(pipeline.store().history().is_empty());
        assert!(pipeline.store().latest().is_none());

        let runs = pipeline.store().run_log();
        assert_eq!(runs.len(), 1);
        assert!(!runs[0].success);
        assert_eq!(runs[0].error.as_deref(), Some(NO_DATA_ERROR));
    }

    #[test]
    fn forecast_only_still_loads() {
        let dir = tempdir().unwrap();
        let pipeline = pipeline(dir.path());

        let mut raw = sample_raw();
        raw.current = None;

        assert!(pipeline.process(raw));
        let latest = pipeline.store().latest().unwrap();
        assert!(latest.current_analysis.is_none());
        assert!(latest.forecast_analysis.is_some());
    }
}
