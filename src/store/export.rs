use super::files::{DataStore, FORECAST_EXPORT_FILE};
use crate::error::Result;
use crate::models::{describe, DailyForecastRecord, TransformedRecord};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct ForecastRow {
    date: NaiveDate,
    #[serde(rename = "High_Temp")]
    high_temp: Option<f64>,
    #[serde(rename = "Low_Temp")]
    low_temp: Option<f64>,
    precipitation: Option<f64>,
    weather: String,
}

impl From<&DailyForecastRecord> for ForecastRow {
    fn from(day: &DailyForecastRecord) -> Self {
        Self {
            date: day.date,
            high_temp: day.temp_max,
            low_temp: day.temp_min,
            precipitation: day.precipitation,
            weather: describe(day.weather_code),
        }
    }
}

impl DataStore {
    /// Write the record's daily forecast as a spreadsheet-friendly table.
    /// Returns the number of rows written.
    pub fn export_forecast(&self, record: &TransformedRecord) -> Result<usize> {
        let rows: Vec<ForecastRow> = record.forecast_data.iter().map(ForecastRow::from).collect();
        self.write_csv(FORECAST_EXPORT_FILE, &rows)?;
        tracing::info!(rows = rows.len(), "Exported forecast analysis");
        Ok(rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::transform::tests::sample_raw;
    use crate::logic::transform::transform;
    use tempfile::tempdir;

    #[test]
    fn export_writes_one_row_per_day() {
        let dir = tempdir().unwrap();
        let store = DataStore::open(dir.path()).unwrap();
        let record = transform(Some(sample_raw())).unwrap();

        assert_eq!(store.export_forecast(&record).unwrap(), 2);

        let content = std::fs::read_to_string(store.path(FORECAST_EXPORT_FILE)).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Date,High_Temp,Low_Temp,Precipitation,Weather");
        assert!(lines[1].starts_with("2024-01-15,"));
        assert!(lines[2].starts_with("2024-01-16,"));
    }
}
