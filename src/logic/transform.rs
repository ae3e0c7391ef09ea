use super::current::analyze_current;
use super::forecast::analyze_forecast;
use crate::models::{DataQuality, RawWeatherData, TransformedRecord};
use chrono::Utc;

/// Combine raw extraction output with both analyses.
///
/// Only an absent input yields `None`; either analysis may be missing and the
/// record is then marked `Partial`.
pub fn transform(raw: Option<RawWeatherData>) -> Option<TransformedRecord> {
    tracing::info!("Starting weather data transformation");

    let Some(raw) = raw else {
        tracing::warn!("No weather data to transform");
        return None;
    };

    let current_analysis = analyze_current(raw.current.as_ref());
    if current_analysis.is_none() {
        tracing::info!("No current conditions, skipping current analysis");
    }

    let forecast_analysis = analyze_forecast(&raw.forecast);
    if forecast_analysis.is_none() {
        tracing::info!(
            forecast_days = raw.forecast.len(),
            "Forecast too short or without temperatures, skipping trend analysis"
        );
    }

    let data_quality = DataQuality::assess(
        current_analysis.as_ref(),
        forecast_analysis.as_ref(),
        raw.forecast.len(),
    );

    let record = TransformedRecord {
        location: raw.location,
        extraction_info: raw.extraction_summary,
        current_weather: raw.current,
        current_analysis,
        forecast_data: raw.forecast,
        forecast_analysis,
        transformation_timestamp: Utc::now(),
        data_quality,
        recorded_at: None,
    };

    tracing::info!(
        completeness = %record.data_quality.completeness,
        "Weather data transformation completed"
    );
    Some(record)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{
        Completeness, DailyForecastRecord, ExtractionSummary, Location, Observation,
        SOURCE_OPEN_METEO,
    };
    use chrono::NaiveDate;

    pub(crate) fn sample_raw() -> RawWeatherData {
        let location = Location {
            city: "Toronto".into(),
            country: "Canada".into(),
            latitude: 43.6532,
            longitude: -79.3832,
        };

        let mut current = Observation::new(&location);
        current.temperature = Some(22.5);
        current.feels_like = Some(24.0);
        current.humidity = Some(65.0);
        current.weather_code = Some(1);
        current.wind_speed = Some(10.0);
        current.precipitation = Some(0.0);

        let mut day1 =
            DailyForecastRecord::new(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), &location);
        day1.temp_max = Some(25.0);
        day1.temp_min = Some(15.0);
        day1.precipitation = Some(0.0);
        day1.weather_code = Some(0);

        let mut day2 =
            DailyForecastRecord::new(NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(), &location);
        day2.temp_max = Some(23.0);
        day2.temp_min = Some(13.0);
        day2.precipitation = Some(2.0);
        day2.weather_code = Some(61);

        RawWeatherData {
            current: Some(current),
            forecast: vec![day1, day2],
            location,
            extraction_summary: ExtractionSummary {
                timestamp: Utc::now(),
                current_available: true,
                forecast_days: 2,
                source: SOURCE_OPEN_METEO.into(),
            },
        }
    }

    #[test]
    fn absent_input_yields_none() {
        assert!(transform(None).is_none());
    }

    #[test]
    fn full_input_is_good() {
        let record = transform(Some(sample_raw())).unwrap();
        assert_eq!(record.location.city, "Toronto");
        assert!(record.current_analysis.is_some());
        assert!(record.forecast_analysis.is_some());
        assert_eq!(record.data_quality.completeness, Completeness::Good);
        assert_eq!(record.data_quality.forecast_days, 2);
        assert!(record.recorded_at.is_none());
    }

    #[test]
    fn missing_current_is_partial() {
        let mut raw = sample_raw();
        raw.current = None;
        let record = transform(Some(raw)).unwrap();
        assert!(record.current_analysis.is_none());
        assert!(record.forecast_analysis.is_some());
        assert_eq!(record.data_quality.completeness, Completeness::Partial);
        assert!(!record.data_quality.current_available);
    }

    #[test]
    fn short_forecast_is_partial() {
        let mut raw = sample_raw();
        raw.forecast.truncate(1);
        let record = transform(Some(raw)).unwrap();
        assert!(record.current_analysis.is_some());
        assert!(record.forecast_analysis.is_none());
        assert_eq!(record.forecast_data.len(), 1);
        assert_eq!(record.data_quality.completeness, Completeness::Partial);
    }

    #[test]
    fn empty_input_still_transforms() {
        let mut raw = sample_raw();
        raw.current = None;
        raw.forecast.clear();
        let record = transform(Some(raw)).unwrap();
        assert_eq!(record.data_quality.completeness, Completeness::Partial);
        assert_eq!(record.data_quality.forecast_days, 0);
    }
}
