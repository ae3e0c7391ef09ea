use super::AlertRule;
use crate::models::{format_reading, DailyForecastRecord};

const COLD_DAY_MIN_C: f64 = -10.0;

/// Very cold weather alert, fires when the daily minimum drops below -10°C
pub struct ColdWeatherRule;

impl AlertRule for ColdWeatherRule {
    fn id(&self) -> &'static str {
        "cold_weather"
    }

    fn name(&self) -> &'static str {
        "Very Cold Weather"
    }

    fn evaluate(&self, day: &DailyForecastRecord) -> Option<String> {
        let temp_min = day.temp_min?;
        if temp_min >= COLD_DAY_MIN_C {
            return None;
        }

        Some(format!(
            "Very cold weather expected on {}: {}°C",
            day.date,
            format_reading(temp_min)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;
    use chrono::NaiveDate;

    fn day(temp_min: Option<f64>) -> DailyForecastRecord {
        let location = Location {
            city: "Winnipeg".into(),
            country: "Canada".into(),
            latitude: 49.9,
            longitude: -97.1,
        };
        let mut record =
            DailyForecastRecord::new(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), &location);
        record.temp_min = temp_min;
        record
    }

    #[test]
    fn threshold_is_exclusive() {
        assert!(ColdWeatherRule.evaluate(&day(Some(-10.0))).is_none());
        assert_eq!(
            ColdWeatherRule.evaluate(&day(Some(-10.5))).as_deref(),
            Some("Very cold weather expected on 2024-01-15: -10.5°C")
        );
    }

    #[test]
    fn missing_minimum_never_fires() {
        assert!(ColdWeatherRule.evaluate(&day(None)).is_none());
    }
}
