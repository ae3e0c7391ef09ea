use super::analysis::{CurrentAnalysis, ForecastAnalysis};
use super::forecast::ForecastBatch;
use super::observation::{Location, Observation};
use chrono::{DateTime, Utc};
use super::timestamp::{deserialize_utc, deserialize_utc_opt};
use serde::{Deserialize, Serialize};

pub const SOURCE_OPEN_METEO: &str = "Open-Meteo API";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionSummary {
    #[serde(deserialize_with = "deserialize_utc")]
    pub timestamp: DateTime<Utc>,
    pub current_available: bool,
    pub forecast_days: usize,
    pub source: String,
}

/// Everything one extraction produced, handed to the transform stage as-is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawWeatherData {
    pub current: Option<Observation>,
    #[serde(default)]
    pub forecast: ForecastBatch,
    pub location: Location,
    pub extraction_summary: ExtractionSummary,
}

impl RawWeatherData {
    pub fn has_any_data(&self) -> bool {
        self.current.is_some() || !self.forecast.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Completeness {
    Good,
    Partial,
}

impl Completeness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Completeness::Good => "Good",
            Completeness::Partial => "Partial",
        }
    }
}

impl std::fmt::Display for Completeness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataQuality {
    pub current_available: bool,
    pub forecast_available: bool,
    pub forecast_days: usize,
    pub completeness: Completeness,
}

impl DataQuality {
    /// Completeness is derived from which analyses exist and nothing else
    pub fn assess(
        current: Option<&CurrentAnalysis>,
        forecast: Option<&ForecastAnalysis>,
        forecast_days: usize,
    ) -> Self {
        let completeness = if current.is_some() && forecast.is_some() {
            Completeness::Good
        } else {
            Completeness::Partial
        };
        Self {
            current_available: current.is_some(),
            forecast_available: forecast.is_some(),
            forecast_days,
            completeness,
        }
    }
}

/// One pipeline run's analyzed output; the unit of history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformedRecord {
    pub location: Location,
    pub extraction_info: ExtractionSummary,
    pub current_weather: Option<Observation>,
    pub current_analysis: Option<CurrentAnalysis>,
    #[serde(default)]
    pub forecast_data: ForecastBatch,
    pub forecast_analysis: Option<ForecastAnalysis>,
    #[serde(deserialize_with = "deserialize_utc")]
    pub transformation_timestamp: DateTime<Utc>,
    pub data_quality: DataQuality,
    /// Set when the record is accepted into the history
    #[serde(
        default,
        deserialize_with = "deserialize_utc_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub recorded_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PrecipitationForecast, TemperatureRange};

    fn current() -> CurrentAnalysis {
        CurrentAnalysis {
            temperature_celsius: Some(20.0),
            temperature_fahrenheit: 68.0,
            feels_like_celsius: Some(20.0),
            feels_like_fahrenheit: 68.0,
            humidity_level: "Comfortable".into(),
            weather_description: "Clear sky".into(),
            wind_description: "Calm".into(),
            comfort_index: "Very Comfortable".into(),
            precipitation_status: "No".into(),
        }
    }

    fn forecast() -> ForecastAnalysis {
        ForecastAnalysis {
            temperature_trend: "Stable".into(),
            temperature_range: TemperatureRange {
                highest: 20.0,
                lowest: 10.0,
                average_high: 19.0,
                average_low: 11.0,
            },
            precipitation_forecast: PrecipitationForecast {
                total_expected: 0.0,
                rainy_days: 0,
                heaviest_day: 0.0,
            },
            weather_summary: "3 clear days".into(),
            alerts: vec!["No weather alerts".into()],
        }
    }

    #[test]
    fn completeness_requires_both_analyses() {
        let c = current();
        let f = forecast();
        assert_eq!(
            DataQuality::assess(Some(&c), Some(&f), 7).completeness,
            Completeness::Good
        );
        assert_eq!(
            DataQuality::assess(Some(&c), None, 7).completeness,
            Completeness::Partial
        );
        assert_eq!(
            DataQuality::assess(None, Some(&f), 7).completeness,
            Completeness::Partial
        );
        let none = DataQuality::assess(None, None, 0);
        assert_eq!(none.completeness, Completeness::Partial);
        assert!(!none.current_available);
        assert!(!none.forecast_available);
    }

    #[test]
    fn completeness_serializes_as_label() {
        let json = serde_json::to_string(&Completeness::Good).unwrap();
        assert_eq!(json, "\"Good\"");
        assert_eq!(Completeness::Partial.to_string(), "Partial");
    }
}
