use super::observation::Location;
use chrono::{DateTime, NaiveDate, Utc};
use super::timestamp::deserialize_utc;
use serde::{Deserialize, Serialize};

/// One day of forecast. Temperatures in °C, precipitation in mm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecastRecord {
    pub date: NaiveDate,
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub temp_max: Option<f64>,
    #[serde(default)]
    pub temp_min: Option<f64>,
    #[serde(default)]
    pub precipitation: Option<f64>,
    #[serde(default)]
    pub weather_code: Option<i32>,
    #[serde(default)]
    pub wind_speed_max: Option<f64>,
    #[serde(default)]
    pub wind_direction: Option<f64>,
    #[serde(deserialize_with = "deserialize_utc")]
    pub extracted_at: DateTime<Utc>,
}

impl DailyForecastRecord {
    pub fn new(date: NaiveDate, location: &Location) -> Self {
        Self {
            date,
            city: location.city.clone(),
            country: location.country.clone(),
            temp_max: None,
            temp_min: None,
            precipitation: None,
            weather_code: None,
            wind_speed_max: None,
            wind_direction: None,
            extracted_at: Utc::now(),
        }
    }
}

/// Chronologically ordered daily forecast
pub type ForecastBatch = Vec<DailyForecastRecord>;
