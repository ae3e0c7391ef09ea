use chrono::{DateTime, NaiveDateTime, Utc};
use super::timestamp::{deserialize_naive_opt, deserialize_utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A single point-in-time weather reading. Units: °C, %, mm, km/h, degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Local observation time reported by the API
    #[serde(default, deserialize_with = "deserialize_naive_opt")]
    pub timestamp: Option<NaiveDateTime>,
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub feels_like: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub precipitation: Option<f64>,
    #[serde(default)]
    pub weather_code: Option<i32>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
    #[serde(default)]
    pub wind_direction: Option<f64>,
    #[serde(deserialize_with = "deserialize_utc")]
    pub extracted_at: DateTime<Utc>,
}

impl Observation {
    pub fn new(location: &Location) -> Self {
        Self {
            timestamp: None,
            city: location.city.clone(),
            country: location.country.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
            temperature: None,
            feels_like: None,
            humidity: None,
            precipitation: None,
            weather_code: None,
            wind_speed: None,
            wind_direction: None,
            extracted_at: Utc::now(),
        }
    }
}
