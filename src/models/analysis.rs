use serde::{Deserialize, Serialize};

/// Derived descriptors for the current observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentAnalysis {
    pub temperature_celsius: Option<f64>,
    pub temperature_fahrenheit: f64,
    pub feels_like_celsius: Option<f64>,
    pub feels_like_fahrenheit: f64,
    pub humidity_level: String,
    pub weather_description: String,
    pub wind_description: String,
    pub comfort_index: String,
    pub precipitation_status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub highest: f64,
    pub lowest: f64,
    pub average_high: f64,
    pub average_low: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationForecast {
    pub total_expected: f64,
    pub rainy_days: usize,
    pub heaviest_day: f64,
}

/// Multi-day trend, statistics and alerts for a forecast batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastAnalysis {
    pub temperature_trend: String,
    pub temperature_range: TemperatureRange,
    pub precipitation_forecast: PrecipitationForecast,
    pub weather_summary: String,
    /// Never empty: holds a single "No weather alerts" entry when nothing fired
    pub alerts: Vec<String>,
}
