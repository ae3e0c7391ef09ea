use crate::config::{LocationConfig, OpenMeteoConfig};
use crate::error::{Result, WeatherEtlError};
use crate::models::{
    DailyForecastRecord, ExtractionSummary, ForecastBatch, Location, Observation, RawWeatherData,
    SOURCE_OPEN_METEO,
};
use crate::models::timestamp::parse_naive;
use chrono::{NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,\
precipitation,weather_code,wind_speed_10m,wind_direction_10m";

const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,precipitation_sum,\
weather_code,wind_speed_10m_max,wind_direction_10m_dominant";

pub struct OpenMeteoClient {
    client: reqwest::Client,
    base_url: String,
    location: Location,
    timezone: String,
    forecast_days: u32,
}

// Open-Meteo API response structures
#[derive(Debug, Deserialize)]
struct OmCurrentResponse {
    #[serde(default)]
    current: Option<OmCurrent>,
}

#[derive(Debug, Deserialize)]
struct OmCurrent {
    #[serde(default)]
    time: Option<String>,
    #[serde(default)]
    temperature_2m: Option<f64>,
    #[serde(default)]
    relative_humidity_2m: Option<f64>,
    #[serde(default)]
    apparent_temperature: Option<f64>,
    #[serde(default)]
    precipitation: Option<f64>,
    #[serde(default)]
    weather_code: Option<i32>,
    #[serde(default)]
    wind_speed_10m: Option<f64>,
    #[serde(default)]
    wind_direction_10m: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    #[serde(default)]
    daily: Option<OmDaily>,
}

// Parallel arrays indexed by day; any of them may be short or hold nulls
#[derive(Debug, Deserialize)]
struct OmDaily {
    #[serde(default)]
    time: Vec<String>,
    #[serde(default)]
    temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    precipitation_sum: Vec<Option<f64>>,
    #[serde(default)]
    weather_code: Vec<Option<i32>>,
    #[serde(default)]
    wind_speed_10m_max: Vec<Option<f64>>,
    #[serde(default)]
    wind_direction_10m_dominant: Vec<Option<f64>>,
}

fn at<T: Copy>(values: &[Option<T>], i: usize) -> Option<T> {
    values.get(i).copied().flatten()
}

impl OpenMeteoClient {
    pub fn new(location: &LocationConfig, config: &OpenMeteoConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("weather-etl/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            location: Location {
                city: location.city.clone(),
                country: location.country.clone(),
                latitude: location.latitude,
                longitude: location.longitude,
            },
            timezone: location.timezone.clone(),
            forecast_days: config.forecast_days,
        })
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    fn current_url(&self) -> String {
        format!(
            "{}?latitude={}&longitude={}&current={}&timezone={}",
            self.base_url, self.location.latitude, self.location.longitude, CURRENT_FIELDS,
            self.timezone
        )
    }

    fn forecast_url(&self, days: u32) -> String {
        format!(
            "{}?latitude={}&longitude={}&daily={}&timezone={}&forecast_days={}",
            self.base_url,
            self.location.latitude,
            self.location.longitude,
            DAILY_FIELDS,
            self.timezone,
            days
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response =
            self.client.get(url).send().await.map_err(|e| {
                WeatherEtlError::DataSourceUnavailable(format!("Open-Meteo: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherEtlError::DataSourceUnavailable(format!(
                "Open-Meteo returned {}: {}",
                status, body
            )));
        }

        response.json().await.map_err(|e| {
            WeatherEtlError::DataSourceUnavailable(format!(
                "Failed to parse Open-Meteo response: {}",
                e
            ))
        })
    }

    /// Fetch current conditions for the configured location
    pub async fn fetch_current(&self) -> Result<Observation> {
        tracing::info!(
            "Fetching current weather for {}, {}",
            self.location.city,
            self.location.country
        );
        let response: OmCurrentResponse = self.get_json(&self.current_url()).await?;
        let observation = self.convert_current(response)?;
        tracing::info!(
            temperature = ?observation.temperature,
            "Successfully fetched current weather"
        );
        Ok(observation)
    }

    /// Fetch a daily forecast of `days` days
    pub async fn fetch_forecast(&self, days: u32) -> Result<ForecastBatch> {
        tracing::info!("Fetching {}-day forecast for {}", days, self.location.city);
        let response: OmForecastResponse = self.get_json(&self.forecast_url(days)).await?;
        let forecast = self.convert_forecast(response)?;
        tracing::info!("Successfully fetched {} days of forecast", forecast.len());
        Ok(forecast)
    }

    /// Fetch both parts. Each part degrades on its own: a failed current
    /// fetch yields `None`, a failed forecast fetch an empty batch.
    pub async fn extract(&self) -> RawWeatherData {
        tracing::info!("Starting weather data extraction for {}", self.location.city);

        let current = match self.fetch_current().await {
            Ok(obs) => Some(obs),
            Err(e) => {
                tracing::warn!("Error fetching current weather: {}", e);
                None
            }
        };

        let forecast = match self.fetch_forecast(self.forecast_days).await {
            Ok(days) => days,
            Err(e) => {
                tracing::warn!("Error fetching forecast data: {}", e);
                Vec::new()
            }
        };

        tracing::info!(
            current_available = current.is_some(),
            forecast_days = forecast.len(),
            "Extracted weather data"
        );

        RawWeatherData {
            extraction_summary: ExtractionSummary {
                timestamp: Utc::now(),
                current_available: current.is_some(),
                forecast_days: forecast.len(),
                source: SOURCE_OPEN_METEO.to_string(),
            },
            current,
            forecast,
            location: self.location.clone(),
        }
    }

    /// Test connection to the Open-Meteo API
    pub async fn test_connection(&self) -> Result<bool> {
        let response = self
            .client
            .get(self.forecast_url(1))
            .send()
            .await
            .map_err(|e| WeatherEtlError::DataSourceUnavailable(format!("Open-Meteo: {}", e)))?;

        Ok(response.status().is_success())
    }

    fn convert_current(&self, response: OmCurrentResponse) -> Result<Observation> {
        let current = response.current.ok_or_else(|| {
            WeatherEtlError::InvalidData("Open-Meteo response has no 'current' block".into())
        })?;

        let mut obs = Observation::new(&self.location);
        obs.timestamp = current.time.as_deref().and_then(parse_naive);
        obs.temperature = current.temperature_2m;
        obs.feels_like = current.apparent_temperature;
        obs.humidity = current.relative_humidity_2m;
        obs.precipitation = current.precipitation;
        obs.weather_code = current.weather_code;
        obs.wind_speed = current.wind_speed_10m;
        obs.wind_direction = current.wind_direction_10m;
        Ok(obs)
    }

    fn convert_forecast(&self, response: OmForecastResponse) -> Result<ForecastBatch> {
        let daily = response.daily.ok_or_else(|| {
            WeatherEtlError::InvalidData("Open-Meteo response has no 'daily' block".into())
        })?;

        let mut days = Vec::with_capacity(daily.time.len());
        for (i, date_str) in daily.time.iter().enumerate() {
            let Ok(date) = NaiveDate::parse_from_str(date_str, "%Y-%m-%d") else {
                tracing::warn!(date = %date_str, "Skipping forecast day with invalid date");
                continue;
            };

            let mut day = DailyForecastRecord::new(date, &self.location);
            day.temp_max = at(&daily.temperature_2m_max, i);
            day.temp_min = at(&daily.temperature_2m_min, i);
            day.precipitation = at(&daily.precipitation_sum, i);
            day.weather_code = at(&daily.weather_code, i);
            day.wind_speed_max = at(&daily.wind_speed_10m_max, i);
            day.wind_direction = at(&daily.wind_direction_10m_dominant, i);
            days.push(day);
        }

        Ok(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn client() -> OpenMeteoClient {
        let config = Config::default();
        OpenMeteoClient::new(&config.location, &config.openmeteo).unwrap()
    }

    #[test]
    fn urls_carry_location_and_fields() {
        let client = client();
        let url = client.current_url();
        assert!(url.starts_with("https://api.open-meteo.com/v1/forecast?"));
        assert!(url.contains("latitude=43.6532"));
        assert!(url.contains("longitude=-79.3832"));
        assert!(url.contains("apparent_temperature"));
        assert!(url.contains("timezone=America/Toronto"));

        let url = client.forecast_url(7);
        assert!(url.contains("daily=temperature_2m_max"));
        assert!(url.contains("forecast_days=7"));
    }

    #[test]
    fn converts_current_block() {
        let json = r#"{
            "latitude": 43.65,
            "current": {
                "time": "2024-01-15T10:00",
                "interval": 900,
                "temperature_2m": -3.4,
                "relative_humidity_2m": 81,
                "apparent_temperature": -8.1,
                "precipitation": 0.0,
                "weather_code": 71,
                "wind_speed_10m": 14.2,
                "wind_direction_10m": 270
            }
        }"#;
        let response: OmCurrentResponse = serde_json::from_str(json).unwrap();
        let obs = client().convert_current(response).unwrap();

        assert_eq!(obs.city, "Toronto");
        assert_eq!(
            obs.timestamp,
            NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(10, 0, 0)
        );
        assert_eq!(obs.temperature, Some(-3.4));
        assert_eq!(obs.feels_like, Some(-8.1));
        assert_eq!(obs.humidity, Some(81.0));
        assert_eq!(obs.weather_code, Some(71));
        assert_eq!(obs.wind_direction, Some(270.0));
    }

    #[test]
    fn missing_current_block_is_error() {
        let response: OmCurrentResponse = serde_json::from_str("{}").unwrap();
        assert!(client().convert_current(response).is_err());
    }

    #[test]
    fn converts_daily_arrays_with_gaps() {
        let json = r#"{
            "daily": {
                "time": ["2024-01-15", "2024-01-16", "2024-01-17"],
                "temperature_2m_max": [1.5, null, 3.0],
                "temperature_2m_min": [-4.0, -5.5],
                "precipitation_sum": [0.0, 2.4, 11.0],
                "weather_code": [3, 73, 95],
                "wind_speed_10m_max": [20.1, 18.0, 30.5],
                "wind_direction_10m_dominant": [250, 260, 270]
            }
        }"#;
        let response: OmForecastResponse = serde_json::from_str(json).unwrap();
        let days = client().convert_forecast(response).unwrap();

        assert_eq!(days.len(), 3);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(days[0].temp_max, Some(1.5));
        assert_eq!(days[1].temp_max, None);
        assert_eq!(days[2].temp_min, None);
        assert_eq!(days[2].precipitation, Some(11.0));
        assert_eq!(days[2].weather_code, Some(95));
        assert_eq!(days[1].city, "Toronto");
    }

    #[test]
    fn invalid_dates_are_skipped() {
        let json = r#"{"daily": {"time": ["2024-01-15", "not-a-date"], "temperature_2m_max": [1.0, 2.0]}}"#;
        let response: OmForecastResponse = serde_json::from_str(json).unwrap();
        let days = client().convert_forecast(response).unwrap();
        assert_eq!(days.len(), 1);
    }
}
