use crate::models::{celsius_to_fahrenheit, describe, round1, CurrentAnalysis, Observation};

/// Derive comfort, humidity and wind descriptors plus Fahrenheit conversions.
///
/// A missing temperature converts as 0°C ("32.0°F") and a missing
/// precipitation value reads as "No". Downstream reports depend on this
/// substitution, so absence is not propagated into the Fahrenheit fields.
pub fn analyze_current(observation: Option<&Observation>) -> Option<CurrentAnalysis> {
    let obs = observation?;

    Some(CurrentAnalysis {
        temperature_celsius: obs.temperature,
        temperature_fahrenheit: to_fahrenheit(obs.temperature.unwrap_or(0.0)),
        feels_like_celsius: obs.feels_like,
        feels_like_fahrenheit: to_fahrenheit(obs.feels_like.unwrap_or(0.0)),
        humidity_level: humidity_level(obs.humidity).to_string(),
        weather_description: describe(obs.weather_code),
        wind_description: wind_description(obs.wind_speed).to_string(),
        comfort_index: comfort_index(obs.temperature, obs.humidity).to_string(),
        precipitation_status: precipitation_status(obs.precipitation).to_string(),
    })
}

/// Celsius to Fahrenheit rounded to one decimal
pub fn to_fahrenheit(celsius: f64) -> f64 {
    round1(celsius_to_fahrenheit(celsius))
}

pub fn humidity_level(humidity: Option<f64>) -> &'static str {
    match humidity {
        None => "Unknown",
        Some(h) if h < 30.0 => "Low (Dry)",
        Some(h) if h < 60.0 => "Comfortable",
        Some(h) if h < 80.0 => "High",
        Some(_) => "Very High (Humid)",
    }
}

pub fn wind_description(wind_speed: Option<f64>) -> &'static str {
    match wind_speed {
        None => "Unknown",
        Some(w) if w < 5.0 => "Calm",
        Some(w) if w < 15.0 => "Light breeze",
        Some(w) if w < 25.0 => "Moderate wind",
        Some(w) if w < 35.0 => "Strong wind",
        Some(_) => "Very strong wind",
    }
}

/// Comfort bands, first match wins:
/// - 18-24°C at 40-60% humidity: Very Comfortable
/// - 15-27°C at 30-70% humidity: Comfortable
/// - 10-30°C at any humidity: Acceptable
pub fn comfort_index(temperature: Option<f64>, humidity: Option<f64>) -> &'static str {
    let (Some(temp), Some(humidity)) = (temperature, humidity) else {
        return "Unknown";
    };

    if (18.0..=24.0).contains(&temp) && (40.0..=60.0).contains(&humidity) {
        "Very Comfortable"
    } else if (15.0..=27.0).contains(&temp) && (30.0..=70.0).contains(&humidity) {
        "Comfortable"
    } else if (10.0..=30.0).contains(&temp) {
        "Acceptable"
    } else {
        "Uncomfortable"
    }
}

pub fn precipitation_status(precipitation: Option<f64>) -> &'static str {
    if precipitation.unwrap_or(0.0) > 0.0 {
        "Yes"
    } else {
        "No"
    }
}
