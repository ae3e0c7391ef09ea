use super::rules::AlertEngine;
use crate::models::{
    round1, CategoryTally, DailyForecastRecord, ForecastAnalysis, PrecipitationForecast,
    TemperatureRange,
};

/// Mean difference between forecast halves that counts as a trend (°C)
const TREND_THRESHOLD_C: f64 = 2.0;

/// Analyze a chronologically ordered forecast batch.
///
/// Returns `None` for fewer than two days, or when no day carries a maximum
/// or no day carries a minimum temperature.
pub fn analyze_forecast(days: &[DailyForecastRecord]) -> Option<ForecastAnalysis> {
    if days.len() < 2 {
        return None;
    }

    let max_temps: Vec<f64> = days.iter().filter_map(|d| d.temp_max).collect();
    let min_temps: Vec<f64> = days.iter().filter_map(|d| d.temp_min).collect();
    if max_temps.is_empty() || min_temps.is_empty() {
        return None;
    }

    let precipitation: Vec<f64> = days.iter().map(|d| d.precipitation.unwrap_or(0.0)).collect();

    Some(ForecastAnalysis {
        temperature_trend: temperature_trend(&max_temps).to_string(),
        temperature_range: TemperatureRange {
            highest: max_temps.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            lowest: min_temps.iter().copied().fold(f64::INFINITY, f64::min),
            average_high: round1(mean(&max_temps)),
            average_low: round1(mean(&min_temps)),
        },
        precipitation_forecast: PrecipitationForecast {
            total_expected: round1(precipitation.iter().sum()),
            rainy_days: precipitation.iter().filter(|p| **p > 0.0).count(),
            heaviest_day: precipitation.iter().copied().fold(0.0, f64::max),
        },
        weather_summary: week_summary(days),
        alerts: AlertEngine::new().evaluate(days),
    })
}

/// Compare the mean of the first half of the series with the second half.
/// For odd lengths the second half is one sample longer.
pub fn temperature_trend(temperatures: &[f64]) -> &'static str {
    if temperatures.len() < 3 {
        return "Insufficient data";
    }

    let (first_half, second_half) = temperatures.split_at(temperatures.len() / 2);
    let diff = mean(second_half) - mean(first_half);

    if diff > TREND_THRESHOLD_C {
        "Warming trend"
    } else if diff < -TREND_THRESHOLD_C {
        "Cooling trend"
    } else {
        "Stable"
    }
}

/// "2 clear days, 1 rainy day" style summary of the week
pub fn week_summary(days: &[DailyForecastRecord]) -> String {
    if days.is_empty() {
        return "No forecast data available".to_string();
    }

    let tally = CategoryTally::from_codes(days.iter().filter_map(|d| d.weather_code));
    if tally.is_empty() {
        return "Mixed conditions".to_string();
    }

    tally
        .entries()
        .iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, category)| {
            let plural = if *count > 1 { "s" } else { "" };
            format!("{} {} day{}", count, category, plural)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len().max(1) as f64
}
