use super::AlertRule;
use crate::models::{format_reading, DailyForecastRecord};

const HEAVY_PRECIPITATION_MM: f64 = 10.0;

/// Heavy precipitation alert
///
/// Conditions:
/// - Daily precipitation sum above 10mm (missing sums count as 0)
pub struct HeavyPrecipitationRule;

impl AlertRule for HeavyPrecipitationRule {
    fn id(&self) -> &'static str {
        "heavy_precipitation"
    }

    fn name(&self) -> &'static str {
        "Heavy Precipitation"
    }

    fn evaluate(&self, day: &DailyForecastRecord) -> Option<String> {
        let precipitation = day.precipitation.unwrap_or(0.0);
        if precipitation <= HEAVY_PRECIPITATION_MM {
            return None;
        }

        Some(format!(
            "Heavy precipitation expected on {}: {}mm",
            day.date,
            format_reading(precipitation)
        ))
    }
}
