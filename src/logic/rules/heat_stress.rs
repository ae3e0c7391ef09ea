use super::AlertRule;
use crate::models::{format_reading, DailyForecastRecord};

const HOT_DAY_MAX_C: f64 = 30.0;

/// Hot weather alert
///
/// Conditions:
/// - Forecast daily maximum above 30°C
pub struct HeatStressRule;

impl AlertRule for HeatStressRule {
    fn id(&self) -> &'static str {
        "heat_stress"
    }

    fn name(&self) -> &'static str {
        "Hot Weather"
    }

    fn evaluate(&self, day: &DailyForecastRecord) -> Option<String> {
        let temp_max = day.temp_max?;
        if temp_max <= HOT_DAY_MAX_C {
            return None;
        }

        Some(format!(
            "Hot weather expected on {}: {}°C",
            day.date,
            format_reading(temp_max)
        ))
    }
}
