use super::AlertRule;
use crate::models::DailyForecastRecord;

/// WMO codes 95, 96 and 99 are thunderstorms
const THUNDERSTORM_CODE: i32 = 95;

pub struct ThunderstormRule;

impl AlertRule for ThunderstormRule {
    fn id(&self) -> &'static str {
        "thunderstorm"
    }

    fn name(&self) -> &'static str {
        "Thunderstorm"
    }

    fn evaluate(&self, day: &DailyForecastRecord) -> Option<String> {
        match day.weather_code {
            Some(code) if code >= THUNDERSTORM_CODE => {
                Some(format!("Thunderstorm possible on {}", day.date))
            }
            _ => None,
        }
    }
}
