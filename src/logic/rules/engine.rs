use super::{
    cold_weather::ColdWeatherRule, heat_stress::HeatStressRule,
    heavy_precipitation::HeavyPrecipitationRule, thunderstorm::ThunderstormRule, AlertRule,
};
use crate::models::DailyForecastRecord;

pub const NO_ALERTS: &str = "No weather alerts";

pub struct AlertEngine {
    rules: Vec<Box<dyn AlertRule>>,
}

impl AlertEngine {
    pub fn new() -> Self {
        // Order matters: alerts for one day are emitted in this sequence
        let rules: Vec<Box<dyn AlertRule>> = vec![
            Box::new(HeatStressRule),
            Box::new(ColdWeatherRule),
            Box::new(HeavyPrecipitationRule),
            Box::new(ThunderstormRule),
        ];

        Self { rules }
    }

    /// Evaluate every rule against every day, in chronological order.
    /// Rules fire independently; an empty result becomes `[NO_ALERTS]`.
    pub fn evaluate(&self, days: &[DailyForecastRecord]) -> Vec<String> {
        let alerts: Vec<String> = days
            .iter()
            .flat_map(|day| self.rules.iter().filter_map(move |rule| rule.evaluate(day)))
            .collect();

        if alerts.is_empty() {
            vec![NO_ALERTS.to_string()]
        } else {
            alerts
        }
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for AlertEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;
    use chrono::NaiveDate;

    fn day(d: u32) -> DailyForecastRecord {
        let location = Location {
            city: "Toronto".into(),
            country: "Canada".into(),
            latitude: 43.6532,
            longitude: -79.3832,
        };
        let mut record =
            DailyForecastRecord::new(NaiveDate::from_ymd_opt(2024, 7, d).unwrap(), &location);
        record.temp_max = Some(25.0);
        record.temp_min = Some(15.0);
        record.precipitation = Some(0.0);
        record.weather_code = Some(1);
        record
    }

    #[test]
    fn quiet_week_yields_sentinel() {
        let engine = AlertEngine::new();
        let alerts = engine.evaluate(&[day(1), day(2), day(3)]);
        assert_eq!(alerts, vec!["No weather alerts".to_string()]);
    }

    #[test]
    fn empty_batch_yields_sentinel() {
        assert_eq!(AlertEngine::new().evaluate(&[]), vec![NO_ALERTS.to_string()]);
    }

    #[test]
    fn rules_fire_independently_in_order() {
        let mut stormy = day(2);
        stormy.temp_max = Some(32.5);
        stormy.precipitation = Some(15.2);
        stormy.weather_code = Some(95);

        let mut hot = day(3);
        hot.temp_max = Some(31.0);

        let alerts = AlertEngine::new().evaluate(&[day(1), stormy, hot]);
        assert_eq!(
            alerts,
            vec![
                "Hot weather expected on 2024-07-02: 32.5°C".to_string(),
                "Heavy precipitation expected on 2024-07-02: 15.2mm".to_string(),
                "Thunderstorm possible on 2024-07-02".to_string(),
                "Hot weather expected on 2024-07-03: 31.0°C".to_string(),
            ]
        );
    }

    #[test]
    fn lists_all_rules() {
        let ids: Vec<_> = AlertEngine::new()
            .list_rules()
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(
            ids,
            vec!["heat_stress", "cold_weather", "heavy_precipitation", "thunderstorm"]
        );
    }
}
