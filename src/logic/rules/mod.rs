pub mod cold_weather;
pub mod engine;
pub mod heat_stress;
pub mod heavy_precipitation;
pub mod thunderstorm;

pub use engine::AlertEngine;

use crate::models::DailyForecastRecord;

/// Trait for per-day forecast alert rules
pub trait AlertRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate one forecast day and return an alert message if triggered
    fn evaluate(&self, day: &DailyForecastRecord) -> Option<String>;
}
