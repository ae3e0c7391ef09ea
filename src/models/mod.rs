pub mod analysis;
pub mod forecast;
pub mod observation;
pub mod record;
pub mod run_log;
pub mod timestamp;
pub mod weather_code;

pub use analysis::*;
pub use forecast::*;
pub use observation::*;
pub use record::*;
pub use run_log::*;
pub use weather_code::{describe, CategoryTally, WeatherCategory};

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

/// Round to one decimal place, ties to even
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Format a reading for alert text. Whole numbers keep one decimal ("31.0")
/// so messages match those already in the history.
pub fn format_reading(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celsius_to_fahrenheit_known_values() {
        assert!((celsius_to_fahrenheit(0.0) - 32.0).abs() < 0.001);
        assert!((celsius_to_fahrenheit(100.0) - 212.0).abs() < 0.001);
        assert!((celsius_to_fahrenheit(-40.0) - (-40.0)).abs() < 0.001);
    }

    #[test]
    fn round1_values() {
        assert_eq!(round1(72.5), 72.5);
        assert_eq!(round1(75.19999), 75.2);
        assert_eq!(round1(14.04), 14.0);
        assert_eq!(round1(-3.26), -3.3);
    }

    #[test]
    fn format_reading_values() {
        assert_eq!(format_reading(31.0), "31.0");
        assert_eq!(format_reading(-12.0), "-12.0");
        assert_eq!(format_reading(32.5), "32.5");
        assert_eq!(format_reading(15.25), "15.25");
        assert_eq!(format_reading(0.1), "0.1");
    }

    #[test]
    fn round1_ties_go_to_even() {
        assert_eq!(round1(24.25), 24.2);
        assert_eq!(round1(24.75), 24.8);
        assert_eq!(round1(0.25), 0.2);
        assert_eq!(round1(-0.25), -0.2);
    }
}
