use serde::{Deserialize, Serialize};

/// WMO weather interpretation codes as reported by Open-Meteo.
const WEATHER_CODES: &[(i32, &str)] = &[
    (0, "Clear sky"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Fog"),
    (48, "Depositing rime fog"),
    (51, "Light drizzle"),
    (53, "Moderate drizzle"),
    (55, "Dense drizzle"),
    (56, "Light freezing drizzle"),
    (57, "Dense freezing drizzle"),
    (61, "Slight rain"),
    (63, "Moderate rain"),
    (65, "Heavy rain"),
    (66, "Light freezing rain"),
    (67, "Heavy freezing rain"),
    (71, "Slight snow"),
    (73, "Moderate snow"),
    (75, "Heavy snow"),
    (77, "Snow grains"),
    (80, "Slight rain showers"),
    (81, "Moderate rain showers"),
    (82, "Violent rain showers"),
    (85, "Slight snow showers"),
    (86, "Heavy snow showers"),
    (95, "Thunderstorm"),
    (96, "Thunderstorm with slight hail"),
    (99, "Thunderstorm with heavy hail"),
];

const RAIN_CODES: std::ops::Range<i32> = 51..82;
const SNOW_CODES: std::ops::Range<i32> = 71..87;

/// Look up the fixed description for a known code.
pub fn lookup(code: i32) -> Option<&'static str> {
    WEATHER_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, description)| *description)
}

/// Human readable description. Never fails; unknown and absent codes get a
/// fallback that embeds the value ("None" when absent).
pub fn describe(code: Option<i32>) -> String {
    match code {
        Some(c) => match lookup(c) {
            Some(description) => description.to_string(),
            None => format!("Unknown weather code: {}", c),
        },
        None => "Unknown weather code: None".to_string(),
    }
}

/// Coarse weather category for a single code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WeatherCategory {
    Clear,
    Cloudy,
    Rain,
    Snow,
    Thunderstorm,
    #[default]
    Unknown,
}

impl WeatherCategory {
    pub fn from_code(code: Option<i32>) -> Self {
        let Some(code) = code else {
            return WeatherCategory::Unknown;
        };
        match code {
            0 | 1 => WeatherCategory::Clear,
            2 | 3 => WeatherCategory::Cloudy,
            c if SNOW_CODES.contains(&c) => WeatherCategory::Snow,
            c if RAIN_CODES.contains(&c) => WeatherCategory::Rain,
            c if c >= 95 => WeatherCategory::Thunderstorm,
            _ => WeatherCategory::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCategory::Clear => "clear",
            WeatherCategory::Cloudy => "cloudy",
            WeatherCategory::Rain => "rainy",
            WeatherCategory::Snow => "snowy",
            WeatherCategory::Thunderstorm => "stormy",
            WeatherCategory::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Day counts per category for the week summary.
///
/// The rain range [51, 82) and the snow range [71, 87) overlap, so codes
/// 71..=81 are counted as both rainy and snowy. Historical summaries were
/// produced this way and the counts must stay comparable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryTally {
    pub clear: usize,
    pub cloudy: usize,
    pub rainy: usize,
    pub snowy: usize,
}

impl CategoryTally {
    pub fn from_codes(codes: impl IntoIterator<Item = i32>) -> Self {
        let mut tally = CategoryTally::default();
        for code in codes {
            if code == 0 || code == 1 {
                tally.clear += 1;
            }
            if code == 2 || code == 3 {
                tally.cloudy += 1;
            }
            if RAIN_CODES.contains(&code) {
                tally.rainy += 1;
            }
            if SNOW_CODES.contains(&code) {
                tally.snowy += 1;
            }
        }
        tally
    }

    pub fn is_empty(&self) -> bool {
        self.clear + self.cloudy + self.rainy + self.snowy == 0
    }

    /// Ordered (count, category) pairs used to build the summary text
    pub fn entries(&self) -> [(usize, WeatherCategory); 4] {
        [
            (self.clear, WeatherCategory::Clear),
            (self.cloudy, WeatherCategory::Cloudy),
            (self.rainy, WeatherCategory::Rain),
            (self.snowy, WeatherCategory::Snow),
        ]
    }
}
