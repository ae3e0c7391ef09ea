use crate::error::{Result, WeatherEtlError};
use dialoguer::Input;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "WEATHER_ETL_DATA_DIR";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub location: LocationConfig,
    #[serde(default)]
    pub openmeteo: OpenMeteoConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocationConfig {
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_timezone() -> String {
    "auto".into()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenMeteoConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1/forecast".into()
}

fn default_forecast_days() -> u32 {
    7
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for OpenMeteoConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            forecast_days: default_forecast_days(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Load config from the override path or the standard locations.
    /// Falls back to the built-in default location when no file exists.
    pub fn load(config_override: Option<&PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(WeatherEtlError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                Some(p.clone())
            }
            None => Self::find_config_path(),
        };

        let config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => {
                tracing::info!("No config file found, using default location");
                Config::default()
            }
        };

        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .map_err(|e| WeatherEtlError::Config(format!("Failed to read config: {}", e)))?;

        let config_str = Self::substitute_env_vars(&config_str);

        let config: Config = serde_yaml::from_str(&config_str)
            .map_err(|e| WeatherEtlError::Config(format!("Failed to parse config: {}", e)))?;

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Search for config.yaml in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        dirs::config_dir()
            .map(|dir| dir.join("weather-etl").join("config.yaml"))
            .filter(|p| p.exists())
    }

    /// Default path for writing new config files (~/.config/weather-etl/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| WeatherEtlError::Config("Cannot determine config directory".into()))?
            .join("weather-etl");
        Ok(config_dir.join("config.yaml"))
    }

    pub fn validate(&self) -> Result<()> {
        let loc = &self.location;
        if !(-90.0..=90.0).contains(&loc.latitude) {
            return Err(WeatherEtlError::Config(format!(
                "latitude {} out of range",
                loc.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&loc.longitude) {
            return Err(WeatherEtlError::Config(format!(
                "longitude {} out of range",
                loc.longitude
            )));
        }
        if !(1..=16).contains(&self.openmeteo.forecast_days) {
            return Err(WeatherEtlError::Config(format!(
                "forecast_days must be between 1 and 16, got {}",
                self.openmeteo.forecast_days
            )));
        }
        Ok(())
    }

    /// Run interactive setup prompts and write config to disk.
    pub fn setup_interactive(path: Option<&PathBuf>) -> Result<(Self, PathBuf)> {
        let defaults = Config::default();

        println!();
        println!("Location");
        let city: String = Input::new()
            .with_prompt("  City")
            .default(defaults.location.city.clone())
            .interact_text()
            .map_err(|e| WeatherEtlError::Config(format!("Input error: {}", e)))?;

        let country: String = Input::new()
            .with_prompt("  Country")
            .default(defaults.location.country.clone())
            .interact_text()
            .map_err(|e| WeatherEtlError::Config(format!("Input error: {}", e)))?;

        let latitude: f64 = Input::new()
            .with_prompt("  Latitude")
            .default(defaults.location.latitude)
            .interact_text()
            .map_err(|e| WeatherEtlError::Config(format!("Input error: {}", e)))?;

        let longitude: f64 = Input::new()
            .with_prompt("  Longitude")
            .default(defaults.location.longitude)
            .interact_text()
            .map_err(|e| WeatherEtlError::Config(format!("Input error: {}", e)))?;

        let timezone: String = Input::new()
            .with_prompt("  Timezone (IANA name or 'auto')")
            .default(defaults.location.timezone.clone())
            .interact_text()
            .map_err(|e| WeatherEtlError::Config(format!("Input error: {}", e)))?;

        println!();
        println!("Forecast");
        let forecast_days: u32 = Input::new()
            .with_prompt("  Forecast days (1-16)")
            .default(defaults.openmeteo.forecast_days)
            .interact_text()
            .map_err(|e| WeatherEtlError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            location: LocationConfig {
                city,
                country,
                latitude,
                longitude,
                timezone,
            },
            openmeteo: OpenMeteoConfig {
                forecast_days,
                ..OpenMeteoConfig::default()
            },
            storage: StorageConfig::default(),
        };
        config.validate()?;

        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path()?,
        };
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| WeatherEtlError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# weather-etl configuration\n# Generated by `weather-etl init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        let re = match regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") {
            Ok(re) => re,
            Err(_) => return result,
        };

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }

    /// Resolve the artifact directory and make sure it exists.
    pub fn data_dir(&self, data_dir_override: Option<&PathBuf>) -> Result<PathBuf> {
        // CLI override takes priority
        if let Some(dir) = data_dir_override {
            std::fs::create_dir_all(dir)?;
            return Ok(dir.clone());
        }

        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            let p = PathBuf::from(dir);
            std::fs::create_dir_all(&p)?;
            return Ok(p);
        }

        if let Some(ref dir) = self.storage.data_dir {
            std::fs::create_dir_all(dir)?;
            return Ok(dir.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| WeatherEtlError::Config("Cannot determine data directory".into()))?
            .join("weather-etl");

        std::fs::create_dir_all(&data_dir)?;
        Ok(data_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location: LocationConfig {
                city: "Toronto".into(),
                country: "Canada".into(),
                latitude: 43.6532,
                longitude: -79.3832,
                timezone: "America/Toronto".into(),
            },
            openmeteo: OpenMeteoConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}
