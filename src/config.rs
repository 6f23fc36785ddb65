//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! surf-config.toml file. It provides a centralized way to configure the two
//! tracked beaches, the forecast/tide endpoints, and refresh behavior.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration loaded from surf-config.toml
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// The two tracked beach locations
    pub beaches: Vec<BeachConfig>,
    /// Upstream API configuration
    pub sources: SourcesConfig,
    /// Display and refresh configuration
    pub display: DisplayConfig,
}

/// One beach location and its ideal wind bearing
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BeachConfig {
    /// Human-readable beach name shown in the panel header
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Ideal wind bearing for this break, degrees clockwise from true north
    pub desired_bearing_deg: f64,
}

/// Upstream forecast and tide endpoint configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourcesConfig {
    /// Base URL of the hourly wind forecast API
    pub forecast_url: String,
    /// Base URL of the tide extrema API
    pub tide_url: String,
}

/// Display and refresh configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Refresh period in minutes for the outer loop (cron/systemd timer)
    pub refresh_minutes: u64,
    /// Width of the hourly score bar chart in characters
    pub chart_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            beaches: vec![
                BeachConfig {
                    name: "Praia do Norte".to_string(),
                    latitude: -22.92,
                    longitude: -42.49,
                    // Cross-offshore from the ENE works best here
                    desired_bearing_deg: 70.0,
                },
                BeachConfig {
                    name: "Praia da Barra".to_string(),
                    latitude: -22.96,
                    longitude: -42.82,
                    desired_bearing_deg: 130.0,
                },
            ],
            sources: SourcesConfig {
                forecast_url: "https://api.open-meteo.com/v1/forecast".to_string(),
                tide_url: "https://api.marea.example.com/v1/extremes".to_string(),
            },
            display: DisplayConfig {
                refresh_minutes: 30,
                chart_width: 40,
            },
        }
    }
}

impl Config {
    /// Load configuration from surf-config.toml file
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path("surf-config.toml")
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Invalid config file format: {}", e);
                    eprintln!("Using default configuration");
                    Self::default()
                }
            },
            Err(_) => {
                eprintln!("Info: No config file found, using default configuration");
                Self::default()
            }
        }
    }

    /// Save current configuration to surf-config.toml
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let contents = toml::to_string_pretty(self)?;
        fs::write("surf-config.toml", contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.beaches.len(), 2);
        assert_eq!(config.beaches[0].desired_bearing_deg, 70.0);
        assert_eq!(config.display.refresh_minutes, 30);
        assert!(config.sources.forecast_url.starts_with("https://"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.beaches[0].name, parsed.beaches[0].name);
        assert_eq!(
            config.beaches[1].desired_bearing_deg,
            parsed.beaches[1].desired_bearing_deg
        );
    }

    #[test]
    fn test_load_nonexistent_file() {
        let config = Config::load_from_path("/nonexistent/path");
        // Should fallback to default
        assert_eq!(config.beaches.len(), 2);
    }

    #[test]
    fn test_load_from_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[[beaches]]
name = "Test Point"
latitude = 10.0
longitude = -20.0
desired_bearing_deg = 45.0

[sources]
forecast_url = "https://forecast.test"
tide_url = "https://tide.test"

[display]
refresh_minutes = 15
chart_width = 30
"#
        )
        .unwrap();

        let config = Config::load_from_path(file.path());
        assert_eq!(config.beaches.len(), 1);
        assert_eq!(config.beaches[0].name, "Test Point");
        assert_eq!(config.display.refresh_minutes, 15);
    }

    #[test]
    fn test_load_invalid_file_falls_back() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not = [valid").unwrap();

        let config = Config::load_from_path(file.path());
        assert_eq!(config.beaches.len(), 2);
    }
}
