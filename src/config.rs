//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local use.

use crate::models::Coords;
use std::env;
use std::path::PathBuf;

/// Default slot name, kept compatible with the browser app's storage key.
pub const DEFAULT_SLOT: &str = "workouts";

/// Default zoom level for map render and recenter.
pub const DEFAULT_ZOOM_LEVEL: u8 = 13;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding persisted slots
    pub data_dir: PathBuf,
    /// Name of the slot holding the workout history
    pub slot: String,
    /// Zoom level used when rendering or recentering the map
    pub map_zoom_level: u8,
    /// Fixed position reported by the headless geolocation collaborator
    pub home_position: Option<Coords>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            slot: DEFAULT_SLOT.to_string(),
            map_zoom_level: DEFAULT_ZOOM_LEVEL,
            home_position: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let map_zoom_level = match env::var("MAP_ZOOM_LEVEL") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("MAP_ZOOM_LEVEL", raw))?,
            Err(_) => DEFAULT_ZOOM_LEVEL,
        };

        let home_position = match (env::var("HOME_LAT"), env::var("HOME_LNG")) {
            (Ok(lat), Ok(lng)) => Some(parse_home_position(&lat, &lng)?),
            (Err(_), Err(_)) => None,
            (Ok(_), Err(_)) => return Err(ConfigError::Missing("HOME_LNG")),
            (Err(_), Ok(_)) => return Err(ConfigError::Missing("HOME_LAT")),
        };

        Ok(Self {
            data_dir: env::var("WORKOUTS_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            slot: env::var("WORKOUTS_SLOT")
                .map(|v| v.trim().to_string())
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_SLOT.to_string()),
            map_zoom_level,
            home_position,
        })
    }
}

fn parse_home_position(lat: &str, lng: &str) -> Result<Coords, ConfigError> {
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid("HOME_LAT", lat.to_string()))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid("HOME_LNG", lng.to_string()))?;

    let coords = Coords::new(lat, lng);
    if !coords.is_valid() {
        return Err(ConfigError::Invalid(
            "HOME_LAT/HOME_LNG",
            format!("{lat},{lng}"),
        ));
    }
    Ok(coords)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
