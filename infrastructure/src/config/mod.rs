//! Configuration file loading for weather-station
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `WEATHER_STATION_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./weather-station.toml` or `./.weather-station.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/weather-station/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAnalysisConfig, FileConfig, FileGeminiConfig,
    FileGoogleSearchConfig, FileGroqConfig, FileLoggingConfig, FileProvidersConfig,
    FileSearchConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
