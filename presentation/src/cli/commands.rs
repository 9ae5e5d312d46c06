//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for forecast reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Formatted weather report
    Full,
    /// JSON output (the same shape the HTTP service returns)
    Json,
}

/// CLI arguments for weather-station
#[derive(Parser, Debug)]
#[command(name = "weather-station")]
#[command(author, version, about = "Sentiment weather report for a keyword")]
#[command(long_about = r#"
Weather Station reads the public mood around a keyword and reports it as weather.

Recent web results for the keyword are handed to two LLM providers at once
(Gemini and Groq, each falling back across model variants on quota errors).
Their sentiment splits are merged and classified into one of five forecasts:
sunny, partly cloudy, cloudy, rainy, or storm.

Credentials are read from the environment:
  GEMINI_API_KEY, GROQ_API_KEY             LLM providers (at least one)
  GOOGLE_SEARCH_API_KEY, GOOGLE_SEARCH_CX  Optional recent-news search

Configuration files are loaded from (in priority order):
1. --config <path>           Explicit config file
2. ./weather-station.toml    Project-level config
3. ~/.config/weather-station/config.toml   Global config

Example:
  weather-station "新作ゲーム"
  weather-station --output json "ラーメン"
  weather-station --serve --port 3001
"#)]
pub struct Cli {
    /// Keyword to forecast (not required with --serve)
    pub keyword: Option<String>,

    /// Run the HTTP service instead of a one-shot forecast
    #[arg(long)]
    pub serve: bool,

    /// Address to bind in serve mode (overrides config)
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to bind in serve mode (overrides config)
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
