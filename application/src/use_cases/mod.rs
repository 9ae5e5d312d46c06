//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod analyze_sentiment;
pub mod provider_client;
pub mod run_forecast;
