//! Application-level configuration.
//!
//! - [`AnalysisParams`]: provider timeout and source count

pub mod analysis_params;

pub use analysis_params::AnalysisParams;
