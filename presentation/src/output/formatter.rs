//! Output formatter trait

use station_domain::ForecastReport;

/// Trait for formatting forecast reports
pub trait OutputFormatter {
    /// Format the complete report
    fn format(&self, report: &ForecastReport) -> String;

    /// Format as JSON
    fn format_json(&self, report: &ForecastReport) -> String;
}
