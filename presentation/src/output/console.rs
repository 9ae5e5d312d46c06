//! Console output formatter for forecast reports

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use station_domain::{ForecastReport, Weather};

const BAR_WIDTH: usize = 40;

/// Formats forecast reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete report
    pub fn format(report: &ForecastReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("「{}」界隈の天気", report.keyword)));
        output.push('\n');

        output.push_str(&format!(
            "\n  {}  {}\n\n",
            report.weather.emoji(),
            Self::paint_weather(report.weather, &report.weather_label)
        ));

        output.push_str(&format!(
            "  {}\n",
            Self::sentiment_bar(report.positive, report.negative, report.neutral)
        ));
        output.push_str(&format!(
            "  {} {}%  {} {}%  {} {}%\n",
            "ポジティブ".green(),
            report.positive,
            "ネガティブ".red(),
            report.negative,
            "ニュートラル".dimmed(),
            report.neutral
        ));

        output.push_str(&Self::section_header("空気感の原因"));
        output.push_str(&format!("{}\n", report.root_cause));

        if !report.highlighted_event.is_empty() {
            output.push_str(&Self::section_header("注目の出来事"));
            output.push_str(&format!("{}\n", report.highlighted_event));
        }

        output.push_str(&Self::section_header("お天気キャスター"));
        output.push_str(&format!("{}\n", report.forecaster_message.italic()));

        if !report.analysis_sources.is_empty() {
            output.push_str(&format!(
                "\n{} {}\n",
                "Analyzed by:".dimmed(),
                report.analysis_sources.join(" + ")
            ));
        }

        if !report.sources.is_empty() {
            output.push_str(&Self::section_header("Sources"));
            for (i, source) in report.sources.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, source.title.bold()));
                if !source.snippet.is_empty() {
                    output.push_str(&format!("     {}\n", source.snippet.dimmed()));
                }
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(report: &ForecastReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Cell counts of the positive, negative and neutral bar segments
    pub fn bar_segments(positive: i32, negative: i32, neutral: i32) -> (usize, usize, usize) {
        let total = (positive.max(0) + negative.max(0) + neutral.max(0)).max(1) as usize;
        let cells = |value: i32| (value.max(0) as usize * BAR_WIDTH + total / 2) / total;

        let pos = cells(positive).min(BAR_WIDTH);
        let neg = cells(negative).min(BAR_WIDTH - pos);
        (pos, neg, BAR_WIDTH - pos - neg)
    }

    fn sentiment_bar(positive: i32, negative: i32, neutral: i32) -> String {
        let (pos, neg, neu) = Self::bar_segments(positive, negative, neutral);
        format!(
            "{}{}{}",
            "█".repeat(pos).green(),
            "█".repeat(neg).red(),
            "░".repeat(neu).dimmed()
        )
    }

    fn paint_weather(weather: Weather, label: &str) -> String {
        let text = label.bold();
        match weather {
            Weather::Sunny => text.yellow().to_string(),
            Weather::PartlyCloudy => text.bright_yellow().to_string(),
            Weather::Cloudy => text.white().to_string(),
            Weather::Rainy => text.blue().to_string(),
            Weather::Storm => text.magenta().to_string(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n  {}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", format!("── {} ──", title).cyan().bold())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, report: &ForecastReport) -> String {
        Self::format(report)
    }

    fn format_json(&self, report: &ForecastReport) -> String {
        Self::format_json(report)
    }
}
