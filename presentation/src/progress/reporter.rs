//! Progress reporting for forecast analysis

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use station_application::ports::progress::{AnalysisProgressNotifier, AttemptOutcome};
use station_domain::WeatherVerdict;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with one spinner per provider
pub struct ProgressReporter {
    multi: MultiProgress,
    bars: Mutex<HashMap<String, ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            bars: Mutex::new(HashMap::new()),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn with_bar(&self, provider: &str, f: impl FnOnce(&ProgressBar)) {
        if let Ok(bars) = self.bars.lock()
            && let Some(pb) = bars.get(provider)
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisProgressNotifier for ProgressReporter {
    fn on_analysis_start(&self, providers: &[String]) {
        let Ok(mut bars) = self.bars.lock() else {
            return;
        };
        for provider in providers {
            let pb = self.multi.add(ProgressBar::new_spinner());
            pb.set_style(Self::spinner_style());
            pb.set_prefix(provider.clone());
            pb.set_message("Waiting...");
            pb.enable_steady_tick(Duration::from_millis(100));
            bars.insert(provider.clone(), pb);
        }
    }

    fn on_model_attempt(&self, provider: &str, model: &str) {
        self.with_bar(provider, |pb| pb.set_message(format!("asking {}", model.cyan())));
    }

    fn on_model_outcome(&self, provider: &str, model: &str, outcome: AttemptOutcome) {
        if outcome.tries_next_variant() {
            self.with_bar(provider, |pb| {
                pb.set_message(format!("{} {}", model, outcome.as_str().yellow()))
            });
        }
    }

    fn on_provider_complete(&self, provider: &str, success: bool) {
        let status = if success {
            "v done".green().to_string()
        } else {
            "x no data".red().to_string()
        };
        self.with_bar(provider, |pb| pb.finish_with_message(status));
    }

    fn on_analysis_complete(&self, verdict: &WeatherVerdict) {
        if let Ok(mut bars) = self.bars.lock() {
            for (_, pb) in bars.drain() {
                if !pb.is_finished() {
                    pb.finish_and_clear();
                }
            }
        }
        let _ = self.multi.println(format!(
            "{} {}",
            "->".cyan(),
            verdict.weather_label.bold()
        ));
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl AnalysisProgressNotifier for SimpleProgress {
    fn on_analysis_start(&self, providers: &[String]) {
        eprintln!("{} Asking {}", "->".cyan(), providers.join(" + ").bold());
    }

    fn on_model_outcome(&self, provider: &str, model: &str, outcome: AttemptOutcome) {
        if outcome.tries_next_variant() {
            eprintln!("  {} {} {} ({})", "~".yellow(), provider, model, outcome.as_str());
        }
    }

    fn on_provider_complete(&self, provider: &str, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), provider);
        } else {
            eprintln!("  {} {} (no data)", "x".red(), provider);
        }
    }
}
