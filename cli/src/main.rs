//! CLI entrypoint for Weather Station
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use station_application::{
    AnalysisParams, AnalysisProgressNotifier, AnalyzeSentimentUseCase, NoObservationLogger,
    NoProgress, ObservationLogger, RunForecastUseCase, SearchGateway,
};
use station_domain::Keyword;
use station_infrastructure::{
    ConfigLoader, FileConfig, GoogleSearchGateway, JsonlObservationLogger, build_http_client,
    build_providers,
};
use station_presentation::{
    Cli, ConsoleFormatter, OutputFormat, OutputFormatter, ProgressReporter, SimpleProgress,
};
use std::io::IsTerminal;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration before logging, the log directory lives there
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if cli.show_config {
        println!("{}", ConfigLoader::describe_sources(cli.config.as_ref()));
        println!();
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let _log_guard = init_logging(cli.verbose, &config)?;
    config.validate().context("Invalid configuration")?;

    info!("Starting Weather Station");

    // === Dependency Injection ===
    let client = build_http_client()?;

    let providers = build_providers(&config.providers, &client);

    let google = GoogleSearchGateway::new(client, &config.search.google);
    if google.is_configured() {
        info!("Search: Google Custom Search");
    } else {
        info!("Search: disabled, forecasts rely on model knowledge");
    }
    let search: Arc<dyn SearchGateway> = Arc::new(google);

    let observations: Arc<dyn ObservationLogger> = match &config.logging.observations {
        Some(path) => match JsonlObservationLogger::open(path) {
            Some(logger) => {
                info!("Recording observations to {}", logger.path().display());
                Arc::new(logger)
            }
            None => Arc::new(NoObservationLogger),
        },
        None => Arc::new(NoObservationLogger),
    };

    let params = AnalysisParams::default()
        .with_provider_timeout_seconds(config.analysis.provider_timeout_seconds)
        .with_max_sources(config.analysis.max_sources);

    let analyzer =
        Arc::new(AnalyzeSentimentUseCase::new(providers, params).with_logger(observations));
    let forecast = Arc::new(RunForecastUseCase::new(search, analyzer));

    // Serve mode
    if cli.serve {
        let host = cli.host.unwrap_or(config.server.host);
        let port = cli.port.unwrap_or(config.server.port);
        let addr = format!("{}:{}", host, port);

        let token = CancellationToken::new();
        tokio::spawn(station_presentation::shutdown_signal(token.clone()));

        station_presentation::serve(&addr, forecast, token).await?;
        return Ok(());
    }

    // One-shot mode - keyword is required
    let keyword = match cli.keyword {
        Some(k) => Keyword::try_new(k)?,
        None => bail!("A keyword is required. Use --serve to run the HTTP service."),
    };

    if forecast.analyzer().provider_names().is_empty() {
        warn!("No providers available; the forecast will be the default verdict");
    }

    // Spinners need a terminal; piped stderr gets plain lines
    let progress: Box<dyn AnalysisProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };
    let report = forecast
        .execute_with_progress(&keyword, progress.as_ref())
        .await;

    let formatter: &dyn OutputFormatter = &ConsoleFormatter;
    let output = match cli.output {
        OutputFormat::Full => formatter.format(&report),
        OutputFormat::Json => formatter.format_json(&report),
    };

    println!("{}", output);

    Ok(())
}

/// Install the tracing subscriber.
///
/// `RUST_LOG` takes precedence over `-v`. When `[logging] directory` is set,
/// a daily rolling file receives the same events; the returned guard must be
/// held until exit so buffered lines are flushed.
fn init_logging(verbose: u8, config: &FileConfig) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match &config.logging.directory {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir))?;
            let appender = tracing_appender::rolling::daily(dir, "weather-station.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}
