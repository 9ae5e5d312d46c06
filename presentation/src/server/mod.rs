//! HTTP forecast service
//!
//! | Method | Path | Body |
//! |--------|------|------|
//! | `POST` | `/api/analyze` | `{"keyword": "..."}` → forecast report |
//! | `GET` | `/api/health` | → `{"status": "ok", "providers": [...]}` |

mod error;
mod routes;

pub use error::{ErrorBody, ServerError};
pub use routes::{AnalyzeRequest, HealthResponse, create_route};

use axum::Router;
use station_application::RunForecastUseCase;
use std::sync::Arc;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::{self, TraceLayer};
use tracing::{info, warn};

/// Router with request tracing and permissive CORS
pub fn build_app(forecast: Arc<RunForecastUseCase>) -> Router {
    create_route(forecast)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new())
                .on_request(trace::DefaultOnRequest::new().level(tracing::Level::DEBUG))
                .on_response(trace::DefaultOnResponse::new().level(tracing::Level::INFO)),
        )
        .layer(CorsLayer::permissive())
}

/// Bind `addr` and serve until `token` is cancelled
pub async fn serve(
    addr: &str,
    forecast: Arc<RunForecastUseCase>,
    token: CancellationToken,
) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })?;
    let providers = forecast.analyzer().provider_names();
    info!(
        "Weather station listening on http://{} (providers: {})",
        listener.local_addr()?,
        providers.join(", ")
    );

    axum::serve(listener, build_app(forecast))
        .with_graceful_shutdown(async move { token.cancelled().await })
        .await?;

    info!("Server shutdown");
    Ok(())
}

/// Cancel `token` on Ctrl-C or SIGTERM
pub async fn shutdown_signal(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("failed to install Ctrl+C handler: {err}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!("failed to install signal handler: {err}");
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
        _ = token.cancelled() => return,
    }

    info!("Signal received, starting graceful shutdown");
    token.cancel();
}
