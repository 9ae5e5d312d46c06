//! Port for structured observation logging.
//!
//! Defines the [`ObservationLogger`] trait for recording analysis events
//! (model attempts, issued forecasts) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures a
//! machine-readable history of observations (JSONL).

use serde_json::Value;

/// A structured observation event for logging.
///
/// Each event has a type string and a JSON payload containing
/// event-specific fields. Timestamps are added by the writer.
pub struct ObservationEvent {
    /// Event type identifier (e.g., "provider_attempt", "forecast_issued").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ObservationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging observation events.
///
/// `log` is synchronous and infallible; a broken log must never change
/// the outcome of an analysis.
pub trait ObservationLogger: Send + Sync {
    /// Record an observation event.
    fn log(&self, event: ObservationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoObservationLogger;

impl ObservationLogger for NoObservationLogger {
    fn log(&self, _event: ObservationEvent) {}
}
