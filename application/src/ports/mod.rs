//! Port definitions (interfaces for external adapters)
//!
//! Ports define the boundaries between the application layer and
//! external systems. Adapters in the infrastructure layer implement these.

pub mod llm_provider;
pub mod observation_logger;
pub mod progress;
pub mod search;
