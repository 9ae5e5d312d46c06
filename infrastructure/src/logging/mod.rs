//! Structured observation logging

mod jsonl_logger;

pub use jsonl_logger::JsonlObservationLogger;
