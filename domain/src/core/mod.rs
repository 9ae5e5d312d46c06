//! Core domain concepts shared across all subdomains.
//!
//! - [`keyword::Keyword`]: the validated topic to forecast
//! - [`provider::ProviderRole`]: primary/secondary analysis provider slot
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod keyword;
pub mod provider;
