//! Web search adapters

mod google;

pub use google::GoogleSearchGateway;
