//! Weather subdomain: classification of sentiment into weather and the
//! verdict that carries it.

pub mod classify;
pub mod verdict;

pub use classify::Weather;
pub use verdict::WeatherVerdict;
