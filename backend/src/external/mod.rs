//! Weather data sources

pub mod mock;
pub mod weather;

pub use mock::MockWeatherSource;
pub use weather::{FileWeatherSource, WeatherSource};
