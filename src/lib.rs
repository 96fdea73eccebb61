//! `airmood` - Air quality index engine for a pollution dashboard
//!
//! This library converts pollutant concentrations into EPA AQI values,
//! normalizes daily pollutant forecasts, lines up provider and model forecasts
//! for charting, and derives well-being estimates from the AQI.

pub mod aqi;
pub mod config;
pub mod error;
pub mod forecast;
pub mod logging;
pub mod models;
pub mod mood;
pub mod payload;
pub mod report;

// Re-export core types for public API
pub use aqi::{compute_composite_aqi, compute_sub_index};
pub use config::EngineConfig;
pub use error::{AqiError, ErrorKind};
pub use forecast::{ForecastComparison, build_comparison, normalize_forecast};
pub use models::{AqiCategory, AqiReading, ForecastDayRecord, MoodScores, MoodStatus, Pollutant};
pub use mood::{MoodDeriver, classify, derive_mood};
pub use payload::{FeedResponse, ModelForecastResponse};
pub use report::{DashboardReport, LocationSnapshot};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AqiError>;
