//! Data models for the airmood engine
//!
//! This module contains the value objects passed between the engine stages:
//! - Pollutant: pollutant kinds and single-pollutant samples
//! - Reading: composite AQI readings and EPA categories
//! - Forecast: raw provider series and normalized per-day records
//! - Mood: well-being scores and their classifications
//! - Location: where a snapshot was taken

pub mod forecast;
pub mod location;
pub mod mood;
pub mod pollutant;
pub mod reading;

// Re-export all public types for convenient access
pub use forecast::{DailyAverage, DailyForecast, ForecastDayRecord, ModelPrediction};
pub use location::Location;
pub use mood::{AirQualityImpact, MoodScores, MoodStatus, MoodTrend};
pub use pollutant::{Pollutant, PollutantSample};
pub use reading::{AqiCategory, AqiReading};
