//! Forecast models: raw provider series and normalized per-day records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AqiError;

/// Date format used by both forecast sources
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// One entry of a provider's daily series, e.g. `{"day": "2024-03-01", "avg": 87}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DailyAverage {
    /// Calendar day as `YYYY-MM-DD`
    #[serde(default)]
    pub day: Option<String>,
    /// Daily average concentration
    #[serde(default)]
    pub avg: Option<f64>,
}

impl DailyAverage {
    #[must_use]
    pub fn new(day: &str, avg: f64) -> Self {
        Self {
            day: Some(day.to_string()),
            avg: Some(avg),
        }
    }
}

/// Day-indexed parallel series for the pollutants the provider forecasts.
///
/// PM2.5 is required for a usable forecast; PM10 and O3 may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DailyForecast {
    #[serde(default)]
    pub pm25: Vec<DailyAverage>,
    #[serde(default)]
    pub pm10: Vec<DailyAverage>,
    #[serde(default)]
    pub o3: Vec<DailyAverage>,
}

/// One day of the statistical model's PM2.5 forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPrediction {
    pub date: String,
    #[serde(default)]
    pub predicted_pm25: Option<f64>,
}

impl ModelPrediction {
    #[must_use]
    pub fn new(date: &str, predicted_pm25: f64) -> Self {
        Self {
            date: date.to_string(),
            predicted_pm25: Some(predicted_pm25),
        }
    }
}

/// Normalized forecast for a single day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDayRecord {
    pub date: NaiveDate,
    pub pm25: Option<f64>,
    pub pm10: Option<f64>,
    pub o3: Option<f64>,
    /// Composite AQI; absent whenever `pm25` is absent
    pub aqi: Option<u16>,
}

/// Parse a `YYYY-MM-DD` day string, naming `field` on failure
pub fn parse_day(field: &str, day: &str) -> Result<NaiveDate, AqiError> {
    NaiveDate::parse_from_str(day.trim(), DAY_FORMAT)
        .map_err(|e| AqiError::malformed(field, format!("invalid date '{day}': {e}")))
}
