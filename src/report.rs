//! Dashboard report assembly
//!
//! Builds everything the dashboard views display from one snapshot of
//! location data. The snapshot is owned by the caller and passed in whole, so
//! every derived value comes from the same fetch.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::aqi::compute_composite_aqi;
use crate::config::EngineConfig;
use crate::error::AqiError;
use crate::forecast::{ForecastComparison, build_comparison_with, normalize_forecast};
use crate::models::{
    AirQualityImpact, AqiCategory, AqiReading, DailyForecast, ForecastDayRecord, Location,
    ModelPrediction, MoodScores,
};
use crate::mood::MoodDeriver;
use crate::payload::{FeedResponse, ModelForecastResponse};

/// Current pollutant concentrations in μg/m³
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentConcentrations {
    #[serde(default)]
    pub pm25: Option<f64>,
    #[serde(default)]
    pub pm10: Option<f64>,
    #[serde(default)]
    pub o3: Option<f64>,
}

impl CurrentConcentrations {
    /// True when no pollutant was measured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pm25.is_none() && self.pm10.is_none() && self.o3.is_none()
    }
}

/// All inputs for one location, fetched together
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationSnapshot {
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub current: CurrentConcentrations,
    #[serde(default)]
    pub forecast: Option<DailyForecast>,
    #[serde(default)]
    pub model: Vec<ModelPrediction>,
    /// AQI published by the feed, used when nothing was measured
    #[serde(default)]
    pub reported_aqi: Option<u16>,
}

impl LocationSnapshot {
    /// Assemble a snapshot from the two provider responses
    pub fn from_responses(
        feed: &FeedResponse,
        model: &ModelForecastResponse,
        current: CurrentConcentrations,
    ) -> crate::Result<Self> {
        Ok(Self {
            location: feed.location(),
            current,
            forecast: Some(feed.daily_forecast()?.clone()),
            model: model.predictions.clone(),
            reported_aqi: feed.reported_aqi(),
        })
    }
}

/// Current conditions panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// AQI computed from measured concentrations
    pub reading: Option<AqiReading>,
    /// AQI published by the feed
    pub reported_aqi: Option<u16>,
    /// The AQI shown: computed when available, reported otherwise
    pub aqi: u16,
    pub category: AqiCategory,
    pub impact: AirQualityImpact,
}

impl CurrentConditions {
    /// Resolve the displayed AQI; `None` when neither source has a value
    fn resolve(reading: Option<AqiReading>, reported_aqi: Option<u16>) -> Option<Self> {
        let aqi = reading.map(|reading| reading.value).or(reported_aqi)?;
        Some(Self {
            reading,
            reported_aqi,
            aqi,
            category: AqiCategory::from_aqi(aqi),
            impact: AirQualityImpact::from_aqi(aqi),
        })
    }
}

/// Everything the dashboard renders for one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub location: Option<Location>,
    /// `None` when the snapshot has no current air quality at all
    pub current: Option<CurrentConditions>,
    pub forecast: Vec<ForecastDayRecord>,
    pub comparison: ForecastComparison,
    /// Derived from the current AQI, absent along with it
    pub mood: Option<MoodScores>,
}

impl DashboardReport {
    /// Build the report for `snapshot`.
    ///
    /// Fails with `DataUnavailable` when the snapshot has no daily forecast and
    /// with `MalformedInput` for unusable readings; the caller decides whether
    /// to show a placeholder or keep its previous report.
    pub fn build(snapshot: &LocationSnapshot, config: &EngineConfig) -> crate::Result<Self> {
        let concentrations = &snapshot.current;
        let reading = if concentrations.is_empty() {
            None
        } else {
            let reading = compute_composite_aqi(
                concentrations.pm25,
                concentrations.pm10,
                concentrations.o3,
            )?;
            debug!(
                "Current AQI {} from {}",
                reading.value, reading.contributing_pollutant
            );
            Some(reading)
        };
        let current = CurrentConditions::resolve(reading, snapshot.reported_aqi);
        if current.is_none() {
            warn!("No current concentrations or reported AQI, leaving current conditions empty");
        }

        let daily = snapshot
            .forecast
            .as_ref()
            .ok_or_else(|| AqiError::data_unavailable("forecast.daily"))?;
        let forecast = normalize_forecast(daily)?;
        let comparison = build_comparison_with(&forecast, &snapshot.model, &config.axis_policy())?;
        let deriver = MoodDeriver::new(config.mood_settings());
        let mood = current.as_ref().map(|current| deriver.derive(current.aqi));

        info!(
            "Built dashboard report for {}: AQI {}, {} forecast days, {} model days",
            snapshot
                .location
                .as_ref()
                .map_or_else(|| "unknown location".to_string(), Location::display_name),
            current
                .as_ref()
                .map_or_else(|| "n/a".to_string(), |current| current.aqi.to_string()),
            forecast.len(),
            comparison.model.points.len()
        );

        Ok(Self {
            location: snapshot.location.clone(),
            current,
            forecast,
            comparison,
            mood,
        })
    }
}
