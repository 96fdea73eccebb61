//! Provider response structures
//!
//! Deserialization of the two forecast sources the dashboard consumes: the
//! pollution-index feed and the statistical model service. Fetching them is
//! the caller's job; these types only turn the JSON bodies into engine inputs.

use serde::{Deserialize, Serialize};

use crate::error::AqiError;
use crate::models::{DailyForecast, Location, ModelPrediction};

/// Pollution-index feed response, `{"status": "ok", "data": {...}}`
#[derive(Debug, Clone, Deserialize)]
pub struct FeedResponse {
    pub status: String,
    #[serde(default)]
    pub data: Option<FeedPayload>,
}

/// The feed reports failures as a message string in place of the data object
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FeedPayload {
    Data(Box<FeedData>),
    Message(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedData {
    /// Provider's own AQI; a number, or "-" when the station is offline
    #[serde(default)]
    pub aqi: Option<serde_json::Value>,
    #[serde(default)]
    pub city: Option<FeedCity>,
    #[serde(default)]
    pub forecast: Option<FeedForecast>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedCity {
    #[serde(default)]
    pub name: Option<String>,
    /// `[latitude, longitude]`
    #[serde(default)]
    pub geo: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedForecast {
    #[serde(default)]
    pub daily: Option<DailyForecast>,
}

impl FeedResponse {
    pub fn from_json(body: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    fn data(&self) -> crate::Result<&FeedData> {
        if self.status != "ok" {
            return Err(AqiError::data_unavailable("status"));
        }
        match &self.data {
            Some(FeedPayload::Data(data)) => Ok(data),
            Some(FeedPayload::Message(_)) | None => Err(AqiError::data_unavailable("data")),
        }
    }

    /// Daily forecast series, required for the forecast views
    pub fn daily_forecast(&self) -> crate::Result<&DailyForecast> {
        self.data()?
            .forecast
            .as_ref()
            .and_then(|forecast| forecast.daily.as_ref())
            .ok_or_else(|| AqiError::data_unavailable("forecast.daily"))
    }

    /// The provider's reported AQI when it is numeric
    #[must_use]
    pub fn reported_aqi(&self) -> Option<u16> {
        let data = self.data().ok()?;
        data.aqi
            .as_ref()
            .and_then(serde_json::Value::as_u64)
            .and_then(|aqi| u16::try_from(aqi).ok())
    }

    /// Station location, when the feed includes coordinates
    #[must_use]
    pub fn location(&self) -> Option<Location> {
        let city = self.data().ok()?.city.as_ref()?;
        match city.geo.as_deref() {
            Some([latitude, longitude, ..]) => Some(Location::new(
                *latitude,
                *longitude,
                city.name.clone().unwrap_or_default(),
            )),
            _ => None,
        }
    }
}

/// Model forecast service response, `{"predictions": [{"date", "predicted_pm25"}]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelForecastResponse {
    #[serde(default)]
    pub predictions: Vec<ModelPrediction>,
}

impl ModelForecastResponse {
    pub fn from_json(body: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}
