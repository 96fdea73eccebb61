//! Dual-source forecast comparison
//!
//! Aligns the provider's daily forecast and the statistical model's PM2.5
//! predictions as two AQI series sharing one display range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aqi::compute_composite_aqi;
use crate::models::forecast::parse_day;
use crate::models::pollutant::validate_concentration;
use crate::models::{ForecastDayRecord, ModelPrediction};

pub const API_SERIES_LABEL: &str = "API Forecasted AQI";
pub const MODEL_SERIES_LABEL: &str = "Model Predicted AQI";

/// One day of a comparison series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub aqi: Option<u16>,
}

/// A named AQI series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledSeries {
    pub label: String,
    pub points: Vec<SeriesPoint>,
}

impl LabeledSeries {
    /// AQI values that are present, in order
    pub fn present_values(&self) -> impl Iterator<Item = u16> + '_ {
        self.points.iter().filter_map(|point| point.aqi)
    }
}

/// Shared y-axis range for both series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisRange {
    pub y_min: u32,
    pub y_max: u32,
}

/// How the shared range is padded around the data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisPolicy {
    /// Factor applied to the smallest value (<= 1.0)
    pub lower_padding: f64,
    /// Factor applied to the largest value (>= 1.0)
    pub upper_padding: f64,
    /// Range used when neither series has a value
    pub default_range: AxisRange,
}

impl Default for AxisPolicy {
    fn default() -> Self {
        Self {
            lower_padding: 0.9,
            upper_padding: 1.1,
            default_range: AxisRange { y_min: 0, y_max: 100 },
        }
    }
}

impl AxisPolicy {
    /// Padded range covering `values`, or the default range when there are none
    #[must_use]
    pub fn range_for(&self, values: impl IntoIterator<Item = u16>) -> AxisRange {
        let bounds = values.into_iter().fold(None, |acc: Option<(u16, u16)>, v| {
            Some(acc.map_or((v, v), |(lo, hi)| (lo.min(v), hi.max(v))))
        });

        let Some((min, max)) = bounds else {
            return self.default_range;
        };

        let y_min = (f64::from(min) * self.lower_padding).floor().max(0.0) as u32;
        let y_max = (f64::from(max) * self.upper_padding).ceil().max(0.0) as u32;

        AxisRange {
            y_min,
            y_max: y_max.max(y_min),
        }
    }
}

/// Both forecast sources on compatible axes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastComparison {
    pub api: LabeledSeries,
    pub model: LabeledSeries,
    pub axis: AxisRange,
}

/// Compare the two forecast sources using the default axis padding
pub fn build_comparison(
    api_series: &[ForecastDayRecord],
    model_series: &[ModelPrediction],
) -> crate::Result<ForecastComparison> {
    build_comparison_with(api_series, model_series, &AxisPolicy::default())
}

/// Compare the two forecast sources.
///
/// Model predictions are PM2.5 only and go through the composite resolver with
/// the other pollutants absent. Absent values on either side stay absent and
/// are left out of the shared range.
pub fn build_comparison_with(
    api_series: &[ForecastDayRecord],
    model_series: &[ModelPrediction],
    policy: &AxisPolicy,
) -> crate::Result<ForecastComparison> {
    let api = LabeledSeries {
        label: API_SERIES_LABEL.to_string(),
        points: api_series
            .iter()
            .map(|record| SeriesPoint {
                date: record.date,
                aqi: record.aqi,
            })
            .collect(),
    };

    let mut model_points = Vec::with_capacity(model_series.len());
    for (i, prediction) in model_series.iter().enumerate() {
        let date = parse_day(&format!("predictions[{i}].date"), &prediction.date)?;
        let pm25 = validate_concentration(
            &format!("predictions[{i}].predicted_pm25"),
            prediction.predicted_pm25,
        )?;
        let aqi = match pm25 {
            Some(_) => Some(compute_composite_aqi(pm25, None, None)?.value),
            None => None,
        };
        model_points.push(SeriesPoint { date, aqi });
    }

    let model = LabeledSeries {
        label: MODEL_SERIES_LABEL.to_string(),
        points: model_points,
    };

    let axis = policy.range_for(api.present_values().chain(model.present_values()));
    debug!(
        "Comparison of {} API days and {} model days, axis {}..{}",
        api.points.len(),
        model.points.len(),
        axis.y_min,
        axis.y_max
    );

    Ok(ForecastComparison { api, model, axis })
}
