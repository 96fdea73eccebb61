//! Forecast processing
//!
//! Normalizes the provider's daily pollutant series into per-day AQI records
//! and lines them up against the statistical model's predictions.

pub mod comparison;
pub mod normalizer;

pub use comparison::{
    AxisPolicy, AxisRange, ForecastComparison, LabeledSeries, SeriesPoint, build_comparison,
    build_comparison_with,
};
pub use normalizer::{normalize, normalize_forecast};
