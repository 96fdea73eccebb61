//! Forecast series normalization
//!
//! Turns the provider's parallel day-indexed pollutant series into one
//! [`ForecastDayRecord`] per day with its composite AQI.

use tracing::{debug, warn};

use crate::aqi::compute_composite_aqi;
use crate::error::AqiError;
use crate::models::forecast::parse_day;
use crate::models::pollutant::validate_concentration;
use crate::models::{DailyAverage, DailyForecast, ForecastDayRecord, Pollutant};

/// Normalize a provider daily forecast
pub fn normalize_forecast(forecast: &DailyForecast) -> crate::Result<Vec<ForecastDayRecord>> {
    normalize(&forecast.pm25, &forecast.pm10, &forecast.o3)
}

/// Build per-day records from parallel daily series.
///
/// The PM2.5 series defines the forecast days. PM10 and O3 entries are matched
/// by position; a series that is shorter (or empty) leaves that pollutant
/// absent for the remaining days. A day without a PM2.5 average gets no AQI.
pub fn normalize(
    pm25: &[DailyAverage],
    pm10: &[DailyAverage],
    o3: &[DailyAverage],
) -> crate::Result<Vec<ForecastDayRecord>> {
    if pm25.is_empty() {
        return Err(AqiError::data_unavailable("forecast.daily.pm25"));
    }

    for (pollutant, series) in [(Pollutant::Pm10, pm10), (Pollutant::O3, o3)] {
        if !series.is_empty() && series.len() != pm25.len() {
            warn!(
                "{} forecast has {} days but PM2.5 has {}, pairing by position",
                pollutant,
                series.len(),
                pm25.len()
            );
        }
    }

    let mut records = Vec::with_capacity(pm25.len());

    for (i, entry) in pm25.iter().enumerate() {
        let day_field = format!("forecast.daily.pm25[{i}].day");
        let day = entry
            .day
            .as_deref()
            .ok_or_else(|| AqiError::data_unavailable(day_field.clone()))?;
        let date = parse_day(&day_field, day)?;

        let pm25_avg =
            validate_concentration(&format!("forecast.daily.pm25[{i}].avg"), entry.avg)?;
        let pm10_avg = secondary_average(Pollutant::Pm10, pm10, i, day)?;
        let o3_avg = secondary_average(Pollutant::O3, o3, i, day)?;

        // Secondary pollutants default to 0 inside the composite, PM2.5 never does
        let aqi = match pm25_avg {
            Some(_) => Some(compute_composite_aqi(pm25_avg, pm10_avg, o3_avg)?.value),
            None => {
                debug!("No PM2.5 average for {}, leaving AQI absent", date);
                None
            }
        };

        records.push(ForecastDayRecord {
            date,
            pm25: pm25_avg,
            pm10: pm10_avg,
            o3: o3_avg,
            aqi,
        });
    }

    if !records.windows(2).all(|pair| pair[0].date <= pair[1].date) {
        warn!("PM2.5 forecast days are out of order, sorting by date");
        records.sort_by_key(|record| record.date);
    }

    debug!("Normalized {} forecast days", records.len());
    Ok(records)
}

/// Average of a secondary pollutant at `index`, absent when the series has no entry there
fn secondary_average(
    pollutant: Pollutant,
    series: &[DailyAverage],
    index: usize,
    day: &str,
) -> crate::Result<Option<f64>> {
    let Some(entry) = series.get(index) else {
        return Ok(None);
    };

    if let Some(other_day) = entry.day.as_deref() {
        if other_day.trim() != day.trim() {
            warn!(
                "{} entry {} is for {} but PM2.5 entry is for {}",
                pollutant, index, other_day, day
            );
        }
    }

    validate_concentration(
        &format!("forecast.daily.{}[{index}].avg", pollutant.key()),
        entry.avg,
    )
}
