//! Composite AQI across pollutants

use super::breakpoints::BreakpointTable;
use super::calculator::compute_sub_index;
use crate::models::pollutant::validate_concentration;
use crate::models::{AqiReading, Pollutant, PollutantSample};

/// Sub-index for each pollutant, absent concentrations counted as 0.
///
/// Returned in [`Pollutant::ALL`] order.
pub fn sub_indices(
    pm25: Option<f64>,
    pm10: Option<f64>,
    o3: Option<f64>,
) -> crate::Result<[(Pollutant, u16); 3]> {
    let concentrations = [
        validate_concentration(Pollutant::Pm25.key(), pm25)?,
        validate_concentration(Pollutant::Pm10.key(), pm10)?,
        validate_concentration(Pollutant::O3.key(), o3)?,
    ];

    let mut indices = [(Pollutant::Pm25, 0); 3];
    for (i, pollutant) in Pollutant::ALL.into_iter().enumerate() {
        let table = BreakpointTable::for_pollutant(pollutant);
        indices[i] = (pollutant, compute_sub_index(concentrations[i].unwrap_or(0.0), table));
    }
    Ok(indices)
}

/// Resolve the reported AQI for one sample.
///
/// The worst pollutant determines the AQI. Absent pollutants count as a
/// concentration of 0. On a tie the pollutant declared first in [`Pollutant`]
/// is reported, so an all-absent sample reads `0` attributed to PM2.5.
///
/// Fails with `MalformedInput` when a present concentration is negative or
/// not finite.
pub fn compute_composite_aqi(
    pm25: Option<f64>,
    pm10: Option<f64>,
    o3: Option<f64>,
) -> crate::Result<AqiReading> {
    let indices = sub_indices(pm25, pm10, o3)?;

    let (pollutant, value) = indices
        .into_iter()
        .fold((Pollutant::Pm25, 0), |best, candidate| {
            if candidate.1 > best.1 { candidate } else { best }
        });

    Ok(AqiReading::new(value, pollutant))
}

/// Resolve the reported AQI from individual samples.
///
/// A pollutant sampled more than once keeps its last sample; unsampled
/// pollutants are absent.
pub fn composite_from_samples(samples: &[PollutantSample]) -> crate::Result<AqiReading> {
    let mut concentrations = [None; 3];
    for sample in samples {
        let slot = match sample.pollutant {
            Pollutant::Pm25 => 0,
            Pollutant::Pm10 => 1,
            Pollutant::O3 => 2,
        };
        concentrations[slot] = sample.validated()?;
    }
    let [pm25, pm10, o3] = concentrations;
    compute_composite_aqi(pm25, pm10, o3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aqi::breakpoints::{O3_TABLE, PM10_TABLE, PM25_TABLE};
    use crate::error::ErrorKind;

    #[test]
    fn test_pm25_dominates() {
        let reading = compute_composite_aqi(Some(10.0), Some(0.0), Some(0.0)).unwrap();
        assert_eq!(reading, AqiReading::new(42, Pollutant::Pm25));
    }

    #[test]
    fn test_worst_pollutant_wins() {
        let reading = compute_composite_aqi(Some(10.0), Some(160.0), Some(60.0)).unwrap();
        assert_eq!(reading.contributing_pollutant, Pollutant::Pm10);
        assert_eq!(reading.value, compute_sub_index(160.0, &PM10_TABLE));
    }

    #[test]
    fn test_all_absent_is_zero_attributed_to_pm25() {
        let reading = compute_composite_aqi(None, None, None).unwrap();
        assert_eq!(reading, AqiReading::new(0, Pollutant::Pm25));
    }

    #[test]
    fn test_tie_resolves_to_lowest_pollutant() {
        // PM10 54 and O3 54 both map to 50
        let reading = compute_composite_aqi(None, Some(54.0), Some(54.0)).unwrap();
        assert_eq!(reading, AqiReading::new(50, Pollutant::Pm10));

        let reading = compute_composite_aqi(Some(12.0), Some(54.0), Some(54.0)).unwrap();
        assert_eq!(reading, AqiReading::new(50, Pollutant::Pm25));
    }

    #[test]
    fn test_out_of_range_pollutant_never_wins() {
        // O3 above its table reads 0
        let reading = compute_composite_aqi(Some(10.0), None, Some(250.0)).unwrap();
        assert_eq!(reading, AqiReading::new(42, Pollutant::Pm25));
    }

    #[test]
    fn test_malformed_input_is_rejected() {
        let err = compute_composite_aqi(Some(10.0), Some(-3.0), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        assert_eq!(err.field(), Some("pm10"));

        let err = compute_composite_aqi(Some(f64::INFINITY), None, None).unwrap_err();
        assert_eq!(err.field(), Some("pm25"));
    }

    #[test]
    fn test_composite_is_max_of_sub_indices() {
        let grid = [0.0, 5.5, 12.0, 30.0, 54.0, 75.0, 101.0, 180.0, 260.0, 420.0, 550.0];
        for &a in &grid {
            for &b in &grid {
                for &c in &grid {
                    let expected = compute_sub_index(a, &PM25_TABLE)
                        .max(compute_sub_index(b, &PM10_TABLE))
                        .max(compute_sub_index(c, &O3_TABLE));
                    let reading = compute_composite_aqi(Some(a), Some(b), Some(c)).unwrap();
                    assert_eq!(reading.value, expected, "({a}, {b}, {c})");
                }
            }
        }
    }

    #[test]
    fn test_composite_from_samples() {
        let samples = [
            PollutantSample::new(Pollutant::O3, Some(80.0)),
            PollutantSample::new(Pollutant::Pm25, Some(10.0)),
        ];
        let reading = composite_from_samples(&samples).unwrap();
        assert_eq!(reading.contributing_pollutant, Pollutant::O3);
        assert_eq!(reading.value, compute_sub_index(80.0, &O3_TABLE));

        let err = composite_from_samples(&[PollutantSample::new(Pollutant::O3, Some(-1.0))])
            .unwrap_err();
        assert_eq!(err.field(), Some("o3"));
    }
}
