//! Single-pollutant sub-index calculation

use super::breakpoints::BreakpointTable;

/// Calculate the AQI sub-index for one concentration.
///
/// Uses the first row whose range contains `concentration` and the linear
/// interpolation formula published by the EPA:
///
/// `AQI = (I_high - I_low) / (C_high - C_low) * (C - C_low) + I_low`
///
/// rounded to the nearest integer, ties away from zero. A concentration no row
/// covers (above the table, or in the gap between two rows) yields `0`.
///
/// # Examples
///
/// ```
/// use airmood::aqi::{compute_sub_index, PM25_TABLE};
///
/// assert_eq!(compute_sub_index(10.0, &PM25_TABLE), 42);
/// assert_eq!(compute_sub_index(200.0, &PM25_TABLE), 250);
/// assert_eq!(compute_sub_index(600.0, &PM25_TABLE), 0);
/// ```
#[must_use]
pub fn compute_sub_index(concentration: f64, table: &BreakpointTable) -> u16 {
    for row in table.rows {
        if row.contains(concentration) {
            // f64::round rounds half away from zero
            return row.interpolate(concentration).round() as u16;
        }
    }

    tracing::trace!(
        pollutant = %table.pollutant,
        concentration,
        "concentration outside breakpoint table, using 0"
    );
    0
}
