//! Breakpoint tables mapping pollutant concentrations to AQI sub-index ranges

use serde::Serialize;

use crate::models::Pollutant;

/// One linear segment of a breakpoint table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreakpointRow {
    pub concentration_low: f64,
    pub concentration_high: f64,
    pub index_low: f64,
    pub index_high: f64,
}

impl BreakpointRow {
    const fn new(
        concentration_low: f64,
        concentration_high: f64,
        index_low: f64,
        index_high: f64,
    ) -> Self {
        Self {
            concentration_low,
            concentration_high,
            index_low,
            index_high,
        }
    }

    #[must_use]
    pub fn contains(&self, concentration: f64) -> bool {
        concentration >= self.concentration_low && concentration <= self.concentration_high
    }

    /// Linear interpolation of the sub-index inside this row, unrounded
    #[must_use]
    pub fn interpolate(&self, concentration: f64) -> f64 {
        (self.index_high - self.index_low) / (self.concentration_high - self.concentration_low)
            * (concentration - self.concentration_low)
            + self.index_low
    }
}

/// Ordered breakpoint rows for exactly one pollutant
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreakpointTable {
    pub pollutant: Pollutant,
    pub rows: &'static [BreakpointRow],
}

const PM25_ROWS: [BreakpointRow; 6] = [
    BreakpointRow::new(0.0, 12.0, 0.0, 50.0),       // Good
    BreakpointRow::new(12.1, 35.4, 51.0, 100.0),    // Moderate
    BreakpointRow::new(35.5, 55.4, 101.0, 150.0),   // Unhealthy for Sensitive Groups
    BreakpointRow::new(55.5, 150.4, 151.0, 200.0),  // Unhealthy
    BreakpointRow::new(150.5, 250.4, 201.0, 300.0), // Very Unhealthy
    BreakpointRow::new(250.5, 500.4, 301.0, 500.0), // Hazardous
];

const PM10_ROWS: [BreakpointRow; 6] = [
    BreakpointRow::new(0.0, 54.0, 0.0, 50.0),
    BreakpointRow::new(55.0, 154.0, 51.0, 100.0),
    BreakpointRow::new(155.0, 254.0, 101.0, 150.0),
    BreakpointRow::new(255.0, 354.0, 151.0, 200.0),
    BreakpointRow::new(355.0, 424.0, 201.0, 300.0),
    BreakpointRow::new(425.0, 604.0, 301.0, 500.0),
];

// No hazardous row for ozone
const O3_ROWS: [BreakpointRow; 5] = [
    BreakpointRow::new(0.0, 54.0, 0.0, 50.0),
    BreakpointRow::new(55.0, 70.0, 51.0, 100.0),
    BreakpointRow::new(71.0, 85.0, 101.0, 150.0),
    BreakpointRow::new(86.0, 105.0, 151.0, 200.0),
    BreakpointRow::new(106.0, 200.0, 201.0, 300.0),
];

pub static PM25_TABLE: BreakpointTable = BreakpointTable {
    pollutant: Pollutant::Pm25,
    rows: &PM25_ROWS,
};

pub static PM10_TABLE: BreakpointTable = BreakpointTable {
    pollutant: Pollutant::Pm10,
    rows: &PM10_ROWS,
};

pub static O3_TABLE: BreakpointTable = BreakpointTable {
    pollutant: Pollutant::O3,
    rows: &O3_ROWS,
};

impl BreakpointTable {
    /// The table for `pollutant`
    #[must_use]
    pub fn for_pollutant(pollutant: Pollutant) -> &'static BreakpointTable {
        match pollutant {
            Pollutant::Pm25 => &PM25_TABLE,
            Pollutant::Pm10 => &PM10_TABLE,
            Pollutant::O3 => &O3_TABLE,
        }
    }

    /// Highest concentration covered by the table
    #[must_use]
    pub fn max_concentration(&self) -> f64 {
        self.rows.last().map_or(0.0, |row| row.concentration_high)
    }

    /// Check rows are well formed, ascending and non-overlapping
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let rows_ok = self.rows.iter().all(|row| {
            row.concentration_low >= 0.0
                && row.index_low >= 0.0
                && row.concentration_low < row.concentration_high
                && row.index_low < row.index_high
        });
        let ordered = self.rows.windows(2).all(|pair| {
            pair[0].concentration_high < pair[1].concentration_low
                && pair[0].index_high < pair[1].index_low
        });
        !self.rows.is_empty() && rows_ok && ordered
    }
}
