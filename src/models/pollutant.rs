//! Pollutant kinds and single-pollutant samples

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AqiError;

/// Pollutants with a breakpoint table.
///
/// Declaration order matters: when two pollutants produce the same sub-index,
/// the one declared first is reported as the contributing pollutant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pollutant {
    Pm25,
    Pm10,
    O3,
}

impl Pollutant {
    /// All supported pollutants, in tie-break order
    pub const ALL: [Pollutant; 3] = [Pollutant::Pm25, Pollutant::Pm10, Pollutant::O3];

    /// Key used by the pollution-index provider and in error fields
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "pm25",
            Pollutant::Pm10 => "pm10",
            Pollutant::O3 => "o3",
        }
    }

    /// Human-readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::O3 => "O3",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One pollutant's concentration in μg/m³, absent when the source did not report it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PollutantSample {
    pub pollutant: Pollutant,
    pub concentration: Option<f64>,
}

impl PollutantSample {
    #[must_use]
    pub fn new(pollutant: Pollutant, concentration: Option<f64>) -> Self {
        Self {
            pollutant,
            concentration,
        }
    }

    #[must_use]
    pub fn absent(pollutant: Pollutant) -> Self {
        Self::new(pollutant, None)
    }

    /// Check the concentration is a usable reading.
    ///
    /// Absent samples are valid; present ones must be finite and non-negative.
    pub fn validated(self) -> Result<Option<f64>, AqiError> {
        validate_concentration(self.pollutant.key(), self.concentration)
    }
}

/// Reject negative or non-finite concentrations, naming `field` in the error
pub(crate) fn validate_concentration(
    field: &str,
    concentration: Option<f64>,
) -> Result<Option<f64>, AqiError> {
    match concentration {
        None => Ok(None),
        Some(c) if !c.is_finite() => Err(AqiError::malformed(
            field,
            format!("concentration {c} is not a finite number"),
        )),
        Some(c) if c < 0.0 => Err(AqiError::malformed(
            field,
            format!("concentration {c} is negative"),
        )),
        Some(c) => Ok(Some(c)),
    }
}
