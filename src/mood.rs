//! Well-being estimates derived from the AQI
//!
//! Maps an AQI value to focus, energy and mood scores plus advisories. Every
//! score is a clamped linear function of the AQI, so worse air never raises a
//! score.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{MoodScores, MoodStatus};

/// AQI at which each score reaches zero
const FOCUS_ZERO_AQI: f64 = 400.0;
const ENERGY_ZERO_AQI: f64 = 350.0;
const MOOD_ZERO_AQI: f64 = 450.0;

/// Highest AQI the breakpoint tables produce
const TABULATED_MAX_AQI: u16 = 500;

const IN_RANGE_CONFIDENCE: f64 = 0.9;
const EXTRAPOLATED_CONFIDENCE: f64 = 0.6;

const BASE_RECOMMENDATIONS: [&str; 4] = [
    "Take breaks every 90 minutes to maintain your focus.",
    "Stay hydrated to counter pollution-related fatigue.",
    "Prefer light indoor exercise over outdoor activity.",
    "Try deep breathing exercises indoors to feel more centered.",
];

const UNHEALTHY_RECOMMENDATIONS: [&str; 2] = [
    "Keep windows closed and run an air purifier if you have one.",
    "Wear a well-fitted N95 mask if you need to go outside.",
];

const VERY_UNHEALTHY_RECOMMENDATIONS: [&str; 2] = [
    "Postpone demanding work; expect lower energy than usual.",
    "Avoid all outdoor exertion today.",
];

/// Tunable policy for mood derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodSettings {
    /// Recommendations are produced only above this AQI
    pub action_threshold: u16,
}

impl Default for MoodSettings {
    fn default() -> Self {
        Self {
            action_threshold: 100,
        }
    }
}

/// Derive scores with the default settings
#[must_use]
pub fn derive_mood(aqi: u16) -> MoodScores {
    MoodDeriver::default().derive(aqi)
}

/// Classify a score for display
#[must_use]
pub fn classify(score: f64) -> MoodStatus {
    MoodStatus::classify(score)
}

#[derive(Debug, Clone, Default)]
pub struct MoodDeriver {
    settings: MoodSettings,
}

impl MoodDeriver {
    #[must_use]
    pub fn new(settings: MoodSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn derive(&self, aqi: u16) -> MoodScores {
        let focus = declining_score(aqi, FOCUS_ZERO_AQI);
        let energy = declining_score(aqi, ENERGY_ZERO_AQI);
        let mood = declining_score(aqi, MOOD_ZERO_AQI);

        let confidence = if aqi <= TABULATED_MAX_AQI {
            IN_RANGE_CONFIDENCE
        } else {
            EXTRAPOLATED_CONFIDENCE
        };

        let recommendations = self.recommendations(aqi);

        debug!(
            "Derived mood for AQI {}: focus {:.2}, energy {:.2}, mood {:.2}, {} recommendations",
            aqi,
            focus,
            energy,
            mood,
            recommendations.len()
        );

        MoodScores {
            focus,
            energy,
            mood,
            confidence,
            recommendations,
        }
    }

    fn recommendations(&self, aqi: u16) -> Vec<String> {
        if aqi <= self.settings.action_threshold {
            return Vec::new();
        }

        let mut recommendations: Vec<String> =
            BASE_RECOMMENDATIONS.iter().map(ToString::to_string).collect();
        if aqi > 150 {
            recommendations.extend(UNHEALTHY_RECOMMENDATIONS.iter().map(ToString::to_string));
        }
        if aqi > 200 {
            recommendations.extend(VERY_UNHEALTHY_RECOMMENDATIONS.iter().map(ToString::to_string));
        }
        recommendations
    }
}

fn declining_score(aqi: u16, zero_at: f64) -> f64 {
    (1.0 - f64::from(aqi) / zero_at).clamp(0.0, 1.0)
}
