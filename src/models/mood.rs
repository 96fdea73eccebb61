//! Well-being scores derived from air quality

use serde::{Deserialize, Serialize};

/// Focus, energy and mood estimates for the current air quality.
///
/// The caller holds `Option<MoodScores>`: `None` means not computed yet, while
/// an empty `recommendations` list means the air is fine and nothing is advised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodScores {
    /// Cognitive focus (0.0-1.0)
    pub focus: f64,
    /// Energy level (0.0-1.0)
    pub energy: f64,
    /// Emotional well-being (0.0-1.0)
    pub mood: f64,
    /// Confidence in the estimate (0.0-1.0)
    pub confidence: f64,
    /// Advisories, most important first
    pub recommendations: Vec<String>,
}

impl MoodScores {
    /// Mean of focus, energy and mood
    #[must_use]
    pub fn overall(&self) -> f64 {
        (self.focus + self.energy + self.mood) / 3.0
    }

    #[must_use]
    pub fn trend(&self) -> MoodTrend {
        MoodTrend::from(MoodStatus::classify(self.overall()))
    }

    /// Whether any advisory was produced
    #[must_use]
    pub fn needs_action(&self) -> bool {
        !self.recommendations.is_empty()
    }
}

/// Display classification of a single score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoodStatus {
    /// Score >= 0.7
    Good,
    /// Score >= 0.5
    Moderate,
    /// Score < 0.5
    Low,
}

impl MoodStatus {
    #[must_use]
    pub fn classify(score: f64) -> Self {
        if score >= 0.7 {
            MoodStatus::Good
        } else if score >= 0.5 {
            MoodStatus::Moderate
        } else {
            MoodStatus::Low
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            MoodStatus::Good => "#4caf50",
            MoodStatus::Moderate => "#ff9800",
            MoodStatus::Low => "#f44336",
        }
    }
}

/// Direction of the overall mood score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoodTrend {
    Positive,
    Stable,
    NeedsAttention,
}

impl From<MoodStatus> for MoodTrend {
    fn from(status: MoodStatus) -> Self {
        match status {
            MoodStatus::Good => MoodTrend::Positive,
            MoodStatus::Moderate => MoodTrend::Stable,
            MoodStatus::Low => MoodTrend::NeedsAttention,
        }
    }
}

/// Coarse impact of the air on well-being
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AirQualityImpact {
    Low,
    Moderate,
    High,
}

impl AirQualityImpact {
    #[must_use]
    pub fn from_aqi(aqi: u16) -> Self {
        if aqi > 100 {
            AirQualityImpact::High
        } else if aqi > 50 {
            AirQualityImpact::Moderate
        } else {
            AirQualityImpact::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1.0, MoodStatus::Good)]
    #[case(0.70, MoodStatus::Good)]
    #[case(0.6999, MoodStatus::Moderate)]
    #[case(0.50, MoodStatus::Moderate)]
    #[case(0.499, MoodStatus::Low)]
    #[case(0.0, MoodStatus::Low)]
    fn test_classify_boundaries(#[case] score: f64, #[case] expected: MoodStatus) {
        assert_eq!(MoodStatus::classify(score), expected);
    }

    #[rstest]
    #[case(0, AirQualityImpact::Low)]
    #[case(50, AirQualityImpact::Low)]
    #[case(51, AirQualityImpact::Moderate)]
    #[case(100, AirQualityImpact::Moderate)]
    #[case(101, AirQualityImpact::High)]
    fn test_air_quality_impact(#[case] aqi: u16, #[case] expected: AirQualityImpact) {
        assert_eq!(AirQualityImpact::from_aqi(aqi), expected);
    }

    #[test]
    fn test_overall_and_trend() {
        let scores = MoodScores {
            focus: 0.9,
            energy: 0.6,
            mood: 0.3,
            confidence: 0.9,
            recommendations: vec![],
        };
        assert!((scores.overall() - 0.6).abs() < 1e-9);
        assert_eq!(scores.trend(), MoodTrend::Stable);
        assert!(!scores.needs_action());
    }
}
