//! Core data types for the air quality panel
//!
//! This module defines:
//! - `Neighborhood`: a monitored area with its current AQI reading
//! - `AqiBand`: the four-band classification of an AQI value

use serde::{Deserialize, Serialize};

/// A monitored neighborhood with its current air quality reading
///
/// Neighborhoods form a fixed table loaded at process start; readings are
/// static for the lifetime of a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Neighborhood {
    /// Unique identifier
    pub id: u32,
    /// Display name (e.g., "Riverside")
    pub name: String,
    /// Current air quality index reading
    pub aqi: u32,
    /// Vertical position on the map, as a percentage of the viewport
    pub lat_pct: f32,
    /// Horizontal position on the map, as a percentage of the viewport
    pub lng_pct: f32,
}

impl Neighborhood {
    /// Create a new neighborhood entry
    pub fn new(id: u32, name: impl Into<String>, aqi: u32, lat_pct: f32, lng_pct: f32) -> Self {
        Self {
            id,
            name: name.into(),
            aqi,
            lat_pct,
            lng_pct,
        }
    }

    /// Classification band for this neighborhood's current reading
    pub fn band(&self) -> AqiBand {
        AqiBand::classify(self.aqi)
    }
}

/// AQI classification band
///
/// Bands are contiguous and exhaustive over all non-negative readings:
/// Good 0-50, Moderate 51-100, Unhealthy 101-150, Hazardous 151+.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AqiBand {
    /// 0-50: no health impact expected
    Good,
    /// 51-100: acceptable, sensitive groups may notice effects
    Moderate,
    /// 101-150: unhealthy for sensitive groups
    Unhealthy,
    /// 151+: health alert
    Hazardous,
}

impl AqiBand {
    /// Classify an AQI reading into its band
    pub fn classify(aqi: u32) -> Self {
        match aqi {
            0..=50 => AqiBand::Good,
            51..=100 => AqiBand::Moderate,
            101..=150 => AqiBand::Unhealthy,
            _ => AqiBand::Hazardous,
        }
    }

    /// Display label for this band
    pub fn label(&self) -> &'static str {
        match self {
            AqiBand::Good => "Good",
            AqiBand::Moderate => "Moderate",
            AqiBand::Unhealthy => "Unhealthy",
            AqiBand::Hazardous => "Hazardous",
        }
    }

    /// Health recommendation for readings in this band
    pub fn advisory(&self) -> &'static str {
        match self {
            AqiBand::Good => "Air quality is excellent! Perfect for outdoor activities.",
            AqiBand::Moderate => {
                "Acceptable air quality. Sensitive individuals should limit prolonged outdoor exertion."
            }
            AqiBand::Unhealthy => {
                "Unhealthy for sensitive groups. Consider wearing a mask outdoors."
            }
            AqiBand::Hazardous => "Health alert! Avoid outdoor activities and keep windows closed.",
        }
    }

    /// Get all bands for iteration (legend rendering)
    pub fn all() -> &'static [AqiBand] {
        &[
            AqiBand::Good,
            AqiBand::Moderate,
            AqiBand::Unhealthy,
            AqiBand::Hazardous,
        ]
    }
}

impl std::fmt::Display for AqiBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AqiBand::Good => write!(f, "good"),
            AqiBand::Moderate => write!(f, "moderate"),
            AqiBand::Unhealthy => write!(f, "unhealthy"),
            AqiBand::Hazardous => write!(f, "hazardous"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_classification() {
        assert_eq!(AqiBand::classify(0), AqiBand::Good);
        assert_eq!(AqiBand::classify(50), AqiBand::Good);
        assert_eq!(AqiBand::classify(51), AqiBand::Moderate);
        assert_eq!(AqiBand::classify(100), AqiBand::Moderate);
        assert_eq!(AqiBand::classify(101), AqiBand::Unhealthy);
        assert_eq!(AqiBand::classify(150), AqiBand::Unhealthy);
        assert_eq!(AqiBand::classify(151), AqiBand::Hazardous);
        assert_eq!(AqiBand::classify(999), AqiBand::Hazardous);
    }

    #[test]
    fn test_bands_contiguous_and_exhaustive() {
        // Every reading up to well past the top threshold maps to exactly one band,
        // and band transitions only happen at the documented thresholds.
        let mut prev = AqiBand::classify(0);
        let mut transitions = Vec::new();
        for aqi in 1..=500 {
            let band = AqiBand::classify(aqi);
            if band != prev {
                transitions.push(aqi);
                prev = band;
            }
        }
        assert_eq!(transitions, vec![51, 101, 151]);
    }

    #[test]
    fn test_neighborhood_band() {
        let n = Neighborhood::new(3, "Industrial Zone", 125, 70.0, 30.0);
        assert_eq!(n.band(), AqiBand::Unhealthy);
        assert_eq!(n.band().label(), "Unhealthy");
    }

    #[test]
    fn test_neighborhood_serialization() {
        let n = Neighborhood::new(1, "Downtown", 42, 30.0, 25.0);
        let json = serde_json::to_string(&n).unwrap();
        let restored: Neighborhood = serde_json::from_str(&json).unwrap();
        assert_eq!(n, restored);
    }
}
