//! Air quality panel state and derived statistics
//!
//! The panel owns the fixed neighborhood table and the current selection.
//! All statistics are pure functions of the table, recomputed on demand.

use crate::dashboard::error::{DashboardError, DashboardResult};

use super::dataset::seed_neighborhoods;
use super::types::Neighborhood;

/// AQI reading above which an area counts as an active alert
pub const ALERT_THRESHOLD: u32 = 100;

/// Compute the citywide average AQI, rounded to the nearest integer
///
/// Defined as 0 for an empty list.
pub fn average_aqi(neighborhoods: &[Neighborhood]) -> u32 {
    if neighborhoods.is_empty() {
        return 0;
    }
    let sum: u32 = neighborhoods.iter().map(|n| n.aqi).sum();
    (f64::from(sum) / neighborhoods.len() as f64).round() as u32
}

/// Find the area with the lowest AQI reading
pub fn cleanest(neighborhoods: &[Neighborhood]) -> Option<&Neighborhood> {
    neighborhoods.iter().min_by_key(|n| n.aqi)
}

/// Count areas whose reading exceeds the alert threshold
pub fn alert_count(neighborhoods: &[Neighborhood]) -> usize {
    neighborhoods.iter().filter(|n| n.aqi > ALERT_THRESHOLD).count()
}

/// State of the air quality panel
///
/// The selection is stored as an id into the fixed table, never as a copy
/// of the record.
#[derive(Debug, Clone)]
pub struct AirPanel {
    neighborhoods: Vec<Neighborhood>,
    selected: Option<u32>,
}

impl AirPanel {
    /// Create a panel over the seed dataset, with the first area selected
    pub fn seeded() -> Self {
        Self::new(seed_neighborhoods())
    }

    /// Create a panel over a custom neighborhood table
    pub fn new(neighborhoods: Vec<Neighborhood>) -> Self {
        let selected = neighborhoods.first().map(|n| n.id);
        Self {
            neighborhoods,
            selected,
        }
    }

    /// The full neighborhood table
    pub fn neighborhoods(&self) -> &[Neighborhood] {
        &self.neighborhoods
    }

    /// Select a neighborhood by id
    ///
    /// Pure state replacement; unknown ids are rejected.
    pub fn select(&mut self, id: u32) -> DashboardResult<()> {
        if !self.neighborhoods.iter().any(|n| n.id == id) {
            return Err(DashboardError::NeighborhoodNotFound(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    /// The currently selected neighborhood, if any
    pub fn selected(&self) -> Option<&Neighborhood> {
        self.selected
            .and_then(|id| self.neighborhoods.iter().find(|n| n.id == id))
    }

    /// Citywide average AQI for the panel's table
    pub fn average_aqi(&self) -> u32 {
        average_aqi(&self.neighborhoods)
    }

    /// Cleanest area in the panel's table
    pub fn cleanest(&self) -> Option<&Neighborhood> {
        cleanest(&self.neighborhoods)
    }

    /// Number of areas currently in alert
    pub fn alert_count(&self) -> usize {
        alert_count(&self.neighborhoods)
    }
}

impl Default for AirPanel {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::air::types::AqiBand;

    fn sample() -> Vec<Neighborhood> {
        vec![
            Neighborhood::new(1, "A", 40, 10.0, 10.0),
            Neighborhood::new(2, "B", 60, 20.0, 20.0),
            Neighborhood::new(3, "C", 110, 30.0, 30.0),
        ]
    }

    #[test]
    fn test_average_aqi_is_rounded_mean() {
        // (40 + 60 + 110) / 3 = 70
        assert_eq!(average_aqi(&sample()), 70);

        // Rounding: (1 + 2) / 2 = 1.5 -> 2
        let pair = vec![
            Neighborhood::new(1, "A", 1, 0.0, 0.0),
            Neighborhood::new(2, "B", 2, 0.0, 0.0),
        ];
        assert_eq!(average_aqi(&pair), 2);
    }

    #[test]
    fn test_average_aqi_empty() {
        assert_eq!(average_aqi(&[]), 0);
    }

    #[test]
    fn test_seed_average() {
        // (42+28+125+18+85+35+22+68) / 8 = 423 / 8 = 52.875 -> 53
        let panel = AirPanel::seeded();
        assert_eq!(panel.average_aqi(), 53);
        assert_eq!(AqiBand::classify(panel.average_aqi()), AqiBand::Moderate);
    }

    #[test]
    fn test_cleanest_area() {
        let panel = AirPanel::seeded();
        let cleanest = panel.cleanest().unwrap();
        assert_eq!(cleanest.name, "Green Park");
        assert_eq!(cleanest.aqi, 18);
    }

    #[test]
    fn test_alert_count() {
        assert_eq!(alert_count(&sample()), 1);

        // Seed data has a single area above the threshold (Industrial Zone, 125)
        assert_eq!(AirPanel::seeded().alert_count(), 1);
    }

    #[test]
    fn test_first_area_selected_by_default() {
        let panel = AirPanel::seeded();
        assert_eq!(panel.selected().map(|n| n.id), Some(1));
    }

    #[test]
    fn test_select_replaces_selection() {
        let mut panel = AirPanel::seeded();
        panel.select(4).unwrap();
        assert_eq!(panel.selected().map(|n| n.name.as_str()), Some("Green Park"));

        panel.select(2).unwrap();
        assert_eq!(panel.selected().map(|n| n.id), Some(2));
    }

    #[test]
    fn test_select_unknown_id_rejected() {
        let mut panel = AirPanel::seeded();
        let err = panel.select(99).unwrap_err();
        assert!(matches!(err, DashboardError::NeighborhoodNotFound(99)));
        // Selection unchanged
        assert_eq!(panel.selected().map(|n| n.id), Some(1));
    }

    #[test]
    fn test_empty_panel_has_no_selection() {
        let panel = AirPanel::new(Vec::new());
        assert!(panel.selected().is_none());
        assert!(panel.cleanest().is_none());
        assert_eq!(panel.alert_count(), 0);
    }
}
