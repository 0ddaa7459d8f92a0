//! Seed dataset for the air quality panel
//!
//! Fixed table of monitored neighborhoods, loaded at process start.
//! Positions are percentages of the map viewport.

use super::types::Neighborhood;

/// The fixed list of monitored neighborhoods
pub fn seed_neighborhoods() -> Vec<Neighborhood> {
    vec![
        Neighborhood::new(1, "Downtown", 42, 30.0, 25.0),
        Neighborhood::new(2, "Riverside", 28, 50.0, 60.0),
        Neighborhood::new(3, "Industrial Zone", 125, 70.0, 30.0),
        Neighborhood::new(4, "Green Park", 18, 25.0, 70.0),
        Neighborhood::new(5, "Harbor District", 85, 60.0, 75.0),
        Neighborhood::new(6, "University Area", 35, 40.0, 45.0),
        Neighborhood::new(7, "Suburb Heights", 22, 15.0, 40.0),
        Neighborhood::new(8, "Market Square", 68, 55.0, 20.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_unique_ids() {
        let neighborhoods = seed_neighborhoods();
        let mut ids: Vec<u32> = neighborhoods.iter().map(|n| n.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), neighborhoods.len());
    }

    #[test]
    fn test_seed_positions_within_viewport() {
        for n in seed_neighborhoods() {
            assert!((0.0..=100.0).contains(&n.lat_pct), "{} lat out of range", n.name);
            assert!((0.0..=100.0).contains(&n.lng_pct), "{} lng out of range", n.name);
        }
    }
}
