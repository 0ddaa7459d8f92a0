//! Seed dataset for the waste segregation panel

use super::types::{Reward, WasteCategory, WasteItem};

/// Points awarded for inspecting an item's disposal guidance
pub const INSPECT_AWARD: u32 = 2;

/// Point total a fresh session starts with
pub const STARTING_POINTS: u32 = 175;

/// Day streak a fresh session starts with (static in this build)
pub const STARTING_STREAK: u32 = 12;

/// The fixed waste item catalog
pub fn seed_items() -> Vec<WasteItem> {
    use WasteCategory::{General, Hazardous, Organic, Recyclable};
    vec![
        WasteItem::new(1, "Vegetable Peels", Organic, "\u{1f955}",
            "Compost them to create nutrient-rich soil for gardening."),
        WasteItem::new(2, "Fruit Scraps", Organic, "\u{1f34e}",
            "Can be used for composting or making natural fertilizers."),
        WasteItem::new(3, "Tea Leaves", Organic, "\u{1f375}",
            "Great for composting - rich in nitrogen!"),
        WasteItem::new(4, "Egg Shells", Organic, "\u{1f95a}",
            "Crush and add to compost or directly to garden soil."),
        WasteItem::new(5, "Plastic Bottles", Recyclable, "\u{1f9f4}",
            "Rinse, remove cap, and flatten before recycling."),
        WasteItem::new(6, "Cardboard Boxes", Recyclable, "\u{1f4e6}",
            "Break down flat and keep dry for recycling."),
        WasteItem::new(7, "Newspapers", Recyclable, "\u{1f4f0}",
            "Bundle together - great for paper recycling!"),
        WasteItem::new(8, "Glass Jars", Recyclable, "\u{1fad9}",
            "Rinse thoroughly, remove labels if possible."),
        WasteItem::new(9, "Aluminum Cans", Recyclable, "\u{1f96b}",
            "Rinse and crush to save space."),
        WasteItem::new(10, "Batteries", Hazardous, "\u{1f50b}",
            "Never throw in regular trash - drop at collection centers."),
        WasteItem::new(11, "Old Medicines", Hazardous, "\u{1f48a}",
            "Return to pharmacies for safe disposal."),
        WasteItem::new(12, "Paint Cans", Hazardous, "\u{1f3a8}",
            "Take to hazardous waste collection facility."),
        WasteItem::new(13, "Light Bulbs", Hazardous, "\u{1f4a1}",
            "CFLs contain mercury - handle with care, special disposal needed."),
        WasteItem::new(14, "Broken Ceramics", General, "\u{1f3fa}",
            "Wrap carefully in paper and dispose in general waste."),
        WasteItem::new(15, "Diapers", General, "\u{1f476}",
            "Wrap tightly and dispose in general waste bin."),
        WasteItem::new(16, "Styrofoam", General, "\u{1f4cb}",
            "Not recyclable in most areas - use sparingly."),
    ]
}

/// The fixed reward ladder; the starter reward begins claimed
pub fn seed_rewards() -> Vec<Reward> {
    vec![
        Reward::new(1, "Eco Starter", "Segregate waste for 7 days straight", 50).claimed(),
        Reward::new(2, "Green Champion", "Complete 100 correct segregations", 150),
        Reward::new(3, "Zero Waste Hero", "Reach 500 eco points", 300),
        Reward::new(4, "Community Leader", "Share app with 5 friends", 100),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_items_per_category() {
        let items = seed_items();
        for category in WasteCategory::all() {
            let count = items.iter().filter(|i| i.category == *category).count();
            assert_eq!(count, 4, "expected 4 items in {}", category);
        }
    }

    #[test]
    fn test_seed_items_unique_ids() {
        let items = seed_items();
        let mut ids: Vec<u32> = items.iter().map(|i| i.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_seed_rewards_only_starter_claimed() {
        let rewards = seed_rewards();
        assert_eq!(rewards.len(), 4);
        assert!(rewards[0].claimed);
        assert!(rewards[1..].iter().all(|r| !r.claimed));
    }
}
