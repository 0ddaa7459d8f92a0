//! Seed dataset for the resource savings panel

use super::types::{Habit, HabitCategory, SavingTip};

/// The fixed list of daily saving habits, all initially incomplete
pub fn seed_habits() -> Vec<Habit> {
    use HabitCategory::{Energy, Water};
    vec![
        Habit::new(1, "Turn off lights when leaving rooms", 5, Energy),
        Habit::new(2, "Unplug devices when not in use", 8, Energy),
        Habit::new(3, "Use natural light during the day", 6, Energy),
        Habit::new(4, "Set AC to 24\u{b0}C or higher", 10, Energy),
        Habit::new(5, "Turn off TV when not watching", 4, Energy),
        Habit::new(6, "Take shorter showers (< 5 mins)", 12, Water),
        Habit::new(7, "Fix leaky faucets", 15, Water),
        Habit::new(8, "Use a bucket instead of running water", 10, Water),
        Habit::new(9, "Run washing machine with full loads only", 8, Water),
        Habit::new(10, "Turn off tap while brushing teeth", 6, Water),
    ]
}

/// The fixed list of saving tips
pub fn seed_tips() -> Vec<SavingTip> {
    use HabitCategory::{Energy, Water};
    vec![
        SavingTip::new(
            "Smart Thermostat",
            "Installing a programmable thermostat can save up to 10% on heating and cooling costs.",
            "~\u{20b9}2,000/year",
            Energy,
        ),
        SavingTip::new(
            "LED Upgrade",
            "Replace incandescent bulbs with LEDs - they use 75% less energy and last 25x longer.",
            "~\u{20b9}1,500/year",
            Energy,
        ),
        SavingTip::new(
            "Rainwater Harvesting",
            "Collect rainwater for gardening - reduces water bill and helps the environment.",
            "~\u{20b9}1,000/year",
            Water,
        ),
        SavingTip::new(
            "Low-Flow Fixtures",
            "Install low-flow showerheads and faucet aerators to reduce water consumption by 50%.",
            "~\u{20b9}800/year",
            Water,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_habits_split_by_category() {
        let habits = seed_habits();
        let energy = habits.iter().filter(|h| h.category == HabitCategory::Energy).count();
        let water = habits.iter().filter(|h| h.category == HabitCategory::Water).count();
        assert_eq!(energy, 5);
        assert_eq!(water, 5);
    }

    #[test]
    fn test_seed_habits_unique_ids() {
        let habits = seed_habits();
        let mut ids: Vec<u32> = habits.iter().map(|h| h.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), habits.len());
    }

    #[test]
    fn test_seed_habits_all_incomplete() {
        assert!(seed_habits().iter().all(|h| !h.completed));
    }

    #[test]
    fn test_seed_tips_cover_both_categories() {
        let tips = seed_tips();
        assert!(tips.iter().any(|t| t.category == HabitCategory::Energy));
        assert!(tips.iter().any(|t| t.category == HabitCategory::Water));
    }
}
