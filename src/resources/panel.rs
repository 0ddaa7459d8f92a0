//! Resource savings panel state and score computation
//!
//! Scores are completion-weighted percentages: the points of completed habits
//! over the total possible points of the subset, rounded. An empty subset
//! scores 0 so category scores stay defined when no habits exist for a
//! category.

use crate::dashboard::error::{DashboardError, DashboardResult};

use super::dataset::{seed_habits, seed_tips};
use super::types::{Habit, HabitCategory, SavingTip};

/// Completion-weighted percentage score over a set of habits
///
/// `round(100 * completed points / total points)`, 0 for an empty set.
pub fn score<'a, I>(habits: I) -> u8
where
    I: IntoIterator<Item = &'a Habit>,
{
    let mut completed: u32 = 0;
    let mut total: u32 = 0;
    for habit in habits {
        total += habit.points;
        if habit.completed {
            completed += habit.points;
        }
    }
    if total == 0 {
        return 0;
    }
    (100.0 * f64::from(completed) / f64::from(total)).round() as u8
}

/// State of the resource savings panel
#[derive(Debug, Clone)]
pub struct ResourcePanel {
    habits: Vec<Habit>,
    tips: Vec<SavingTip>,
}

impl ResourcePanel {
    /// Create a panel over the seed habits and tips
    pub fn seeded() -> Self {
        Self::new(seed_habits(), seed_tips())
    }

    /// Create a panel over custom tables
    pub fn new(habits: Vec<Habit>, tips: Vec<SavingTip>) -> Self {
        Self { habits, tips }
    }

    /// The full habit checklist
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// Habits belonging to one category
    pub fn habits_in(&self, category: HabitCategory) -> impl Iterator<Item = &Habit> {
        self.habits.iter().filter(move |h| h.category == category)
    }

    /// The static tips list
    pub fn tips(&self) -> &[SavingTip] {
        &self.tips
    }

    /// Flip a habit's completion flag
    ///
    /// Returns the new completion state; unknown ids are rejected.
    pub fn toggle(&mut self, id: u32) -> DashboardResult<bool> {
        let habit = self
            .habits
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or(DashboardError::HabitNotFound(id))?;
        habit.completed = !habit.completed;
        Ok(habit.completed)
    }

    /// Score over all habits
    pub fn overall_score(&self) -> u8 {
        score(&self.habits)
    }

    /// Score over one category's habits
    pub fn category_score(&self, category: HabitCategory) -> u8 {
        score(self.habits_in(category))
    }

    /// Number of habits currently completed
    pub fn completed_count(&self) -> usize {
        self.habits.iter().filter(|h| h.completed).count()
    }
}

impl Default for ResourcePanel {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_panel() -> ResourcePanel {
        ResourcePanel::new(
            vec![
                Habit::new(1, "a", 5, HabitCategory::Energy),
                Habit::new(2, "b", 8, HabitCategory::Energy),
                Habit::new(3, "c", 12, HabitCategory::Water),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn test_score_empty_set_is_zero() {
        let empty: Vec<Habit> = Vec::new();
        assert_eq!(score(&empty), 0);

        let panel = ResourcePanel::new(Vec::new(), Vec::new());
        assert_eq!(panel.overall_score(), 0);
        assert_eq!(panel.category_score(HabitCategory::Energy), 0);
    }

    #[test]
    fn test_score_all_completed_is_hundred() {
        let mut panel = small_panel();
        for id in [1, 2, 3] {
            panel.toggle(id).unwrap();
        }
        assert_eq!(panel.overall_score(), 100);
        assert_eq!(panel.category_score(HabitCategory::Energy), 100);
        assert_eq!(panel.category_score(HabitCategory::Water), 100);
    }

    #[test]
    fn test_scores_after_completing_energy_habits() {
        let mut panel = small_panel();
        panel.toggle(1).unwrap();
        panel.toggle(2).unwrap();

        // Energy: 13/13, water: 0/12, overall: 13/25
        assert_eq!(panel.category_score(HabitCategory::Energy), 100);
        assert_eq!(panel.category_score(HabitCategory::Water), 0);
        assert_eq!(panel.overall_score(), 52);
    }

    #[test]
    fn test_score_monotonically_non_decreasing() {
        let mut panel = ResourcePanel::seeded();
        let ids: Vec<u32> = panel.habits().iter().map(|h| h.id).collect();

        let mut last = panel.overall_score();
        for id in ids {
            panel.toggle(id).unwrap();
            let next = panel.overall_score();
            assert!(next >= last, "score decreased after completing habit {}", id);
            last = next;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut panel = ResourcePanel::seeded();
        let before = panel.habits()[0].completed;

        assert_eq!(panel.toggle(1).unwrap(), !before);
        assert_eq!(panel.toggle(1).unwrap(), before);
        assert_eq!(panel.habits()[0].completed, before);
        assert_eq!(panel.overall_score(), 0);
    }

    #[test]
    fn test_toggle_unknown_id_rejected() {
        let mut panel = ResourcePanel::seeded();
        let err = panel.toggle(42).unwrap_err();
        assert!(matches!(err, DashboardError::HabitNotFound(42)));
    }

    #[test]
    fn test_rounding_matches_nearest_integer() {
        // 1/3 completed by points: 100 * 5 / 15 = 33.33 -> 33
        let mut panel = ResourcePanel::new(
            vec![
                Habit::new(1, "a", 5, HabitCategory::Energy),
                Habit::new(2, "b", 5, HabitCategory::Energy),
                Habit::new(3, "c", 5, HabitCategory::Energy),
            ],
            Vec::new(),
        );
        panel.toggle(1).unwrap();
        assert_eq!(panel.overall_score(), 33);

        // 2/3: 66.67 -> 67
        panel.toggle(2).unwrap();
        assert_eq!(panel.overall_score(), 67);
    }

    #[test]
    fn test_completed_count() {
        let mut panel = small_panel();
        assert_eq!(panel.completed_count(), 0);
        panel.toggle(3).unwrap();
        assert_eq!(panel.completed_count(), 1);
    }
}
