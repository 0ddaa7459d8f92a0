//! Dashboard core error types
//!
//! Every failure at the core boundary is an unknown id: intent events
//! reference entries of the fixed tables, and buttons in the rendering layer
//! are generated from those same tables, so in normal operation these errors
//! only surface for hand-crafted requests.

use thiserror::Error;

/// Errors that can occur applying an intent event to the dashboard
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Referenced neighborhood is not in the fixed table
    #[error("Neighborhood not found: {0}")]
    NeighborhoodNotFound(u32),

    /// Referenced habit is not in the fixed table
    #[error("Habit not found: {0}")]
    HabitNotFound(u32),

    /// Referenced waste item is not in the fixed catalog
    #[error("Waste item not found: {0}")]
    ItemNotFound(u32),

    /// Referenced reward is not in the fixed ladder
    #[error("Reward not found: {0}")]
    RewardNotFound(u32),
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashboardError::HabitNotFound(7);
        assert_eq!(err.to_string(), "Habit not found: 7");

        let err = DashboardError::RewardNotFound(2);
        assert_eq!(err.to_string(), "Reward not found: 2");
    }
}
