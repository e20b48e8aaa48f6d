//! Total daily burn (TDEE)

use super::tables::{activity_multiplier, food_multiplier};
use crate::models::{ActivityLevel, FoodQuality};

/// Scale resting burn by activity and food quality
///
/// Both multipliers are applied before a single rounding step.
pub fn calculate_total_daily_burn(
    resting_burn: i64,
    activity_level: ActivityLevel,
    food_quality: FoodQuality,
) -> i64 {
    let activity = activity_multiplier(activity_level);
    let food = food_multiplier(food_quality);
    let burn = (resting_burn as f64 * activity * food).round() as i64;

    tracing::debug!(
        "Total daily burn {} kcal ({} x {} x {})",
        burn,
        resting_burn,
        activity,
        food
    );
    burn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moderate_balanced() {
        assert_eq!(
            calculate_total_daily_burn(1780, ActivityLevel::Moderate, FoodQuality::Balanced),
            2759
        );
    }

    #[test]
    fn test_rounds_once_at_the_end() {
        // 1345 x 1.375 = 1849.375, x 0.97 = 1793.894 -> 1794
        assert_eq!(
            calculate_total_daily_burn(1345, ActivityLevel::Light, FoodQuality::HighProcessed),
            1794
        );
        // 1345 x 1.2 = 1614, x 1.03 = 1662.42 -> 1662
        assert_eq!(
            calculate_total_daily_burn(1345, ActivityLevel::Sedentary, FoodQuality::HighProtein),
            1662
        );
    }

    #[test]
    fn test_unrecognized_activity_defaults_to_sedentary() {
        assert_eq!(
            calculate_total_daily_burn(1780, ActivityLevel::Other, FoodQuality::Balanced),
            calculate_total_daily_burn(1780, ActivityLevel::Sedentary, FoodQuality::Balanced)
        );
        assert_eq!(
            calculate_total_daily_burn(1780, ActivityLevel::Other, FoodQuality::Other),
            2136
        );
    }

    #[test]
    fn test_active_high_protein() {
        // 2000 x 1.725 x 1.03 = 3553.5 -> 3554
        assert_eq!(
            calculate_total_daily_burn(2000, ActivityLevel::Active, FoodQuality::HighProtein),
            3554
        );
    }
}
