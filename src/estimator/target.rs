//! Target composition and timeline
//!
//! base = total daily burn - goal deficit
//! final = base + lifestyle adjustment
//!
//! The timeline's daily deficit is `total - final + lifestyle`, which reduces
//! to the goal deficit: lifestyle offsets never stretch the timeline.

use serde::Serialize;

use super::tables::{goal_deficit, DAYS_PER_WEEK, KCAL_PER_LB, TIMELINE_GOAL_LBS};
use crate::models::{GoalCategory, TargetGoal, Timeline};

/// Targets for one goal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetComposition {
    pub goal_deficit: i64,
    pub base_target_calories: i64,
    pub final_target_calories: i64,
    pub daily_deficit: i64,
    pub timeline: Timeline,
}

/// Combine total daily burn, goal and lifestyle adjustment into targets
pub fn compose_target(
    total_daily_burn: i64,
    goal: &TargetGoal,
    lifestyle_adjustment: i64,
) -> TargetComposition {
    let deficit = goal_deficit(goal);
    let base_target_calories = total_daily_burn.saturating_sub(deficit);
    let final_target_calories = base_target_calories.saturating_add(lifestyle_adjustment);
    let daily_deficit = total_daily_burn
        .saturating_sub(final_target_calories)
        .saturating_add(lifestyle_adjustment);
    let timeline = estimate_timeline(goal.category(), daily_deficit);

    tracing::debug!(
        "Target for '{}': base {} kcal, final {} kcal, daily deficit {}",
        goal.as_str(),
        base_target_calories,
        final_target_calories,
        daily_deficit
    );

    TargetComposition {
        goal_deficit: deficit,
        base_target_calories,
        final_target_calories,
        daily_deficit,
        timeline,
    }
}

/// Timeline for a goal category at a given daily deficit
pub fn estimate_timeline(category: GoalCategory, daily_deficit: i64) -> Timeline {
    match category {
        GoalCategory::Loss if daily_deficit > 0 => {
            let total_deficit_needed = TIMELINE_GOAL_LBS * KCAL_PER_LB;
            let days = total_deficit_needed / daily_deficit as f64;
            Timeline::Loss {
                weeks: days / DAYS_PER_WEEK,
            }
        }
        GoalCategory::Loss => Timeline::MaintenanceOrGain,
        GoalCategory::Gain => Timeline::Surplus {
            kcal_per_day: daily_deficit.saturating_abs(),
        },
        GoalCategory::Maintenance => Timeline::Stable,
    }
}

/// Narrative sentence for a timeline
pub fn timeline_message(timeline: &Timeline) -> String {
    match timeline {
        Timeline::Loss { weeks } => format!(
            "Achieving this target aims for a {}lb loss in approximately {:.1} weeks.",
            TIMELINE_GOAL_LBS, weeks
        ),
        Timeline::MaintenanceOrGain => {
            "You are currently aiming for maintenance or gain.".to_string()
        }
        Timeline::Surplus { kcal_per_day } => format!(
            "Targeting a surplus of {} kcal/day to support gaining weight.",
            kcal_per_day
        ),
        Timeline::Stable => {
            "This target aims to keep your weight stable (maintenance).".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moderate_loss_targets() {
        let t = compose_target(2759, &TargetGoal::ModerateLoss, 0);
        assert_eq!(t.goal_deficit, 500);
        assert_eq!(t.base_target_calories, 2259);
        assert_eq!(t.final_target_calories, 2259);
        assert_eq!(t.daily_deficit, 500);
        assert_eq!(t.timeline, Timeline::Loss { weeks: 5.0 });
    }

    #[test]
    fn test_lifestyle_adjustment_does_not_change_daily_deficit() {
        let t = compose_target(2759, &TargetGoal::ModerateLoss, 475);
        assert_eq!(t.final_target_calories, 2734);
        assert_eq!(t.daily_deficit, 500);
    }

    #[test]
    fn test_aggressive_loss_weeks() {
        let t = compose_target(3000, &TargetGoal::AggressiveLoss, 150);
        assert_eq!(t.base_target_calories, 2250);
        assert_eq!(t.final_target_calories, 2400);
        match t.timeline {
            Timeline::Loss { weeks } => assert!((weeks - 17500.0 / 750.0 / 7.0).abs() < 1e-12),
            other => panic!("expected loss timeline, got {:?}", other),
        }
        assert_eq!(
            timeline_message(&t.timeline),
            "Achieving this target aims for a 5lb loss in approximately 3.3 weeks."
        );
    }

    #[test]
    fn test_gain_reports_surplus() {
        let t = compose_target(2500, &TargetGoal::ModerateGain, 0);
        assert_eq!(t.base_target_calories, 2750);
        assert_eq!(t.daily_deficit, -250);
        assert_eq!(t.timeline, Timeline::Surplus { kcal_per_day: 250 });
        assert_eq!(
            timeline_message(&t.timeline),
            "Targeting a surplus of 250 kcal/day to support gaining weight."
        );
    }

    #[test]
    fn test_maintenance_is_stable() {
        let t = compose_target(2200, &TargetGoal::Maintenance, 75);
        assert_eq!(t.base_target_calories, 2200);
        assert_eq!(t.final_target_calories, 2275);
        assert_eq!(t.timeline, Timeline::Stable);
        assert_eq!(
            timeline_message(&t.timeline),
            "This target aims to keep your weight stable (maintenance)."
        );
    }

    #[test]
    fn test_unknown_loss_goal_without_deficit() {
        let goal = TargetGoal::from_str("gentle_loss");
        let t = compose_target(2200, &goal, 0);
        assert_eq!(t.goal_deficit, 0);
        assert_eq!(t.timeline, Timeline::MaintenanceOrGain);
        assert_eq!(
            timeline_message(&t.timeline),
            "You are currently aiming for maintenance or gain."
        );
    }

    #[test]
    fn test_extreme_burn_saturates() {
        let t = compose_target(i64::MAX, &TargetGoal::ModerateGain, 475);
        assert_eq!(t.base_target_calories, i64::MAX);
        assert_eq!(t.final_target_calories, i64::MAX);

        let t = compose_target(i64::MIN, &TargetGoal::AggressiveLoss, 0);
        assert_eq!(t.base_target_calories, i64::MIN);
        assert_eq!(t.timeline, Timeline::MaintenanceOrGain);
    }

    #[test]
    fn test_loss_message_format() {
        assert_eq!(
            timeline_message(&Timeline::Loss { weeks: 5.0 }),
            "Achieving this target aims for a 5lb loss in approximately 5.0 weeks."
        );
    }
}
