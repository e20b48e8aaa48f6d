//! Adjustment tables and formula constants
//!
//! Every lookup here is total: unrecognized keys resolve to a neutral value.

use crate::models::{
    ActivityLevel, FoodQuality, MedicalCondition, Sex, SleepQuality, StressLevel, TargetGoal,
    WaterIntake,
};

// ============================================================================
// Resting Burn (Mifflin-St Jeor)
// ============================================================================

/// kcal per kilogram of body weight
pub const WEIGHT_COEFFICIENT: f64 = 10.0;
/// kcal per centimeter of height
pub const HEIGHT_COEFFICIENT: f64 = 6.25;
/// kcal subtracted per year of age
pub const AGE_COEFFICIENT: f64 = 5.0;
/// Sex constant for males
pub const MALE_CONSTANT: f64 = 5.0;
/// Sex constant for females
pub const FEMALE_CONSTANT: f64 = -161.0;

/// Youngest age the formula is applied to
pub const MIN_AGE_YEARS: u32 = 15;
/// Shortest height the formula is applied to
pub const MIN_HEIGHT_CM: f64 = 100.0;
/// Largest resting burn passed downstream; keeps every later step in range
pub const MAX_RESTING_BURN_KCAL: f64 = 100_000.0;

// ============================================================================
// Height Conversion
// ============================================================================

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;
/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

// ============================================================================
// Timeline
// ============================================================================

/// kcal in one pound of body fat
pub const KCAL_PER_LB: f64 = 3500.0;
/// Reference loss used for the week estimate
pub const TIMELINE_GOAL_LBS: f64 = 5.0;
/// Days per week
pub const DAYS_PER_WEEK: f64 = 7.0;

// ============================================================================
// Multipliers
// ============================================================================

/// Multiplier used when the activity level is not recognized
pub const DEFAULT_ACTIVITY_MULTIPLIER: f64 = 1.2;
/// Multiplier used when the food quality is not recognized
pub const NEUTRAL_FOOD_MULTIPLIER: f64 = 1.0;

/// Sex constant for the resting burn formula
pub fn sex_constant(sex: Sex) -> f64 {
    match sex {
        Sex::Male => MALE_CONSTANT,
        Sex::Female => FEMALE_CONSTANT,
    }
}

/// Activity multiplier applied to resting burn
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::Other => {
            tracing::warn!(
                "Unrecognized activity level, using multiplier {}",
                DEFAULT_ACTIVITY_MULTIPLIER
            );
            DEFAULT_ACTIVITY_MULTIPLIER
        }
    }
}

/// Food quality multiplier (thermic effect of food)
pub fn food_multiplier(quality: FoodQuality) -> f64 {
    match quality {
        FoodQuality::HighProtein => 1.03,
        FoodQuality::Balanced => 1.0,
        FoodQuality::HighProcessed => 0.97,
        FoodQuality::Other => {
            tracing::warn!("Unrecognized food quality, using neutral multiplier");
            NEUTRAL_FOOD_MULTIPLIER
        }
    }
}

// ============================================================================
// Linear Offsets (kcal/day added to the target)
// ============================================================================

pub fn sleep_offset(sleep: SleepQuality) -> i64 {
    match sleep {
        SleepQuality::LessThanSix => 100,
        SleepQuality::SixToSeven => 50,
        SleepQuality::Optimal => 0,
        SleepQuality::Other => {
            tracing::warn!("Unrecognized sleep quality, no adjustment applied");
            0
        }
    }
}

pub fn stress_offset(stress: StressLevel) -> i64 {
    match stress {
        StressLevel::Low => 0,
        StressLevel::Moderate => 75,
        StressLevel::High => 150,
        StressLevel::Other => {
            tracing::warn!("Unrecognized stress level, no adjustment applied");
            0
        }
    }
}

pub fn water_offset(water: WaterIntake) -> i64 {
    match water {
        WaterIntake::Low => 75,
        WaterIntake::Adequate => 25,
        WaterIntake::Ideal => 0,
        WaterIntake::Other => {
            tracing::warn!("Unrecognized water intake, no adjustment applied");
            0
        }
    }
}

pub fn medical_offset(condition: MedicalCondition) -> i64 {
    match condition {
        MedicalCondition::NoneApply => 0,
        MedicalCondition::Hypothyroid => 150,
        MedicalCondition::Pcos => 100,
        MedicalCondition::InsulinResistance => 80,
        MedicalCondition::AppetiteMeds => 120,
        MedicalCondition::Other => {
            tracing::warn!("Unrecognized medical condition, no adjustment applied");
            0
        }
    }
}

/// kcal/day subtracted from total daily burn for a goal (negative = surplus)
pub fn goal_deficit(goal: &TargetGoal) -> i64 {
    match goal {
        TargetGoal::Maintenance => 0,
        TargetGoal::ModerateLoss => 500,
        TargetGoal::AggressiveLoss => 750,
        TargetGoal::ModerateGain => -250,
        TargetGoal::Other(key) => {
            tracing::warn!("Unrecognized target goal '{}', no deficit applied", key);
            0
        }
    }
}
