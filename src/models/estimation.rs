//! Estimation model
//!
//! The request bundle handed to the estimator and the result record it returns.

use serde::{Deserialize, Serialize};

use super::biometrics::BiometricInput;
use super::goal::GoalInput;
use super::lifestyle::LifestyleInput;

/// All inputs for one estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub biometrics: BiometricInput,
    #[serde(default)]
    pub lifestyle: LifestyleInput,
    #[serde(default)]
    pub goal: GoalInput,
}

/// Per-category lifestyle offsets in kcal/day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LifestyleBreakdown {
    pub sleep: i64,
    pub stress: i64,
    pub water: i64,
    pub medical: i64,
    pub total: i64,
}

/// Rough timeline toward the goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Timeline {
    /// Weeks to lose the reference amount at the current deficit
    Loss { weeks: f64 },
    /// Loss goal without a positive deficit
    MaintenanceOrGain,
    /// Daily surplus for a gain goal
    Surplus { kcal_per_day: i64 },
    Stable,
}

/// Which advisory a tip carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipKind {
    Sleep,
    Stress,
    Water,
    FoodQuality,
    Medical,
    GreatStart,
    MonitorClosely,
}

/// One advisory line: a short title plus the advice itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub kind: TipKind,
    pub title: String,
    pub text: String,
}

impl std::fmt::Display for Tip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.text)
    }
}

/// Result of a complete estimate. All calorie figures are kcal/day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    pub height_cm: f64,
    pub resting_burn: i64,
    pub total_daily_burn: i64,
    pub activity_multiplier: f64,
    pub food_multiplier: f64,
    /// Positive for a deficit, negative for a surplus
    pub goal_deficit: i64,
    pub base_target_calories: i64,
    pub lifestyle_adjustment: i64,
    pub lifestyle_breakdown: LifestyleBreakdown,
    pub final_target_calories: i64,
    pub daily_deficit: i64,
    pub timeline: Timeline,
    pub timeline_message: String,
    pub tips: Vec<Tip>,
}
