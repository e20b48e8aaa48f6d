//! Calorie target estimator
//!
//! A fixed, pure pipeline:
//! height -> resting burn -> total daily burn -> lifestyle adjustment ->
//! target composition -> tips.
//!
//! Nothing here keeps state between calls; identical inputs always give
//! identical results.

pub mod daily_burn;
pub mod height;
pub mod lifestyle;
pub mod resting_burn;
pub mod tables;
pub mod target;
pub mod tips;

use serde::Serialize;
use thiserror::Error;

use crate::models::{
    BiometricInput, EstimateRequest, EstimationResult, GoalInput, LifestyleInput,
};

pub use daily_burn::calculate_total_daily_burn;
pub use height::resolve_height_cm;
pub use lifestyle::{calculate_lifestyle_adjustment, medical_adjustment};
pub use resting_burn::{calculate_resting_burn, mifflin_st_jeor};
pub use target::{compose_target, estimate_timeline, timeline_message, TargetComposition};
pub use tips::generate_tips;

/// Why an estimate cannot be computed yet
///
/// These are expected states of a partly filled form, not failures.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "reason", content = "value", rename_all = "snake_case")]
pub enum NotReady {
    #[error("age has not been entered")]
    MissingAge,

    #[error("age {0} is below the minimum of {}", tables::MIN_AGE_YEARS)]
    AgeBelowMinimum(u32),

    #[error("weight has not been entered")]
    MissingWeight,

    #[error("weight must be greater than zero (got {0} kg)")]
    NonPositiveWeight(f64),

    #[error("height could not be resolved")]
    UnresolvedHeight,

    #[error("height {0:.1} cm is below the minimum of {} cm", tables::MIN_HEIGHT_CM)]
    HeightBelowMinimum(f64),

    #[error("resting burn evaluated to {0} kcal")]
    NonPositiveRestingBurn(i64),

    #[error("resting burn {0} kcal is above the maximum of {}", tables::MAX_RESTING_BURN_KCAL)]
    RestingBurnAboveMaximum(f64),
}

/// Run the full pipeline
pub fn estimate(
    biometrics: &BiometricInput,
    lifestyle: &LifestyleInput,
    goal: &GoalInput,
) -> Result<EstimationResult, NotReady> {
    let valid = resting_burn::validate(biometrics).map_err(|reason| {
        tracing::debug!("Estimate not ready: {}", reason);
        reason
    })?;
    let resting_burn = resting_burn::resting_burn_for(&valid, biometrics.sex)?;

    let total_daily_burn =
        calculate_total_daily_burn(resting_burn, goal.activity_level, lifestyle.food_quality);

    let breakdown = calculate_lifestyle_adjustment(lifestyle);
    let target = compose_target(total_daily_burn, &goal.target_goal, breakdown.total);
    let tips = generate_tips(lifestyle, &breakdown);

    Ok(EstimationResult {
        height_cm: valid.height_cm,
        resting_burn,
        total_daily_burn,
        activity_multiplier: tables::activity_multiplier(goal.activity_level),
        food_multiplier: tables::food_multiplier(lifestyle.food_quality),
        goal_deficit: target.goal_deficit,
        base_target_calories: target.base_target_calories,
        lifestyle_adjustment: breakdown.total,
        lifestyle_breakdown: breakdown,
        final_target_calories: target.final_target_calories,
        daily_deficit: target.daily_deficit,
        timeline_message: timeline_message(&target.timeline),
        timeline: target.timeline,
        tips,
    })
}

/// Run the full pipeline on a bundled request
pub fn estimate_request(request: &EstimateRequest) -> Result<EstimationResult, NotReady> {
    estimate(&request.biometrics, &request.lifestyle, &request.goal)
}
