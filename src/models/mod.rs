//! Data models
//!
//! Plain value records passed into and out of the estimator.

mod biometrics;
mod estimation;
mod goal;
mod lifestyle;

pub use biometrics::{BiometricInput, HeightInput, HeightUnit, Sex};
pub use estimation::{
    EstimateRequest, EstimationResult, LifestyleBreakdown, Timeline, Tip, TipKind,
};
pub use goal::{ActivityLevel, GoalCategory, GoalInput, TargetGoal};
pub use lifestyle::{
    FoodQuality, LifestyleInput, MedicalCondition, SleepQuality, StressLevel, WaterIntake,
};
